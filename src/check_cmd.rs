//! Check command: open the dataset and describe what it holds.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use climplot_io::{DatasetSummary, list_variables, read_dataset};

use crate::cli::CheckArgs;
use crate::config::ClimplotConfig;
use crate::convert;

pub fn run(args: CheckArgs) -> Result<()> {
    let _cmd = info_span!("check").entered();
    let config = ClimplotConfig::load(&args.config)?;
    let input = config.input_path(args.input.as_deref())?;

    let variables = list_variables(&input)
        .with_context(|| format!("failed to open dataset: {}", input.display()))?;
    info!(path = %input.display(), n = variables.len(), "dataset opened");

    let catalog = convert::build_catalog(&config.io)?;
    let reader_cfg = convert::build_reader_config(&config.io, &catalog);
    let scheme = convert::build_scheme(&config.periods)?;
    let dataset = read_dataset(&input, &reader_cfg)
        .with_context(|| format!("failed to read dataset: {}", input.display()))?;

    println!("file: {}", input.display());
    println!("variables: {}", variables.join(", "));
    print!("{}", DatasetSummary::describe(&dataset));
    println!(
        "complete {}-year periods: {}",
        scheme.length_years(),
        scheme.n_periods(dataset.n_time())
    );
    Ok(())
}
