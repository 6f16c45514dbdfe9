//! Plot command: read the dataset, build one plot payload, write JSON.

use std::fs;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use climplot_io::read_dataset;
use climplot_plot::{PlotContext, build_plot};

use crate::cli::PlotArgs;
use crate::config::ClimplotConfig;
use crate::convert;

pub fn run(args: PlotArgs) -> Result<()> {
    let _cmd = info_span!("plot").entered();
    let config = ClimplotConfig::load(&args.config)?;
    let input = config.input_path(args.input.as_deref())?;

    let catalog = convert::build_catalog(&config.io)?;
    let reader_cfg = convert::build_reader_config(&config.io, &catalog);
    let scheme = convert::build_scheme(&config.periods)?;
    let request = convert::build_plot_request(&config.plot)?;
    // fail on a malformed request before touching the file
    request.validate().context("invalid [plot] section")?;

    let output = {
        let dataset = read_dataset(&input, &reader_cfg)
            .with_context(|| format!("failed to read dataset: {}", input.display()))?;
        info!(
            n_time = dataset.n_time(),
            n_lat = dataset.lats().len(),
            n_lon = dataset.lons().len(),
            "dataset loaded"
        );

        let complete = scheme.n_periods(dataset.n_time());
        for period in request.periods() {
            if period.index() >= complete {
                warn!(
                    period = period.index(),
                    complete,
                    "period extends past the end of the record"
                );
            }
        }

        let ctx = PlotContext::new(&dataset, &catalog, scheme);
        build_plot(&request, &ctx).context("failed to build plot")?
    };

    let json = serde_json::to_string_pretty(&output).context("failed to serialise plot")?;
    match args.output.or(config.io.output) {
        Some(path) => {
            fs::write(&path, &json)
                .with_context(|| format!("failed to write plot: {}", path.display()))?;
            info!(path = %path.display(), kind = output.kind, "plot written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
