//! Indices command: print the flat time indices of a period and month set.

use anyhow::{Context, Result, bail};
use tracing::{debug, info_span};

use climplot_calendar::{MonthSet, TimePeriod, select_indices};

use crate::cli::IndicesArgs;

pub fn run(args: IndicesArgs) -> Result<()> {
    let _cmd = info_span!("indices").entered();
    if args.length == 0 {
        bail!("--length must be at least 1");
    }
    let period = TimePeriod::new(args.period).context("invalid --period")?;
    let months = MonthSet::new(args.months).context("invalid --months")?;

    let indices =
        select_indices(period, &months, args.length).context("invalid --period/--length")?;
    debug!(
        n = indices.len(),
        first = indices.first().copied(),
        last = indices.last().copied(),
        "indices selected"
    );

    let line = indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    println!("{line}");
    Ok(())
}
