//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};

use climplot_calendar::{MonthSet, PeriodScheme, TimePeriod};
use climplot_difference::DifferenceMode;
use climplot_grid::{BoundingBox, FieldCatalog, FieldSpec};
use climplot_io::ReaderConfig;
use climplot_plot::{PlotKind, PlotRequest};

use crate::config::{IoConfig, PeriodsToml, PlotToml};

/// Parses a plot kind name such as `"annual_cycle"`.
pub fn parse_plot_kind(s: &str) -> Result<PlotKind> {
    match PlotKind::from_name(&s.to_lowercase()) {
        Some(kind) => Ok(kind),
        None => bail!("unknown plot kind: {s:?}"),
    }
}

/// Builds the variable-to-fields catalog from the TOML I/O configuration.
pub fn build_catalog(io: &IoConfig) -> Result<FieldCatalog> {
    if io.temperature_var.is_empty() {
        bail!("[io].temperature_var must not be empty");
    }
    if io.precip_vars.is_empty() {
        bail!("[io].precip_vars needs at least one field name");
    }
    Ok(FieldCatalog::new(
        FieldSpec::new([io.temperature_var.as_str()], 1.0),
        FieldSpec::new(&io.precip_vars, io.precip_scale),
    ))
}

/// Builds a [`ReaderConfig`] loading exactly the fields of `catalog`.
pub fn build_reader_config(io: &IoConfig, catalog: &FieldCatalog) -> ReaderConfig {
    let mut cfg = ReaderConfig::for_catalog(catalog);
    if let Some(ref aliases) = io.lat_aliases {
        cfg = cfg.with_lat_aliases(aliases);
    }
    if let Some(ref aliases) = io.lon_aliases {
        cfg = cfg.with_lon_aliases(aliases);
    }
    cfg
}

/// Builds a [`PeriodScheme`] from the TOML period configuration.
pub fn build_scheme(periods: &PeriodsToml) -> Result<PeriodScheme> {
    if periods.length_years == 0 {
        bail!("[periods].length_years must be at least 1");
    }
    Ok(PeriodScheme::new(periods.base_year, periods.length_years))
}

/// Builds a [`PlotRequest`] from the TOML plot configuration.
///
/// Only structural checks happen here; [`PlotRequest::validate`] runs when
/// the plot is built.
pub fn build_plot_request(plot: &PlotToml) -> Result<PlotRequest> {
    let kind = parse_plot_kind(&plot.kind)?;
    let months = MonthSet::new(plot.months.iter().copied()).context("invalid [plot].months")?;
    let periods = plot
        .periods
        .iter()
        .map(|&p| TimePeriod::new(p))
        .collect::<Result<Vec<_>, _>>()
        .context("invalid [plot].periods")?;
    let bbox = BoundingBox::new(
        plot.min_latitude,
        plot.max_latitude,
        plot.min_longitude,
        plot.max_longitude,
    )
    .context("invalid bounding box in [plot]")?;
    let mode = if plot.show_percent {
        DifferenceMode::Percent
    } else {
        DifferenceMode::Absolute
    };

    Ok(PlotRequest::new(kind, plot.variable)
        .with_months(months)
        .with_periods(periods)
        .with_bbox(bbox)
        .with_mode(mode)
        .with_num_std_dev(plot.num_std_dev)
        .with_color(plot.color.as_str())
        .with_central_longitude(plot.central_longitude))
}
