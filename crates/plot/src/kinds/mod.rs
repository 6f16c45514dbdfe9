//! One module per plot family; each runs select → reduce → format.

mod annual;
mod map;
mod series;
mod zonal;

use climplot_calendar::{MonthSet, TimePeriod};
use climplot_difference::DifferenceMode;
use climplot_grid::{AreaMean, Averaged, Grid, Reduction, Variable, ZonalMean, average};
use climplot_stats::SummaryStats;

use crate::context::PlotContext;
use crate::error::PlotError;
use crate::output::{PlotOutput, RenderHints};
use crate::request::{LineAxis, PlotKind, PlotRequest};

pub(crate) fn build(request: &PlotRequest, ctx: &PlotContext<'_>) -> Result<PlotOutput, PlotError> {
    match request.kind() {
        PlotKind::Map => map::period_map(request, ctx),
        PlotKind::MapDifference => map::difference_map(request, ctx),
        PlotKind::ZonalProfile => zonal::profile(request, ctx),
        PlotKind::LineDifference {
            axis: LineAxis::Latitude,
        } => zonal::profile_difference(request, ctx),
        PlotKind::AnnualCycle => annual::annual_cycle(request, ctx),
        PlotKind::TimeSeries => series::time_series(request, ctx),
        PlotKind::LineDifference {
            axis: LineAxis::Time,
        } => series::series_difference(request, ctx),
    }
}

/// The two periods of a difference request, minuend first.
fn period_pair(request: &PlotRequest) -> Result<(TimePeriod, TimePeriod), PlotError> {
    match request.periods() {
        [a, b] => Ok((*a, *b)),
        other => Err(PlotError::InvalidRequest {
            reason: format!("{} needs 2 periods, got {}", request.kind().name(), other.len()),
        }),
    }
}

/// Axis label with units, e.g. `"Precipitation Rate (mm/day)"`.
fn axis_label(variable: Variable) -> String {
    let name = match variable {
        Variable::Temperature => variable.title(),
        Variable::Precipitation => variable.display_name(),
    };
    format!("{name} ({})", variable.units())
}

fn difference_label(variable: Variable) -> String {
    format!("Difference in {} ({})", variable.title(), variable.units())
}

/// Value label and mean/RMS overlay lines of a line-difference plot.
fn line_difference_text(
    variable: Variable,
    mode: DifferenceMode,
    s: &SummaryStats,
) -> (String, [String; 2]) {
    match mode {
        DifferenceMode::Percent => (
            "Percent Change (%)".to_string(),
            [
                format!("Mean % diff: {:.2}%", s.mean),
                format!("RMS % diff: {:.2}%", s.rms),
            ],
        ),
        DifferenceMode::Absolute => (
            difference_label(variable),
            [
                format!("Mean diff: {:.2}", s.mean),
                format!("RMS diff: {:.2}", s.rms),
            ],
        ),
    }
}

fn hints(request: &PlotRequest, colormap: &str) -> RenderHints {
    RenderHints {
        colormap: colormap.to_string(),
        central_longitude: request.central_longitude(),
        num_std_dev: request.num_std_dev(),
    }
}

fn reduction_mismatch(wanted: &str, got: &Averaged) -> PlotError {
    PlotError::InvalidRequest {
        reason: format!("expected a {wanted} reduction, got {}", got.kind()),
    }
}

/// Time-mean field of `months` in `period`, restricted to the request box.
fn period_field(
    request: &PlotRequest,
    ctx: &PlotContext<'_>,
    grid: &Grid,
    period: TimePeriod,
) -> Result<Grid, PlotError> {
    let indices = ctx.indices(period, request.months())?;
    match average(grid, &indices, Some(request.bbox()), Reduction::None)? {
        Averaged::Field(field) => Ok(field.time_mean()),
        other => Err(reduction_mismatch("field", &other)),
    }
}

/// Time-meaned zonal profile of `months` in `period`.
fn period_zonal(
    request: &PlotRequest,
    ctx: &PlotContext<'_>,
    grid: &Grid,
    period: TimePeriod,
) -> Result<ZonalMean, PlotError> {
    let indices = ctx.indices(period, request.months())?;
    match average(
        grid,
        &indices,
        Some(request.bbox()),
        Reduction::LonOnly { time_mean: true },
    )? {
        Averaged::Zonal(z) => Ok(z),
        other => Err(reduction_mismatch("zonal", &other)),
    }
}

/// Cosine-weighted regional means at the given flat indices.
fn area_at(
    request: &PlotRequest,
    grid: &Grid,
    indices: &[usize],
) -> Result<AreaMean, PlotError> {
    match average(grid, indices, Some(request.bbox()), Reduction::LatLon)? {
        Averaged::Area(a) => Ok(a),
        other => Err(reduction_mismatch("area", &other)),
    }
}

/// Regional means of `months` in `period`.
fn period_area(
    request: &PlotRequest,
    ctx: &PlotContext<'_>,
    grid: &Grid,
    period: TimePeriod,
    months: &MonthSet,
) -> Result<(AreaMean, Vec<usize>), PlotError> {
    let indices = ctx.indices(period, months)?;
    let area = area_at(request, grid, &indices)?;
    Ok((area, indices))
}

const WEIGHTING_NOTE: &str = "Regional averages weighted by cos(latitude)";
