//! Period-average and two-period difference maps.

use climplot_calendar::TimePeriod;
use climplot_difference::{DifferenceMode, DifferenceResult, Operand, difference};
use climplot_grid::{Grid, Variable};
use climplot_stats::SummaryStats;
use tracing::debug;

use super::{axis_label, difference_label, hints, period_field, period_pair};
use crate::context::PlotContext;
use crate::error::PlotError;
use crate::output::{ColorRange, PlotBody, PlotOutput};
use crate::request::PlotRequest;

/// Smallest half-width of a percent-change colour bar.
const PERCENT_RANGE_FLOOR: f64 = 2.0;

pub(super) fn period_map(
    request: &PlotRequest,
    ctx: &PlotContext<'_>,
) -> Result<PlotOutput, PlotError> {
    match request.periods() {
        [period] => single_map(request, ctx, *period),
        [_, _] => difference_map(request, ctx),
        other => Err(PlotError::InvalidRequest {
            reason: format!("map needs 1 or 2 periods, got {}", other.len()),
        }),
    }
}

fn single_map(
    request: &PlotRequest,
    ctx: &PlotContext<'_>,
    period: TimePeriod,
) -> Result<PlotOutput, PlotError> {
    let variable = request.variable();
    let grid = ctx.grid(variable)?;
    let field = period_field(request, ctx, &grid, period)?;
    let summary = SummaryStats::from_values(field.values());
    debug!(count = summary.count, mean = summary.mean, "period map");

    let units = variable.units();
    let (color_range, mean_label) = match variable {
        Variable::Precipitation => (
            ColorRange::from_spread(&summary, request.num_std_dev()),
            "Mean Rate",
        ),
        Variable::Temperature => (ColorRange::from_extent(&summary), "Mean"),
    };
    let overlay = vec![
        request.bbox().describe(),
        format!("{mean_label}: {:.2} {units}", summary.mean),
        format!("Std Dev: {:.2} {units}", summary.std),
        format!("Range: [{:.2}, {:.2}] {units}", summary.min, summary.max),
    ];

    Ok(PlotOutput {
        kind: request.kind().name(),
        title: format!("{}\n{}", variable.display_name(), ctx.label(period)?),
        value_label: axis_label(variable),
        body: field_body(&field, field.values()),
        summary: Some(summary),
        color_range: Some(color_range),
        overlay,
        exports: Vec::new(),
        masked: 0,
        hints: hints(request, request.color()),
    })
}

/// Map of the first period minus the second, in the request's mode.
pub(super) fn difference_map(
    request: &PlotRequest,
    ctx: &PlotContext<'_>,
) -> Result<PlotOutput, PlotError> {
    let (a, b) = period_pair(request)?;
    let variable = request.variable();
    let grid = ctx.grid(variable)?;
    let field_a = period_field(request, ctx, &grid, a)?;
    let field_b = period_field(request, ctx, &grid, b)?;

    let mode = request.mode();
    let result = difference(&Operand::from(&field_a), &Operand::from(&field_b), mode)?;
    debug!(masked = result.masked, mean = result.summary.mean, "difference map");

    let percent = mode == DifferenceMode::Percent;
    let (value_label, colormap, floor) = if percent {
        ("Percentage Change (%)".to_string(), "RdBu_r", PERCENT_RANGE_FLOOR)
    } else {
        (difference_label(variable), request.color(), 0.0)
    };

    Ok(PlotOutput {
        kind: request.kind().name(),
        title: format!(
            "Difference in {}\n{} minus {}",
            variable.title(),
            ctx.label(a)?,
            ctx.label(b)?
        ),
        value_label,
        body: field_body(&field_a, &result.value),
        summary: Some(result.summary),
        color_range: Some(ColorRange::symmetric(&result.summary, floor)),
        overlay: difference_overlay(request, &result),
        exports: Vec::new(),
        masked: result.masked,
        hints: hints(request, colormap),
    })
}

fn difference_overlay(request: &PlotRequest, result: &DifferenceResult) -> Vec<String> {
    let s = &result.summary;
    let mut lines = vec![
        request.bbox().describe(),
        format!("Mean diff: {:.2}", s.mean),
        format!("Std diff: {:.2}", s.std),
        format!("RMS diff: {:.2}", s.rms),
        format!("Range: [{:.2}, {:.2}]", s.min, s.max),
    ];
    if result.masked > 0 {
        lines.push(format!(
            "{} cell(s) undefined (zero baseline)",
            result.masked
        ));
    }
    lines
}

/// Field body over `grid`'s coordinates with one time step of `values`.
fn field_body(grid: &Grid, values: &[f64]) -> PlotBody {
    let n_lon = grid.n_lon().max(1);
    PlotBody::Field {
        lats: grid.lats().to_vec(),
        lons: grid.lons().to_vec(),
        values: values.chunks(n_lon).map(<[f64]>::to_vec).collect(),
    }
}
