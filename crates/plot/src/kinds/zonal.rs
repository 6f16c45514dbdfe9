//! Longitude-averaged latitude profiles and their differences.

use climplot_difference::{Operand, difference};
use climplot_stats::SummaryStats;

use super::{axis_label, hints, line_difference_text, period_pair, period_zonal};
use crate::context::PlotContext;
use crate::error::PlotError;
use crate::output::{PlotBody, PlotOutput, Series};
use crate::request::PlotRequest;

const LATITUDE_LABEL: &str = "Latitude (degrees)";

pub(super) fn profile(
    request: &PlotRequest,
    ctx: &PlotContext<'_>,
) -> Result<PlotOutput, PlotError> {
    let [period] = request.periods() else {
        return Err(PlotError::InvalidRequest {
            reason: format!(
                "zonal_profile needs 1 period, got {}",
                request.periods().len()
            ),
        });
    };
    let variable = request.variable();
    let grid = ctx.grid(variable)?;
    let zonal = period_zonal(request, ctx, &grid, *period)?;
    let label = ctx.label(*period)?;
    let summary = SummaryStats::from_values(zonal.values());

    Ok(PlotOutput {
        kind: request.kind().name(),
        title: format!(
            "Longitudinal Average {} Distribution\n{label}",
            variable.title()
        ),
        value_label: axis_label(variable),
        body: PlotBody::Line {
            x_label: LATITUDE_LABEL.into(),
            x_ticks: Vec::new(),
            series: vec![Series::new(label, zonal.lats().to_vec(), zonal.values().to_vec())],
            band: None,
        },
        summary: Some(summary),
        color_range: None,
        overlay: vec![
            request.bbox().describe(),
            format!("Months: {}", request.months().names()),
        ],
        exports: Vec::new(),
        masked: 0,
        hints: hints(request, request.color()),
    })
}

pub(super) fn profile_difference(
    request: &PlotRequest,
    ctx: &PlotContext<'_>,
) -> Result<PlotOutput, PlotError> {
    let (a, b) = period_pair(request)?;
    let variable = request.variable();
    let grid = ctx.grid(variable)?;
    let zonal_a = period_zonal(request, ctx, &grid, a)?;
    let zonal_b = period_zonal(request, ctx, &grid, b)?;

    let mode = request.mode();
    let result = difference(&Operand::from(&zonal_a), &Operand::from(&zonal_b), mode)?;
    let pair = format!("{} minus {}", ctx.label(a)?, ctx.label(b)?);

    let (value_label, stats) = line_difference_text(variable, mode, &result.summary);
    let mut overlay = vec![request.bbox().describe(), format!("Difference: {pair}")];
    overlay.extend(stats);

    Ok(PlotOutput {
        kind: request.kind().name(),
        title: format!("{} Difference\n{pair}", variable.title()),
        value_label,
        body: PlotBody::Line {
            x_label: LATITUDE_LABEL.into(),
            x_ticks: Vec::new(),
            series: vec![Series::new(pair.clone(), zonal_a.lats().to_vec(), result.value.clone())],
            band: None,
        },
        summary: Some(result.summary),
        color_range: None,
        overlay,
        exports: Vec::new(),
        masked: result.masked,
        hints: hints(request, request.color()),
    })
}
