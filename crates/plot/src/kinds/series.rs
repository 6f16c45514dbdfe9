//! Regional-mean time series over the whole record and period differences.

use climplot_difference::{Operand, difference};
use climplot_stats::{SummaryStats, linear_fit, running_mean};

use super::{
    WEIGHTING_NOTE, area_at, axis_label, hints, line_difference_text, period_area, period_pair,
};
use crate::context::PlotContext;
use crate::error::PlotError;
use crate::output::{ExportTable, PlotBody, PlotOutput, Series, Statistic};
use crate::request::PlotRequest;

/// Window of the running mean drawn over the monthly series.
const RUNNING_WINDOW: usize = 12;

pub(super) fn time_series(
    request: &PlotRequest,
    ctx: &PlotContext<'_>,
) -> Result<PlotOutput, PlotError> {
    let variable = request.variable();
    let grid = ctx.grid(variable)?;
    let indices: Vec<usize> = (0..grid.n_time()).collect();
    let area = area_at(request, &grid, &indices)?;

    let scheme = ctx.scheme();
    let x: Vec<f64> = indices.iter().map(|&t| scheme.model_year(t)).collect();
    let y = area.series().to_vec();

    let mut series = vec![Series::new("Regional mean", x.clone(), y.clone())];
    let smooth = running_mean(&y, RUNNING_WINDOW);
    if !smooth.is_empty() {
        series.push(Series::new(
            format!("{RUNNING_WINDOW}-month running mean"),
            x[RUNNING_WINDOW - 1..].to_vec(),
            smooth,
        ));
    }
    if let Some(fit) = linear_fit(&x, &y) {
        series.push(Series::new(
            format!("Trend: {:.2e} per year", fit.slope),
            x.clone(),
            x.iter().map(|&xi| fit.at(xi)).collect(),
        ));
    }

    let export = ExportTable::new(
        Statistic::Average,
        x.iter().map(|year| format!("{year:.2}")).collect(),
    )
    .with_column("average", y.clone());

    Ok(PlotOutput {
        kind: request.kind().name(),
        title: format!("Regional Average {} Time Series", variable.title()),
        value_label: axis_label(variable),
        body: PlotBody::Line {
            x_label: "Model Year".into(),
            x_ticks: Vec::new(),
            series,
            band: None,
        },
        summary: Some(SummaryStats::from_values(&y)),
        color_range: None,
        overlay: vec![request.bbox().describe(), WEIGHTING_NOTE.into()],
        exports: vec![export],
        masked: 0,
        hints: hints(request, request.color()),
    })
}

pub(super) fn series_difference(
    request: &PlotRequest,
    ctx: &PlotContext<'_>,
) -> Result<PlotOutput, PlotError> {
    let (a, b) = period_pair(request)?;
    let variable = request.variable();
    let grid = ctx.grid(variable)?;
    let (area_a, indices_a) = period_area(request, ctx, &grid, a, request.months())?;
    let (area_b, _) = period_area(request, ctx, &grid, b, request.months())?;

    let mode = request.mode();
    let result = difference(&Operand::from(&area_a), &Operand::from(&area_b), mode)?;
    let pair = format!("{} minus {}", ctx.label(a)?, ctx.label(b)?);
    let scheme = ctx.scheme();
    let x: Vec<f64> = indices_a.iter().map(|&t| scheme.model_year(t)).collect();

    let (value_label, stats) = line_difference_text(variable, mode, &result.summary);
    let mut overlay = vec![
        request.bbox().describe(),
        format!("Months: {}", request.months().names()),
        WEIGHTING_NOTE.into(),
    ];
    overlay.extend(stats);

    Ok(PlotOutput {
        kind: request.kind().name(),
        title: format!("{} Difference\n{pair}", variable.title()),
        value_label,
        body: PlotBody::Line {
            x_label: "Model Year".into(),
            x_ticks: Vec::new(),
            series: vec![Series::new(pair, x, result.value)],
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
