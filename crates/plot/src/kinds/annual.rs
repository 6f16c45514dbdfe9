//! Twelve-month regional annual cycle with spread shading.

use climplot_calendar::{MonthSet, TimePeriod, month_abbrev};
use climplot_difference::{DifferenceMode, Operand, difference};
use climplot_grid::{Grid, WeightedScalar};
use climplot_stats::SummaryStats;
use tracing::debug;

use super::{WEIGHTING_NOTE, axis_label, hints, period_area};
use crate::context::PlotContext;
use crate::error::PlotError;
use crate::output::{Band, ExportTable, PlotBody, PlotOutput, Series, Statistic};
use crate::request::PlotRequest;

pub(super) fn annual_cycle(
    request: &PlotRequest,
    ctx: &PlotContext<'_>,
) -> Result<PlotOutput, PlotError> {
    let variable = request.variable();
    let grid = ctx.grid(variable)?;
    let k = request.num_std_dev();
    let x: Vec<f64> = (0..12).map(f64::from).collect();
    let month_labels = month_labels()?;

    let mut average = ExportTable::new(Statistic::Average, month_labels.clone());
    let mut std_dev = ExportTable::new(Statistic::StdDev, month_labels.clone());
    let mut cycles = Vec::with_capacity(request.periods().len());
    for &period in request.periods() {
        let cycle = monthly_means(request, ctx, &grid, period)?;
        let p = period.index();
        average = average.with_column(
            format!("period_{p}_avg"),
            cycle.iter().map(WeightedScalar::mean).collect(),
        );
        std_dev = std_dev.with_column(
            format!("period_{p}_std"),
            cycle.iter().map(WeightedScalar::std).collect(),
        );
        cycles.push((period, cycle));
    }

    let base_title = format!("Regional Average {}", variable.title());
    let mut overlay = Vec::new();
    let (title, series, band, summary) = match cycles.as_slice() {
        [(period, cycle)] => {
            let means: Vec<f64> = cycle.iter().map(WeightedScalar::mean).collect();
            let stds: Vec<f64> = cycle.iter().map(WeightedScalar::std).collect();
            let band = Band::around(format!("±{k} std"), x.clone(), &means, &stds, k);
            let summary = SummaryStats::from_values(&means);
            let series = Series::new(ctx.label(*period)?, x.clone(), means);
            (base_title, series, band, summary)
        }
        [(a, cycle_a), (b, cycle_b)] => {
            let result = difference(
                &Operand::from(cycle_a.as_slice()),
                &Operand::from(cycle_b.as_slice()),
                DifferenceMode::Absolute,
            )?;
            let combined = result.std.clone().unwrap_or_else(|| vec![0.0; 12]);
            overlay.push(format!("Mean difference: {:.2}", result.summary.mean));
            overlay.push(format!("RMS difference: {:.2}", result.summary.rms));
            average = average.with_column("difference", result.value.clone());
            std_dev = std_dev.with_column("difference_std", combined.clone());

            let pair = format!("{} minus {}", ctx.label(*a)?, ctx.label(*b)?);
            let band = Band::around(format!("±{k} std"), x.clone(), &result.value, &combined, k);
            let series = Series::new(pair.clone(), x.clone(), result.value);
            (
                format!("{base_title} Difference\n{pair}"),
                series,
                band,
                result.summary,
            )
        }
        other => {
            return Err(PlotError::InvalidRequest {
                reason: format!("annual_cycle needs 1 or 2 periods, got {}", other.len()),
            });
        }
    };

    let spread = if cycles.len() == 2 {
        "combined uncertainty"
    } else {
        "inter-annual variability"
    };
    overlay.push(request.bbox().describe());
    overlay.push(WEIGHTING_NOTE.into());
    overlay.push(format!("Shading shows ±{k} standard deviations of {spread}"));

    Ok(PlotOutput {
        kind: request.kind().name(),
        title,
        value_label: axis_label(variable),
        body: PlotBody::Line {
            x_label: "Month".into(),
            x_ticks: month_labels,
            series: vec![series],
            band: Some(band),
        },
        summary: Some(summary),
        color_range: None,
        overlay,
        exports: vec![average, std_dev],
        masked: 0,
        hints: hints(request, request.color()),
    })
}

/// Weighted regional mean and inter-annual std for each calendar month.
fn monthly_means(
    request: &PlotRequest,
    ctx: &PlotContext<'_>,
    grid: &Grid,
    period: TimePeriod,
) -> Result<Vec<WeightedScalar>, PlotError> {
    (1..=12u8)
        .map(|m| -> Result<WeightedScalar, PlotError> {
            let (area, indices) = period_area(request, ctx, grid, period, &MonthSet::single(m)?)?;
            debug!(month = m, n = indices.len(), mean = area.summary().mean(), "monthly mean");
            Ok(area.summary())
        })
        .collect()
}

fn month_labels() -> Result<Vec<String>, PlotError> {
    (1..=12u8)
        .map(|m| -> Result<String, PlotError> { Ok(month_abbrev(m)?.to_string()) })
        .collect()
}
