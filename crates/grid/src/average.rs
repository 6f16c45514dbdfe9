//! Time slicing, bounding-box selection and cosine-latitude weighted reduction.

use serde::Serialize;

use crate::bbox::{BoundingBox, subset};
use crate::error::GridError;
use crate::grid::Grid;
use crate::longitude::normalize_longitudes;
use crate::weights::cos_weights;

/// Which spatial axes [`average`] collapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Reduction {
    /// Keep the full (time, lat, lon) field.
    None,
    /// Plain mean along longitude; optionally also along time.
    LonOnly { time_mean: bool },
    /// Cosine-latitude weighted mean over latitude and longitude per time step.
    LatLon,
}

/// A `(mean, std)` pair produced by the cosine-latitude reducer.
///
/// Only this crate can build one, so an unweighted number cannot be passed
/// off as an area mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightedScalar {
    mean: f64,
    std: f64,
}

impl WeightedScalar {
    pub(crate) fn new(mean: f64, std: f64) -> Self {
        Self { mean, std }
    }

    /// Weighted area mean, averaged over the contributing time steps.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population standard deviation of the per-step area means.
    pub fn std(&self) -> f64 {
        self.std
    }
}

/// Longitude-averaged profiles, `values[t][lat]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZonalMean {
    lats: Vec<f64>,
    n_time: usize,
    values: Vec<f64>,
}

impl ZonalMean {
    pub fn lats(&self) -> &[f64] {
        &self.lats
    }

    pub fn n_time(&self) -> usize {
        self.n_time
    }

    /// Flat `[t][lat]` values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Shape as `[n_time, n_lat]`.
    pub fn shape(&self) -> [usize; 2] {
        [self.n_time, self.lats.len()]
    }

    /// The latitude profile of time step `t`.
    pub fn profile(&self, t: usize) -> &[f64] {
        let n = self.lats.len();
        &self.values[t * n..(t + 1) * n]
    }
}

/// Weighted regional means, one per selected time step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaMean {
    series: Vec<f64>,
    summary: WeightedScalar,
}

impl AreaMean {
    /// Per-step weighted means, in selection order.
    pub fn series(&self) -> &[f64] {
        &self.series
    }

    /// Mean and population std of the finite entries of [`Self::series`].
    pub fn summary(&self) -> WeightedScalar {
        self.summary
    }
}

/// Output of [`average`], one variant per [`Reduction`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Averaged {
    Field(Grid),
    Zonal(ZonalMean),
    Area(AreaMean),
}

impl Averaged {
    /// Name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Averaged::Field(_) => "field",
            Averaged::Zonal(_) => "zonal",
            Averaged::Area(_) => "area",
        }
    }
}

/// Slices `grid` to `indices`, restricts it to `bbox` and reduces it.
///
/// Longitudes are folded into `[-180, 180)` before selection. Missing
/// (non-finite) cells are skipped by every mean. The input grid is not
/// modified, so repeated calls with the same arguments agree.
///
/// # Errors
///
/// - [`GridError::EmptySelection`] when `indices` is empty or the box leaves
///   no latitude row or longitude column.
/// - [`GridError::TimeIndexOutOfRange`] when an index exceeds the record.
/// - [`GridError::DegenerateWeight`] when a [`Reduction::LatLon`] selection
///   has latitude weights summing to zero.
pub fn average(
    grid: &Grid,
    indices: &[usize],
    bbox: Option<&BoundingBox>,
    reduction: Reduction,
) -> Result<Averaged, GridError> {
    let sliced = grid.select_time(indices)?;
    let folded = normalize_longitudes(&sliced);
    let region = match bbox {
        Some(b) => subset(&folded, b)?,
        None => folded,
    };
    if region.n_lat() == 0 {
        return Err(GridError::EmptySelection { axis: "latitude" });
    }
    if region.n_lon() == 0 {
        return Err(GridError::EmptySelection { axis: "longitude" });
    }

    match reduction {
        Reduction::None => Ok(Averaged::Field(region)),
        Reduction::LonOnly { time_mean } => Ok(Averaged::Zonal(zonal_mean(&region, time_mean))),
        Reduction::LatLon => area_mean(&region).map(Averaged::Area),
    }
}

fn zonal_mean(grid: &Grid, time_mean: bool) -> ZonalMean {
    let source = if time_mean { grid.time_mean() } else { grid.clone() };
    let n_lon = source.n_lon();
    let values = source
        .values()
        .chunks(n_lon)
        .map(climplot_stats::finite_mean)
        .collect();
    ZonalMean {
        lats: source.lats().to_vec(),
        n_time: source.n_time(),
        values,
    }
}

fn area_mean(grid: &Grid) -> Result<AreaMean, GridError> {
    let weights = cos_weights(grid.lats());
    let total: f64 = weights.iter().sum();
    if total == 0.0 {
        return Err(GridError::DegenerateWeight {
            n_lat: grid.n_lat(),
        });
    }

    let n_lon = grid.n_lon();
    let series: Vec<f64> = (0..grid.n_time())
        .map(|t| {
            let slice = grid.time_slice(t);
            // deviations from a cell of the step keep a constant field exact
            let Some(reference) = slice.iter().copied().find(|v| v.is_finite()) else {
                return f64::NAN;
            };
            let mut sum = 0.0;
            let mut wsum = 0.0;
            for (row, &w) in slice.chunks(n_lon).zip(&weights) {
                for &v in row {
                    if v.is_finite() {
                        sum += (v - reference) * w;
                        wsum += w;
                    }
                }
            }
            if wsum == 0.0 {
                f64::NAN
            } else {
                reference + sum / wsum
            }
        })
        .collect();

    let finite = climplot_stats::finite_values(&series);
    let summary = if finite.is_empty() {
        WeightedScalar::new(f64::NAN, f64::NAN)
    } else {
        WeightedScalar::new(climplot_stats::mean(&finite), climplot_stats::sd(&finite))
    };
    Ok(AreaMean { series, summary })
}
