//! Gridded (time, latitude, longitude) field container.

use serde::Serialize;

use crate::error::GridError;

/// One numeric field on a regular latitude/longitude grid over time.
///
/// Values are stored row-major as `values[(t * n_lat + y) * n_lon + x]`.
/// Non-finite values mark missing cells and are skipped by every reduction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    lats: Vec<f64>,
    lons: Vec<f64>,
    n_time: usize,
    values: Vec<f64>,
}

impl Grid {
    /// Creates a grid after validating its shape and latitude ordering.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DimensionMismatch`] if `values.len()` is not
    /// `n_time * lats.len() * lons.len()`.
    ///
    /// Returns [`GridError::NonMonotonicLatitude`] if latitudes are neither
    /// strictly increasing nor strictly decreasing.
    pub fn new(
        lats: Vec<f64>,
        lons: Vec<f64>,
        n_time: usize,
        values: Vec<f64>,
    ) -> Result<Self, GridError> {
        let expected = n_time * lats.len() * lons.len();
        if values.len() != expected {
            return Err(GridError::DimensionMismatch {
                name: "values".into(),
                expected,
                got: values.len(),
            });
        }
        check_monotonic(&lats)?;
        Ok(Self {
            lats,
            lons,
            n_time,
            values,
        })
    }

    /// Internal constructor for grids whose shape is correct by construction.
    pub(crate) fn from_parts(
        lats: Vec<f64>,
        lons: Vec<f64>,
        n_time: usize,
        values: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(values.len(), n_time * lats.len() * lons.len());
        Self {
            lats,
            lons,
            n_time,
            values,
        }
    }

    /// Latitude coordinates (degrees).
    pub fn lats(&self) -> &[f64] {
        &self.lats
    }

    /// Longitude coordinates (degrees).
    pub fn lons(&self) -> &[f64] {
        &self.lons
    }

    /// Number of time steps.
    pub fn n_time(&self) -> usize {
        self.n_time
    }

    /// Number of latitude rows.
    pub fn n_lat(&self) -> usize {
        self.lats.len()
    }

    /// Number of longitude columns.
    pub fn n_lon(&self) -> usize {
        self.lons.len()
    }

    /// Shape as `[n_time, n_lat, n_lon]`.
    pub fn shape(&self) -> [usize; 3] {
        [self.n_time, self.n_lat(), self.n_lon()]
    }

    /// Flat row-major values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value at `(t, y, x)`.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    pub fn get(&self, t: usize, y: usize, x: usize) -> f64 {
        assert!(t < self.n_time && y < self.n_lat() && x < self.n_lon());
        self.values[(t * self.n_lat() + y) * self.n_lon() + x]
    }

    /// The `n_lat * n_lon` slab of time step `t`.
    pub fn time_slice(&self, t: usize) -> &[f64] {
        let n = self.n_lat() * self.n_lon();
        &self.values[t * n..(t + 1) * n]
    }

    /// Selects time steps in the given order.
    ///
    /// Indices may repeat; each repeat contributes its slab again, so later
    /// means weight that step once per occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptySelection`] if `indices` is empty and
    /// [`GridError::TimeIndexOutOfRange`] for any index `>= n_time`.
    pub fn select_time(&self, indices: &[usize]) -> Result<Grid, GridError> {
        if indices.is_empty() {
            return Err(GridError::EmptySelection { axis: "time" });
        }
        if let Some(&index) = indices.iter().find(|&&i| i >= self.n_time) {
            return Err(GridError::TimeIndexOutOfRange {
                index,
                n_time: self.n_time,
            });
        }

        let slab = self.n_lat() * self.n_lon();
        let mut values = Vec::with_capacity(indices.len() * slab);
        for &t in indices {
            values.extend_from_slice(self.time_slice(t));
        }
        Ok(Grid::from_parts(
            self.lats.clone(),
            self.lons.clone(),
            indices.len(),
            values,
        ))
    }

    /// Plain per-cell mean over time, skipping missing cells.
    ///
    /// The result has a single time step. A cell missing at every step stays
    /// missing (NaN). A grid with zero time steps yields an all-NaN slab.
    pub fn time_mean(&self) -> Grid {
        let slab = self.n_lat() * self.n_lon();
        let mut sums = vec![0.0; slab];
        let mut counts = vec![0usize; slab];
        for t in 0..self.n_time {
            for (i, &v) in self.time_slice(t).iter().enumerate() {
                if v.is_finite() {
                    sums[i] += v;
                    counts[i] += 1;
                }
            }
        }
        let values = sums
            .iter()
            .zip(&counts)
            .map(|(&s, &n)| if n == 0 { f64::NAN } else { s / n as f64 })
            .collect();
        Grid::from_parts(self.lats.clone(), self.lons.clone(), 1, values)
    }

    /// Rows of the single time step of a time-meaned grid, one `Vec` per latitude.
    ///
    /// Uses time step 0 when the grid holds more than one.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        if self.n_time == 0 {
            return Vec::new();
        }
        self.time_slice(0)
            .chunks(self.n_lon().max(1))
            .map(<[f64]>::to_vec)
            .collect()
    }
}

fn check_monotonic(lats: &[f64]) -> Result<(), GridError> {
    if lats.len() < 2 {
        return Ok(());
    }
    let increasing = lats[1] > lats[0];
    for (i, w) in lats.windows(2).enumerate() {
        let ok = if increasing { w[1] > w[0] } else { w[1] < w[0] };
        if !ok {
            return Err(GridError::NonMonotonicLatitude { index: i + 1 });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        // 3 time steps, 2 lats, 2 lons; value = 100*t + 10*y + x
        let mut values = Vec::new();
        for t in 0..3 {
            for y in 0..2 {
                for x in 0..2 {
                    values.push((100 * t + 10 * y + x) as f64);
                }
            }
        }
        Grid::new(vec![-45.0, 45.0], vec![0.0, 90.0], 3, values).unwrap()
    }

    #[test]
    fn shape_and_get() {
        let g = sample();
        assert_eq!(g.shape(), [3, 2, 2]);
        assert_eq!(g.get(2, 1, 0), 210.0);
    }

    #[test]
    fn rejects_wrong_length() {
        let err = Grid::new(vec![0.0], vec![0.0, 1.0], 2, vec![1.0; 3]).unwrap_err();
        assert_eq!(
            err,
            GridError::DimensionMismatch {
                name: "values".into(),
                expected: 4,
                got: 3
            }
        );
    }

    #[test]
    fn rejects_non_monotonic_latitudes() {
        let err = Grid::new(vec![0.0, 10.0, 5.0], vec![0.0], 1, vec![0.0; 3]).unwrap_err();
        assert_eq!(err, GridError::NonMonotonicLatitude { index: 2 });
    }

    #[test]
    fn accepts_decreasing_latitudes() {
        assert!(Grid::new(vec![90.0, 0.0, -90.0], vec![0.0], 1, vec![0.0; 3]).is_ok());
    }

    #[test]
    fn select_time_preserves_order_and_repeats() {
        let g = sample().select_time(&[2, 0, 2]).unwrap();
        assert_eq!(g.n_time(), 3);
        assert_eq!(g.get(0, 0, 0), 200.0);
        assert_eq!(g.get(1, 0, 0), 0.0);
        assert_eq!(g.get(2, 1, 1), 211.0);
    }

    #[test]
    fn select_time_out_of_range() {
        let err = sample().select_time(&[0, 3]).unwrap_err();
        assert_eq!(err, GridError::TimeIndexOutOfRange { index: 3, n_time: 3 });
    }

    #[test]
    fn select_time_empty() {
        let err = sample().select_time(&[]).unwrap_err();
        assert_eq!(err, GridError::EmptySelection { axis: "time" });
    }

    #[test]
    fn time_mean_skips_missing() {
        let values = vec![1.0, f64::NAN, 3.0, f64::NAN];
        let g = Grid::new(vec![0.0], vec![0.0, 1.0], 2, values).unwrap();
        let m = g.time_mean();
        assert_eq!(m.n_time(), 1);
        assert_eq!(m.values()[0], 2.0);
        assert!(m.values()[1].is_nan());
    }

    #[test]
    fn rows_of_single_step() {
        let m = sample().time_mean();
        let rows = m.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec![110.0, 111.0]);
    }
}
