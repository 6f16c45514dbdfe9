//! Statistical helper functions for climplot.
//!
//! Variances use the population (N) denominator, which is what the spread
//! overlays and difference summaries report.

use serde::Serialize;

/// Arithmetic mean of a slice. Returns 0.0 if empty.
///
/// Summed as deviations from the first element, so a constant slice returns
/// that constant exactly.
pub fn mean(data: &[f64]) -> f64 {
    let Some(&reference) = data.first() else {
        return 0.0;
    };
    let sum: f64 = data.iter().map(|&x| x - reference).sum();
    reference + sum / data.len() as f64
}

/// Population variance (N denominator). Returns 0.0 if empty.
pub fn variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / data.len() as f64
}

/// Population standard deviation (N denominator). Returns 0.0 if empty.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Root-mean-square, `sqrt(mean(x^2))`. Returns 0.0 if empty.
pub fn rms(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    (data.iter().map(|&x| x * x).sum::<f64>() / data.len() as f64).sqrt()
}

/// Copies the finite values of `data`, dropping NaN and infinities.
pub fn finite_values(data: &[f64]) -> Vec<f64> {
    data.iter().copied().filter(|x| x.is_finite()).collect()
}

/// Mean over the finite values only. Returns NaN when none are finite.
pub fn finite_mean(data: &[f64]) -> f64 {
    let Some(reference) = data.iter().copied().find(|x| x.is_finite()) else {
        return f64::NAN;
    };
    let mut sum = 0.0;
    let mut n = 0usize;
    for &x in data {
        if x.is_finite() {
            sum += x - reference;
            n += 1;
        }
    }
    reference + sum / n as f64
}

/// Descriptive statistics over the finite values of a field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub rms: f64,
    /// Number of finite values the statistics were computed from.
    pub count: usize,
}

impl SummaryStats {
    /// Summarises `data`, ignoring non-finite values.
    ///
    /// When no value is finite every statistic is NaN and `count` is 0.
    pub fn from_values(data: &[f64]) -> Self {
        let finite = finite_values(data);
        if finite.is_empty() {
            return Self {
                mean: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                max: f64::NAN,
                rms: f64::NAN,
                count: 0,
            };
        }

        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self {
            mean: mean(&finite),
            std: sd(&finite),
            min,
            max,
            rms: rms(&finite),
            count: finite.len(),
        }
    }

    /// Largest absolute value among `min` and `max`.
    pub fn max_abs(&self) -> f64 {
        self.min.abs().max(self.max.abs())
    }
}

/// Trailing moving average with a flat window (numpy `convolve(..., "valid")`).
///
/// Returns `data.len() - window + 1` values, or an empty vector when `window`
/// is 0 or longer than the data.
pub fn running_mean(data: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || window > data.len() {
        return Vec::new();
    }
    data.windows(window).map(mean).collect()
}

/// Ordinary least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Evaluates the fitted line at `x`.
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fits a straight line through the finite `(x, y)` pairs.
///
/// Returns `None` if fewer than 2 finite pairs remain or all `x` are equal.
pub fn linear_fit(x: &[f64], y: &[f64]) -> Option<LinearFit> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter(|(xi, yi)| xi.is_finite() && yi.is_finite())
        .map(|(xi, yi)| (*xi, *yi))
        .collect();

    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mx: f64 = pairs.iter().map(|(xi, _)| xi).sum::<f64>() / n;
    let my: f64 = pairs.iter().map(|(_, yi)| yi).sum::<f64>() / n;

    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for &(xi, yi) in &pairs {
        let dx = xi - mx;
        sum_xy += dx * (yi - my);
        sum_xx += dx * dx;
    }

    if sum_xx == 0.0 {
        return None;
    }

    let slope = sum_xy / sum_xx;
    Some(LinearFit {
        slope,
        intercept: my - slope * mx,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&data), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_constant_slice_is_exact() {
        for c in [0.1, 4.999999999999994, 288.15, -3.7] {
            let data = vec![c; 37];
            assert_eq!(mean(&data), c);
            assert_eq!(sd(&data), 0.0);
            assert_eq!(finite_mean(&[f64::NAN, c, c, c]), c);
        }
    }

    #[test]
    fn test_sd_population() {
        // Classic example: population sd = 2.0
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(sd(&data), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sd_single() {
        assert_eq!(sd(&[5.0]), 0.0);
    }

    #[test]
    fn test_variance_two() {
        // [3.0, 7.0]: mean=5, sum_sq=8, var=8/2=4
        assert_relative_eq!(variance(&[3.0, 7.0]), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_variance_empty() {
        assert_eq!(variance(&[]), 0.0);
    }

    #[test]
    fn test_rms() {
        // sqrt((9 + 16) / 2)
        assert_relative_eq!(rms(&[3.0, -4.0]), (12.5f64).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_rms_empty() {
        assert_eq!(rms(&[]), 0.0);
    }

    #[test]
    fn test_finite_mean_skips_nan() {
        assert_relative_eq!(finite_mean(&[1.0, f64::NAN, 3.0]), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_finite_mean_all_nan() {
        assert!(finite_mean(&[f64::NAN, f64::INFINITY]).is_nan());
    }

    #[test]
    fn test_summary_ignores_non_finite() {
        let s = SummaryStats::from_values(&[1.0, f64::NAN, -3.0, f64::INFINITY, 2.0]);
        assert_eq!(s.count, 3);
        assert_eq!(s.min, -3.0);
        assert_eq!(s.max, 2.0);
        assert_relative_eq!(s.mean, 0.0, epsilon = 1e-12);
        assert_relative_eq!(s.rms, (14.0f64 / 3.0).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(s.max_abs(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_summary_empty_is_nan() {
        let s = SummaryStats::from_values(&[f64::NAN]);
        assert_eq!(s.count, 0);
        assert!(s.mean.is_nan());
        assert!(s.min.is_nan());
        assert!(s.rms.is_nan());
    }

    #[test]
    fn test_running_mean_valid_mode() {
        let out = running_mean(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
        assert_eq!(out.len(), 3);
        assert_relative_eq!(out[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(out[2], 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_running_mean_window_too_long() {
        assert!(running_mean(&[1.0, 2.0], 3).is_empty());
        assert!(running_mean(&[1.0, 2.0], 0).is_empty());
    }

    #[test]
    fn test_linear_fit_exact_line() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, 3.0, 5.0, 7.0];
        let fit = linear_fit(&x, &y).unwrap();
        assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, 1.0, epsilon = 1e-12);
        assert_relative_eq!(fit.at(10.0), 21.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_fit_skips_nan() {
        let x = [0.0, 1.0, f64::NAN, 3.0];
        let y = [0.0, 1.0, 100.0, 3.0];
        let fit = linear_fit(&x, &y).unwrap();
        assert_relative_eq!(fit.slope, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_fit_degenerate() {
        assert!(linear_fit(&[1.0], &[2.0]).is_none());
        assert!(linear_fit(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).is_none());
    }
}
