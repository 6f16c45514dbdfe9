//! Element-wise period differences and their summary statistics.

use climplot_stats::SummaryStats;
use serde::{Deserialize, Serialize};

use crate::error::DifferenceError;
use crate::operand::Operand;

/// How two operands are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifferenceMode {
    /// `a - b`.
    #[default]
    Absolute,
    /// `(a - b) / b * 100`.
    Percent,
}

/// Result of [`difference`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DifferenceResult {
    pub shape: Vec<usize>,
    /// Difference per cell; masked and missing cells are NaN.
    pub value: Vec<f64>,
    /// Combined std `sqrt(sa² + sb²)`, only in absolute mode when both
    /// operands carry std.
    pub std: Option<Vec<f64>>,
    /// Statistics over the finite cells of `value`.
    pub summary: SummaryStats,
    /// Cells whose percent-mode denominator was exactly zero.
    pub masked: usize,
    pub mode: DifferenceMode,
}

/// Computes `a` minus `b` cell by cell.
///
/// In [`DifferenceMode::Percent`] a zero denominator makes that cell NaN and
/// counts it in [`DifferenceResult::masked`] instead of failing. Neither
/// operand is modified.
///
/// # Errors
///
/// Returns [`DifferenceError::ShapeMismatch`] if the operand shapes differ.
///
/// # Examples
///
/// ```
/// use climplot_difference::{DifferenceMode, Operand, difference};
///
/// let a = Operand::new(vec![2], vec![3.0, 1.0]).unwrap();
/// let b = Operand::new(vec![2], vec![2.0, 0.0]).unwrap();
/// let r = difference(&a, &b, DifferenceMode::Percent).unwrap();
/// assert_eq!(r.value[0], 50.0);
/// assert!(r.value[1].is_nan());
/// assert_eq!(r.masked, 1);
/// ```
pub fn difference(
    a: &Operand,
    b: &Operand,
    mode: DifferenceMode,
) -> Result<DifferenceResult, DifferenceError> {
    if a.shape() != b.shape() {
        return Err(DifferenceError::ShapeMismatch {
            left: a.shape().to_vec(),
            right: b.shape().to_vec(),
        });
    }

    let mut masked = 0usize;
    let value: Vec<f64> = match mode {
        DifferenceMode::Absolute => a
            .values()
            .iter()
            .zip(b.values())
            .map(|(x, y)| x - y)
            .collect(),
        DifferenceMode::Percent => a
            .values()
            .iter()
            .zip(b.values())
            .map(|(&x, &y)| {
                if y == 0.0 {
                    masked += 1;
                    f64::NAN
                } else {
                    (x - y) / y * 100.0
                }
            })
            .collect(),
    };

    let std = match (mode, a.std(), b.std()) {
        (DifferenceMode::Absolute, Some(sa), Some(sb)) => Some(
            sa.iter()
                .zip(sb)
                .map(|(x, y)| (x * x + y * y).sqrt())
                .collect(),
        ),
        _ => None,
    };

    Ok(DifferenceResult {
        shape: a.shape().to_vec(),
        summary: SummaryStats::from_values(&value),
        value,
        std,
        masked,
        mode,
    })
}
