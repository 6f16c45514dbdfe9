//! Difference operands: values with a shape and optional per-cell std.

use climplot_grid::{AreaMean, Grid, WeightedScalar, ZonalMean};
use serde::Serialize;

use crate::error::DifferenceError;

/// One side of a difference.
///
/// `values` is flat, row-major over `shape`. `std`, when present, has one
/// entry per value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operand {
    shape: Vec<usize>,
    values: Vec<f64>,
    std: Option<Vec<f64>>,
}

impl Operand {
    /// Creates an operand from raw values.
    ///
    /// # Errors
    ///
    /// Returns [`DifferenceError::InvalidOperand`] if `values.len()` differs
    /// from the product of `shape`.
    pub fn new(shape: Vec<usize>, values: Vec<f64>) -> Result<Self, DifferenceError> {
        let expected: usize = shape.iter().product();
        if values.len() != expected {
            return Err(DifferenceError::InvalidOperand {
                reason: format!("{} values for shape {shape:?}", values.len()),
            });
        }
        Ok(Self {
            shape,
            values,
            std: None,
        })
    }

    /// Attaches a per-cell standard deviation.
    ///
    /// # Errors
    ///
    /// Returns [`DifferenceError::InvalidOperand`] if `std` and the values
    /// differ in length.
    pub fn with_std(mut self, std: Vec<f64>) -> Result<Self, DifferenceError> {
        if std.len() != self.values.len() {
            return Err(DifferenceError::InvalidOperand {
                reason: format!("{} std entries for {} values", std.len(), self.values.len()),
            });
        }
        self.std = Some(std);
        Ok(self)
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn std(&self) -> Option<&[f64]> {
        self.std.as_deref()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<WeightedScalar> for Operand {
    fn from(s: WeightedScalar) -> Self {
        Self {
            shape: vec![1],
            values: vec![s.mean()],
            std: Some(vec![s.std()]),
        }
    }
}

/// One entry per scalar, e.g. the twelve months of an annual cycle.
impl From<&[WeightedScalar]> for Operand {
    fn from(scalars: &[WeightedScalar]) -> Self {
        Self {
            shape: vec![scalars.len()],
            values: scalars.iter().map(WeightedScalar::mean).collect(),
            std: Some(scalars.iter().map(WeightedScalar::std).collect()),
        }
    }
}

impl From<&Grid> for Operand {
    fn from(grid: &Grid) -> Self {
        Self {
            shape: grid.shape().to_vec(),
            values: grid.values().to_vec(),
            std: None,
        }
    }
}

impl From<&ZonalMean> for Operand {
    fn from(z: &ZonalMean) -> Self {
        Self {
            shape: z.shape().to_vec(),
            values: z.values().to_vec(),
            std: None,
        }
    }
}

/// The per-step series; the series summary std is not carried per cell.
impl From<&AreaMean> for Operand {
    fn from(a: &AreaMean) -> Self {
        Self {
            shape: vec![a.series().len()],
            values: a.series().to_vec(),
            std: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_checks_length() {
        assert!(Operand::new(vec![2, 3], vec![0.0; 6]).is_ok());
        assert!(matches!(
            Operand::new(vec![2, 3], vec![0.0; 5]),
            Err(DifferenceError::InvalidOperand { .. })
        ));
    }

    #[test]
    fn with_std_checks_length() {
        let op = Operand::new(vec![2], vec![1.0, 2.0]).unwrap();
        assert!(op.clone().with_std(vec![0.1]).is_err());
        let op = op.with_std(vec![0.1, 0.2]).unwrap();
        assert_eq!(op.std(), Some(&[0.1, 0.2][..]));
    }

    #[test]
    fn from_grid_keeps_shape() {
        let g = Grid::new(vec![0.0, 10.0], vec![0.0], 3, vec![0.0; 6]).unwrap();
        let op = Operand::from(&g);
        assert_eq!(op.shape(), &[3, 2, 1]);
        assert!(op.std().is_none());
    }
}
