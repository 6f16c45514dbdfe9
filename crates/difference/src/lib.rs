//! # climplot-difference
//!
//! Differences between two period averages of the same shape, in absolute
//! units or as a percentage of the second period, with summary statistics
//! over the finite result cells.
//!
//! ```
//! use climplot_difference::{DifferenceMode, Operand, difference};
//!
//! let later = Operand::new(vec![3], vec![290.0, 291.0, 289.0]).unwrap();
//! let earlier = Operand::new(vec![3], vec![288.0, 288.0, 288.0]).unwrap();
//! let diff = difference(&later, &earlier, DifferenceMode::Absolute).unwrap();
//! assert_eq!(diff.value, vec![2.0, 3.0, 1.0]);
//! assert_eq!(diff.summary.max, 3.0);
//! ```

mod engine;
mod error;
mod operand;

pub use engine::{DifferenceMode, DifferenceResult, difference};
pub use error::DifferenceError;
pub use operand::Operand;
