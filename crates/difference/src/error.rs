//! Error types for climplot-difference.

/// Error type for all fallible operations in the climplot-difference crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DifferenceError {
    /// Returned when the two operands do not have identical shapes.
    #[error("shape mismatch: left operand has shape {left:?}, right has {right:?}")]
    ShapeMismatch {
        /// Shape of the minuend.
        left: Vec<usize>,
        /// Shape of the subtrahend.
        right: Vec<usize>,
    },

    /// Returned when an operand's values or std do not match its shape.
    #[error("invalid operand: {reason}")]
    InvalidOperand {
        /// Description of the inconsistency.
        reason: String,
    },
}
