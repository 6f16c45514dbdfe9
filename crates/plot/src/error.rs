//! Error types for climplot-plot.

use climplot_calendar::CalendarError;
use climplot_difference::DifferenceError;
use climplot_grid::GridError;

/// Error type for all fallible operations in the climplot-plot crate.
///
/// Failures from the selection, averaging and difference layers pass through
/// unchanged so the caller sees the original cause.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlotError {
    /// Returned when a request is inconsistent with its plot kind.
    #[error("invalid plot request: {reason}")]
    InvalidRequest {
        /// Description of the violated constraint.
        reason: String,
    },

    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Difference(#[from] DifferenceError),
}
