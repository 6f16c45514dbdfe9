//! Error types for climplot-grid.

/// Error type for all fallible operations in the climplot-grid crate.
///
/// Covers malformed grids, bad bounding boxes, selections that leave nothing
/// to average, and weightings that cannot be normalised.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Returned when a selection leaves zero cells along an axis.
    #[error("empty selection: no {axis} values remain")]
    EmptySelection {
        /// Axis that ended up empty (`"time"`, `"latitude"` or `"longitude"`).
        axis: &'static str,
    },

    /// Returned when the cosine-latitude weights of a selection sum to zero.
    #[error("degenerate weights: latitude weights sum to zero over {n_lat} row(s)")]
    DegenerateWeight {
        /// Number of latitude rows in the selection.
        n_lat: usize,
    },

    /// Returned when a requested time step does not exist in the grid.
    #[error("time index {index} out of range for {n_time} time step(s)")]
    TimeIndexOutOfRange {
        /// The offending flat time index.
        index: usize,
        /// Number of time steps the grid holds.
        n_time: usize,
    },

    /// Returned when a bounding box violates its invariants.
    #[error("invalid bounding box: {reason}")]
    InvalidBoundingBox {
        /// Description of the violated constraint.
        reason: String,
    },

    /// Returned when a data array does not match the declared grid shape.
    #[error("dimension '{name}' mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Name of the dimension or array.
        name: String,
        /// Expected size.
        expected: usize,
        /// Actual size.
        got: usize,
    },

    /// Returned when latitude coordinates are not strictly monotonic.
    #[error("latitude coordinates must be strictly monotonic (violated at index {index})")]
    NonMonotonicLatitude {
        /// Index of the first coordinate breaking monotonicity.
        index: usize,
    },

    /// Returned when a dataset does not contain a requested field.
    #[error("field '{name}' not found in dataset")]
    MissingField {
        /// Name of the missing field.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty_selection() {
        let err = GridError::EmptySelection { axis: "latitude" };
        assert_eq!(err.to_string(), "empty selection: no latitude values remain");
    }

    #[test]
    fn display_degenerate_weight() {
        let err = GridError::DegenerateWeight { n_lat: 1 };
        assert_eq!(
            err.to_string(),
            "degenerate weights: latitude weights sum to zero over 1 row(s)"
        );
    }

    #[test]
    fn display_time_index_out_of_range() {
        let err = GridError::TimeIndexOutOfRange {
            index: 612,
            n_time: 612,
        };
        assert_eq!(
            err.to_string(),
            "time index 612 out of range for 612 time step(s)"
        );
    }

    #[test]
    fn display_invalid_bounding_box() {
        let err = GridError::InvalidBoundingBox {
            reason: "min_lat > max_lat".to_string(),
        };
        assert_eq!(err.to_string(), "invalid bounding box: min_lat > max_lat");
    }

    #[test]
    fn display_dimension_mismatch() {
        let err = GridError::DimensionMismatch {
            name: "values".to_string(),
            expected: 24,
            got: 23,
        };
        assert_eq!(
            err.to_string(),
            "dimension 'values' mismatch: expected 24, got 23"
        );
    }

    #[test]
    fn display_missing_field() {
        let err = GridError::MissingField {
            name: "PRECL".to_string(),
        };
        assert_eq!(err.to_string(), "field 'PRECL' not found in dataset");
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<GridError>();
    }
}
