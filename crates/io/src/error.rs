//! Error types for climplot-io.

use std::path::PathBuf;

use climplot_grid::GridError;

/// Error type for all fallible operations in the climplot-io crate.
///
/// Covers datasets that cannot be opened at all, failures inside the NetCDF
/// library, and files whose variables do not describe one consistent grid.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the backing dataset cannot be opened.
    #[error("data unavailable: {} ({reason})", path.display())]
    DataUnavailable {
        /// Path that was requested.
        path: PathBuf,
        /// Why the dataset could not be provided.
        reason: String,
    },

    /// Wraps an error originating from the NetCDF library.
    #[error("netcdf error: {reason}")]
    Netcdf {
        /// Description of the underlying NetCDF failure.
        reason: String,
    },

    /// Returned when a required variable is not present in a file.
    #[error("variable '{name}' not found in {}", path.display())]
    MissingVariable {
        /// Name of the missing variable.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a dimension has an unexpected size.
    #[error("dimension '{name}' mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Name of the dimension.
        name: String,
        /// Expected size.
        expected: usize,
        /// Actual size.
        got: usize,
    },

    /// Returned when the loaded arrays do not form a valid dataset.
    #[error(transparent)]
    Grid(#[from] GridError),
}

#[cfg(feature = "netcdf")]
impl From<netcdf::Error> for IoError {
    fn from(e: netcdf::Error) -> Self {
        IoError::Netcdf {
            reason: e.to_string(),
        }
    }
}
