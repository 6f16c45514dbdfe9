//! # climplot-io
//!
//! Load climate-model output into [`climplot_grid::Dataset`]s. NetCDF
//! support is behind the `netcdf` cargo feature (it links the system
//! libnetcdf); without it every read reports the data as unavailable.

mod error;
#[cfg(feature = "netcdf")]
mod netcdf_read;
mod reader;
mod summary;

pub use error::IoError;
pub use reader::{ReaderConfig, list_variables, read_dataset};
pub use summary::{DatasetSummary, FieldSummary};
