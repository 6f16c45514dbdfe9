//! # climplot-grid
//!
//! Regular latitude/longitude grids over time, bounding-box selection and
//! cosine-latitude weighted averaging.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["Dataset"] -->|"extract(FieldSpec)"| B["Grid"]
//!     B -->|"select_time"| C["time slice"]
//!     C -->|"normalize_longitudes"| D["[-180, 180)"]
//!     D -->|"subset(BoundingBox)"| E["region"]
//!     E -->|"Reduction"| F["Averaged"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use climplot_grid::{Averaged, BoundingBox, Grid, Reduction, average};
//!
//! let grid = Grid::new(vec![-30.0, 30.0], vec![0.0, 180.0], 1, vec![5.0; 4]).unwrap();
//! let bbox = BoundingBox::new(-45.0, 45.0, -180.0, 180.0).unwrap();
//!
//! let Averaged::Area(area) = average(&grid, &[0], Some(&bbox), Reduction::LatLon).unwrap() else {
//!     unreachable!()
//! };
//! assert!((area.summary().mean() - 5.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `grid` | `(time, lat, lon)` container and time slicing |
//! | `dataset` | Named fields and variable assembly |
//! | `longitude` | Folding into `[-180, 180)` |
//! | `bbox` | Bounding boxes and subsetting |
//! | `weights` | Cosine-latitude weights |
//! | `average` | Reductions and their results |
//! | `error` | Error types |

mod average;
mod bbox;
mod dataset;
mod error;
mod grid;
mod longitude;
mod weights;

pub use average::{AreaMean, Averaged, Reduction, WeightedScalar, ZonalMean, average};
pub use bbox::{BoundingBox, subset};
pub use dataset::{Dataset, FieldCatalog, FieldSpec, PRECIP_M_PER_S_TO_MM_PER_DAY, Variable};
pub use error::GridError;
pub use grid::Grid;
pub use longitude::{normalize_longitudes, wrap_longitude};
pub use weights::{cos_weight, cos_weights};
