//! # climplot-calendar
//!
//! Index arithmetic for monthly climate-model series split into fixed-length
//! multi-year periods.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["i64 index"] -->|"TimePeriod::new()"| B["TimePeriod"]
//!     C["months 1..=12"] -->|"MonthSet::new()"| D["MonthSet"]
//!     B --> E["select_indices()"]
//!     D --> E
//!     E --> F["flat time-step indices"]
//!     G["PeriodScheme"] -->|".label()"| H["\"4000-4010\""]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use climplot_calendar::{MonthSet, PeriodScheme, TimePeriod};
//!
//! let scheme = PeriodScheme::default(); // base year 4000, 10-year periods
//! let period = TimePeriod::new(1).unwrap();
//! let months = MonthSet::new([6, 7, 8]).unwrap();
//!
//! let indices = scheme.indices(period, &months).unwrap();
//! assert_eq!(indices.len(), 3 * 11);
//! assert_eq!(scheme.label(period).unwrap(), "4010-4020");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Month sets and month name tables |
//! | `period` | Period index newtype and period scheme |
//! | `select` | Flat time-step index selection |
//! | `error` | Error types |

mod error;
mod month;
mod period;
mod select;

pub use error::CalendarError;
pub use month::{MonthSet, month_abbrev, month_name};
pub use period::{PeriodScheme, TimePeriod};
pub use select::select_indices;
