//! Error types for the climplot-calendar crate.

/// Error type for all fallible operations in the climplot-calendar crate.
///
/// Covers the bad input a period selection can receive: a negative or
/// unrepresentably large period index and calendar months outside
/// January..December.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a period index is negative.
    #[error("invalid period: {index} (must be >= 0)")]
    InvalidPeriod {
        /// The invalid period index that was provided.
        index: i64,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: i64,
    },

    /// Returned when a month set is constructed from no months at all.
    #[error("invalid month set: at least one month is required")]
    EmptyMonthSet,

    /// Returned when a period's time steps or years overflow the index type.
    #[error("period overflow: period {period} of {length_years} year(s) is out of range")]
    PeriodOverflow {
        /// The period index that was requested.
        period: usize,
        /// Period length in years.
        length_years: usize,
    },
}
