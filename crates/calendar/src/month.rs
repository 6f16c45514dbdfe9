//! Calendar month sets and month name tables.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::CalendarError;

/// Three-letter month abbreviations (index 0 = January).
const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Full month names (index 0 = January).
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the three-letter abbreviation for a 1-indexed month.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn month_abbrev(month: u8) -> Result<&'static str, CalendarError> {
    check_month(i64::from(month))?;
    Ok(MONTH_ABBREVS[usize::from(month - 1)])
}

/// Returns the full English name for a 1-indexed month.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn month_name(month: u8) -> Result<&'static str, CalendarError> {
    check_month(i64::from(month))?;
    Ok(MONTH_NAMES[usize::from(month - 1)])
}

fn check_month(month: i64) -> Result<u8, CalendarError> {
    if (1..=12).contains(&month) {
        Ok(month as u8)
    } else {
        Err(CalendarError::InvalidMonth { month })
    }
}

/// A non-empty set of calendar months (1 = January, ..., 12 = December).
///
/// Duplicates collapse and iteration is always ascending, regardless of the
/// order the months were supplied in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MonthSet(BTreeSet<u8>);

impl MonthSet {
    /// Builds a month set from 1-indexed month numbers.
    ///
    /// Accepts any signed integer source so values parsed from user input can
    /// be validated here rather than truncated earlier.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] for the first month outside
    /// 1..=12, or [`CalendarError::EmptyMonthSet`] if no months were given.
    pub fn new<I, M>(months: I) -> Result<Self, CalendarError>
    where
        I: IntoIterator<Item = M>,
        M: Into<i64>,
    {
        let set = months
            .into_iter()
            .map(|m| check_month(m.into()))
            .collect::<Result<BTreeSet<u8>, _>>()?;
        if set.is_empty() {
            return Err(CalendarError::EmptyMonthSet);
        }
        Ok(Self(set))
    }

    /// All twelve months.
    pub fn all() -> Self {
        Self((1..=12).collect())
    }

    /// A set holding exactly one month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
    pub fn single(month: u8) -> Result<Self, CalendarError> {
        Self::new([month])
    }

    /// Number of distinct months in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a `MonthSet` cannot be empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` when the set contains `month`.
    pub fn contains(&self, month: u8) -> bool {
        self.0.contains(&month)
    }

    /// Iterates the months in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// Full month names joined by `", "`, e.g. `"January, July"`.
    pub fn names(&self) -> String {
        self.iter()
            .map(|m| MONTH_NAMES[usize::from(m - 1)])
            .collect::<Vec<_>>()
            .join(", ")
    }
}
