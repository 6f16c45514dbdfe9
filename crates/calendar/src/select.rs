//! Flat time-step selection for a period and a set of months.

use crate::error::CalendarError;
use crate::month::MonthSet;
use crate::period::TimePeriod;

/// Computes the flat monthly indices for `months` within `period`.
///
/// The series is assumed to start in January of the base year with one step
/// per month. With `start = period * period_length_years * 12`, the result
/// holds `start + y*12 + (m - 1)` for every year offset `y` in
/// `0..=period_length_years` and every month `m` in ascending order.
///
/// The year range is inclusive, so each period spans `period_length_years + 1`
/// years and the result has `months.len() * (period_length_years + 1)`
/// entries. Adjacent periods therefore share their boundary year.
///
/// # Errors
///
/// Returns [`CalendarError::PeriodOverflow`] if the last index of the period
/// does not fit in `usize`.
///
/// # Example
///
/// ```
/// use climplot_calendar::{MonthSet, TimePeriod, select_indices};
///
/// let january = MonthSet::new([1]).unwrap();
/// let period = TimePeriod::new(0).unwrap();
/// let indices = select_indices(period, &january, 10).unwrap();
/// assert_eq!(indices, vec![0, 12, 24, 36, 48, 60, 72, 84, 96, 108, 120]);
/// ```
pub fn select_indices(
    period: TimePeriod,
    months: &MonthSet,
    period_length_years: usize,
) -> Result<Vec<usize>, CalendarError> {
    let overflow = || CalendarError::PeriodOverflow {
        period: period.index(),
        length_years: period_length_years,
    };
    let start = period
        .index()
        .checked_mul(period_length_years)
        .and_then(|v| v.checked_mul(12))
        .ok_or_else(overflow)?;
    // last index is start + L*12 + 11; everything below it fits once it does
    period_length_years
        .checked_mul(12)
        .and_then(|v| v.checked_add(11))
        .and_then(|v| v.checked_add(start))
        .ok_or_else(overflow)?;
    let n_years = period_length_years + 1;

    let mut indices = Vec::with_capacity(months.len() * n_years);
    for year in 0..n_years {
        let year_start = start + year * 12;
        for month in months.iter() {
            indices.push(year_start + usize::from(month - 1));
        }
    }
    Ok(indices)
}
