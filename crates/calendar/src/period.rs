//! Fixed-length multi-year periods over a monthly series.

use serde::Serialize;

use crate::error::CalendarError;
use crate::month::MonthSet;
use crate::select::select_indices;

/// Index of a fixed-length span of consecutive years.
///
/// Period `p` covers the years `[base + p*L, base + (p+1)*L)` for a scheme
/// with base year `base` and period length `L` (see [`PeriodScheme`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TimePeriod(usize);

impl TimePeriod {
    /// Creates a period from a signed index.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidPeriod`] if `index` is negative.
    pub fn new(index: i64) -> Result<Self, CalendarError> {
        usize::try_from(index)
            .map(Self)
            .map_err(|_| CalendarError::InvalidPeriod { index })
    }

    /// Returns the zero-based period index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for TimePeriod {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// How period indices map onto model years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodScheme {
    base_year: i32,
    length_years: usize,
}

impl Default for PeriodScheme {
    fn default() -> Self {
        Self {
            base_year: 4000,
            length_years: 10,
        }
    }
}

impl PeriodScheme {
    /// Creates a scheme starting at `base_year` with periods of `length_years`.
    pub fn new(base_year: i32, length_years: usize) -> Self {
        Self {
            base_year,
            length_years,
        }
    }

    /// First model year of the series.
    pub fn base_year(&self) -> i32 {
        self.base_year
    }

    /// Length of one period in years.
    pub fn length_years(&self) -> usize {
        self.length_years
    }

    /// Half-open year range `[start, end)` covered by `period`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::PeriodOverflow`] if either year does not fit
    /// in `i64`.
    pub fn years(&self, period: TimePeriod) -> Result<(i64, i64), CalendarError> {
        let overflow = || CalendarError::PeriodOverflow {
            period: period.index(),
            length_years: self.length_years,
        };
        let len = i64::try_from(self.length_years).map_err(|_| overflow())?;
        let start = i64::try_from(period.index())
            .ok()
            .and_then(|p| p.checked_mul(len))
            .and_then(|offset| offset.checked_add(i64::from(self.base_year)))
            .ok_or_else(overflow)?;
        let end = start.checked_add(len).ok_or_else(overflow)?;
        Ok((start, end))
    }

    /// Display label such as `"4000-4010"`.
    ///
    /// # Errors
    ///
    /// As [`PeriodScheme::years`].
    pub fn label(&self, period: TimePeriod) -> Result<String, CalendarError> {
        let (start, end) = self.years(period)?;
        Ok(format!("{start}-{end}"))
    }

    /// Flat monthly indices for `period` and `months` under this scheme.
    ///
    /// Shorthand for [`select_indices`] with this scheme's period length.
    ///
    /// # Errors
    ///
    /// As [`select_indices`].
    pub fn indices(
        &self,
        period: TimePeriod,
        months: &MonthSet,
    ) -> Result<Vec<usize>, CalendarError> {
        select_indices(period, months, self.length_years)
    }

    /// Model year (fractional) of flat monthly step `t`: `base + t/12`.
    pub fn model_year(&self, t: usize) -> f64 {
        f64::from(self.base_year) + t as f64 / 12.0
    }

    /// Number of periods whose full index window fits in `n_time` monthly steps.
    ///
    /// A period's window spans `length_years + 1` years of months, so the
    /// last period counted here is the last one all of whose indices are
    /// `< n_time`.
    pub fn n_periods(&self, n_time: usize) -> usize {
        let window = self.length_years.saturating_add(1).saturating_mul(12);
        if n_time < window {
            return 0;
        }
        let stride = self.length_years.saturating_mul(12);
        if stride == 0 {
            // Every period maps onto the same window.
            return 1;
        }
        (n_time - window) / stride + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_index_rejected() {
        assert_eq!(
            TimePeriod::new(-1),
            Err(CalendarError::InvalidPeriod { index: -1 })
        );
    }

    #[test]
    fn zero_index_accepted() {
        assert_eq!(TimePeriod::new(0).unwrap().index(), 0);
    }

    #[test]
    fn default_scheme_labels() {
        let scheme = PeriodScheme::default();
        assert_eq!(scheme.label(TimePeriod::from(0)).unwrap(), "4000-4010");
        assert_eq!(scheme.label(TimePeriod::from(3)).unwrap(), "4030-4040");
    }

    #[test]
    fn years_half_open() {
        let scheme = PeriodScheme::new(1850, 30);
        assert_eq!(scheme.years(TimePeriod::from(2)).unwrap(), (1910, 1940));
    }

    #[test]
    fn huge_period_years_overflow() {
        let scheme = PeriodScheme::default();
        let period = TimePeriod::new(i64::MAX).unwrap();
        let expected = Err(CalendarError::PeriodOverflow {
            period: i64::MAX as usize,
            length_years: 10,
        });
        assert_eq!(scheme.years(period), expected);
        assert!(matches!(
            scheme.label(period),
            Err(CalendarError::PeriodOverflow { .. })
        ));
        assert!(scheme.indices(period, &MonthSet::all()).is_err());
    }

    #[test]
    fn n_periods_saturates_for_huge_length() {
        let scheme = PeriodScheme::new(0, usize::MAX);
        assert_eq!(scheme.n_periods(612), 0);
    }

    #[test]
    fn model_year_fractional() {
        let scheme = PeriodScheme::default();
        assert_eq!(scheme.model_year(0), 4000.0);
        assert_eq!(scheme.model_year(18), 4001.5);
    }

    #[test]
    fn n_periods_for_fifty_one_years() {
        // 4000-4050 inclusive of the last year: 612 monthly steps.
        let scheme = PeriodScheme::default();
        assert_eq!(scheme.n_periods(612), 5);
    }

    #[test]
    fn n_periods_short_series() {
        let scheme = PeriodScheme::default();
        assert_eq!(scheme.n_periods(131), 0);
        assert_eq!(scheme.n_periods(132), 1);
    }
}
