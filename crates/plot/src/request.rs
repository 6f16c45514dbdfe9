//! Plot kinds and validated plot requests.

use std::ops::RangeInclusive;

use climplot_calendar::{MonthSet, TimePeriod};
use climplot_difference::DifferenceMode;
use climplot_grid::{BoundingBox, Variable};
use serde::Serialize;

use crate::error::PlotError;

/// Independent axis of a line difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineAxis {
    /// Zonal-mean profiles against latitude.
    Latitude,
    /// Regional means step by step through the period.
    Time,
}

/// Every plot the orchestrator can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotKind {
    /// Period-average map; with two periods the second is subtracted.
    Map,
    /// Two-period difference map, absolute or percent.
    MapDifference,
    /// Longitude-averaged latitude profile for one period.
    ZonalProfile,
    /// Twelve monthly regional means, or their difference between two periods.
    AnnualCycle,
    /// Regional mean over the whole record.
    TimeSeries,
    /// Two-period difference of a line plot.
    LineDifference { axis: LineAxis },
}

impl PlotKind {
    /// Stable snake_case name used in config files and payloads.
    pub fn name(&self) -> &'static str {
        match self {
            PlotKind::Map => "map",
            PlotKind::MapDifference => "map_difference",
            PlotKind::ZonalProfile => "zonal_profile",
            PlotKind::AnnualCycle => "annual_cycle",
            PlotKind::TimeSeries => "time_series",
            PlotKind::LineDifference {
                axis: LineAxis::Latitude,
            } => "line_difference_latitude",
            PlotKind::LineDifference {
                axis: LineAxis::Time,
            } => "line_difference_time",
        }
    }

    /// Parses a name produced by [`PlotKind::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "map" => PlotKind::Map,
            "map_difference" => PlotKind::MapDifference,
            "zonal_profile" => PlotKind::ZonalProfile,
            "annual_cycle" => PlotKind::AnnualCycle,
            "time_series" => PlotKind::TimeSeries,
            "line_difference_latitude" => PlotKind::LineDifference {
                axis: LineAxis::Latitude,
            },
            "line_difference_time" => PlotKind::LineDifference {
                axis: LineAxis::Time,
            },
            _ => return None,
        })
    }

    /// How many periods a request of this kind must name.
    pub fn period_count(&self) -> RangeInclusive<usize> {
        match self {
            PlotKind::Map | PlotKind::AnnualCycle => 1..=2,
            PlotKind::MapDifference | PlotKind::LineDifference { .. } => 2..=2,
            PlotKind::ZonalProfile => 1..=1,
            PlotKind::TimeSeries => 0..=0,
        }
    }

    /// Kinds that accept [`DifferenceMode::Percent`].
    pub fn supports_percent(&self) -> bool {
        matches!(
            self,
            PlotKind::MapDifference | PlotKind::LineDifference { .. }
        )
    }
}

/// Everything needed to build one plot.
///
/// Built with [`PlotRequest::new`] and the `with_*` methods; checked by
/// [`PlotRequest::validate`] before any data is touched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotRequest {
    kind: PlotKind,
    variable: Variable,
    months: MonthSet,
    periods: Vec<TimePeriod>,
    bbox: BoundingBox,
    mode: DifferenceMode,
    num_std_dev: f64,
    color: String,
    central_longitude: f64,
}

impl PlotRequest {
    /// A request over all months, no periods and the whole globe.
    pub fn new(kind: PlotKind, variable: Variable) -> Self {
        Self {
            kind,
            variable,
            months: MonthSet::all(),
            periods: Vec::new(),
            bbox: BoundingBox::global(),
            mode: DifferenceMode::Absolute,
            num_std_dev: 2.0,
            color: "viridis".into(),
            central_longitude: 0.0,
        }
    }

    pub fn with_months(mut self, months: MonthSet) -> Self {
        self.months = months;
        self
    }

    pub fn with_periods(mut self, periods: impl IntoIterator<Item = TimePeriod>) -> Self {
        self.periods = periods.into_iter().collect();
        self
    }

    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = bbox;
        self
    }

    pub fn with_mode(mut self, mode: DifferenceMode) -> Self {
        self.mode = mode;
        self
    }

    /// Multiplier `k` for the `±k·std` shading and colour ranges.
    pub fn with_num_std_dev(mut self, k: f64) -> Self {
        self.num_std_dev = k;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_central_longitude(mut self, lon: f64) -> Self {
        self.central_longitude = lon;
        self
    }

    pub fn kind(&self) -> PlotKind {
        self.kind
    }

    pub fn variable(&self) -> Variable {
        self.variable
    }

    pub fn months(&self) -> &MonthSet {
        &self.months
    }

    pub fn periods(&self) -> &[TimePeriod] {
        &self.periods
    }

    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    pub fn mode(&self) -> DifferenceMode {
        self.mode
    }

    pub fn num_std_dev(&self) -> f64 {
        self.num_std_dev
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn central_longitude(&self) -> f64 {
        self.central_longitude
    }

    /// Checks the request against its kind.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::InvalidRequest`] if the number of periods does
    /// not suit the kind, `num_std_dev` is negative or not finite, or
    /// percent mode is asked of a kind that does not difference.
    pub fn validate(&self) -> Result<(), PlotError> {
        let allowed = self.kind.period_count();
        if !allowed.contains(&self.periods.len()) {
            let wanted = if allowed.start() == allowed.end() {
                allowed.start().to_string()
            } else {
                format!("{} or {}", allowed.start(), allowed.end())
            };
            return Err(PlotError::InvalidRequest {
                reason: format!(
                    "{} needs {wanted} period(s), got {}",
                    self.kind.name(),
                    self.periods.len()
                ),
            });
        }
        if !self.num_std_dev.is_finite() || self.num_std_dev < 0.0 {
            return Err(PlotError::InvalidRequest {
                reason: format!(
                    "num_std_dev must be finite and >= 0, got {}",
                    self.num_std_dev
                ),
            });
        }
        if self.mode == DifferenceMode::Percent && !self.kind.supports_percent() {
            return Err(PlotError::InvalidRequest {
                reason: format!("{} does not support percent mode", self.kind.name()),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [PlotKind; 7] = [
        PlotKind::Map,
        PlotKind::MapDifference,
        PlotKind::ZonalProfile,
        PlotKind::AnnualCycle,
        PlotKind::TimeSeries,
        PlotKind::LineDifference {
            axis: LineAxis::Latitude,
        },
        PlotKind::LineDifference {
            axis: LineAxis::Time,
        },
    ];

    fn periods(n: usize) -> Vec<TimePeriod> {
        (0..n).map(TimePeriod::from).collect()
    }

    #[test]
    fn names_round_trip() {
        for kind in ALL_KINDS {
            assert_eq!(PlotKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(PlotKind::from_name("histogram"), None);
    }

    #[test]
    fn each_kind_rejects_wrong_period_count() {
        for kind in ALL_KINDS {
            let allowed = kind.period_count();
            for n in 0..=3 {
                let req = PlotRequest::new(kind, Variable::Temperature).with_periods(periods(n));
                assert_eq!(
                    req.validate().is_ok(),
                    allowed.contains(&n),
                    "{} with {n} periods",
                    kind.name()
                );
            }
        }
    }

    #[test]
    fn rejects_negative_std_multiplier() {
        let req = PlotRequest::new(PlotKind::ZonalProfile, Variable::Temperature)
            .with_periods(periods(1))
            .with_num_std_dev(-1.0);
        assert!(matches!(req.validate(), Err(PlotError::InvalidRequest { .. })));
    }

    #[test]
    fn percent_only_on_difference_kinds() {
        let map = PlotRequest::new(PlotKind::Map, Variable::Precipitation)
            .with_periods(periods(2))
            .with_mode(DifferenceMode::Percent);
        assert!(map.validate().is_err());

        let diff = PlotRequest::new(PlotKind::MapDifference, Variable::Precipitation)
            .with_periods(periods(2))
            .with_mode(DifferenceMode::Percent);
        assert!(diff.validate().is_ok());
    }

    #[test]
    fn message_names_the_kind() {
        let err = PlotRequest::new(PlotKind::MapDifference, Variable::Temperature)
            .with_periods(periods(1))
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid plot request: map_difference needs 2 period(s), got 1"
        );
    }
}
