//! Per-request access to the dataset.

use climplot_calendar::{MonthSet, PeriodScheme, TimePeriod};
use climplot_grid::{Dataset, FieldCatalog, Grid, Variable};
use tracing::debug;

use crate::error::PlotError;

/// The dataset, field catalog and period scheme one plot is built against.
///
/// Borrowed for the duration of [`crate::build_plot`]; nothing is cached
/// between requests.
#[derive(Debug, Clone, Copy)]
pub struct PlotContext<'a> {
    dataset: &'a Dataset,
    catalog: &'a FieldCatalog,
    scheme: PeriodScheme,
}

impl<'a> PlotContext<'a> {
    pub fn new(dataset: &'a Dataset, catalog: &'a FieldCatalog, scheme: PeriodScheme) -> Self {
        Self {
            dataset,
            catalog,
            scheme,
        }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn scheme(&self) -> &PeriodScheme {
        &self.scheme
    }

    /// Assembles the grid for `variable` from its catalog components.
    pub(crate) fn grid(&self, variable: Variable) -> Result<Grid, PlotError> {
        let spec = self.catalog.spec(variable);
        debug!(variable = variable.title(), components = ?spec.components(), "extracting field");
        Ok(self.dataset.extract(spec)?)
    }

    /// Flat time indices of `months` within `period`.
    pub(crate) fn indices(
        &self,
        period: TimePeriod,
        months: &MonthSet,
    ) -> Result<Vec<usize>, PlotError> {
        let indices = self.scheme.indices(period, months)?;
        debug!(
            period = period.index(),
            months = months.len(),
            n = indices.len(),
            first = indices.first().copied(),
            last = indices.last().copied(),
            "selected time indices"
        );
        Ok(indices)
    }

    pub(crate) fn label(&self, period: TimePeriod) -> Result<String, PlotError> {
        Ok(self.scheme.label(period)?)
    }
}
