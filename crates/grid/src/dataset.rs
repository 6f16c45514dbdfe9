//! Named fields sharing one latitude/longitude/time grid.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::grid::Grid;

/// Physical quantity a plot is drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variable {
    Temperature,
    Precipitation,
}

impl Variable {
    /// Display name used in titles and labels.
    pub fn display_name(&self) -> &'static str {
        match self {
            Variable::Temperature => "Surface Temperature",
            Variable::Precipitation => "Precipitation Rate",
        }
    }

    /// Short capitalised name, e.g. `"Temperature"`.
    pub fn title(&self) -> &'static str {
        match self {
            Variable::Temperature => "Temperature",
            Variable::Precipitation => "Precipitation",
        }
    }

    /// Units of the extracted field.
    pub fn units(&self) -> &'static str {
        match self {
            Variable::Temperature => "K",
            Variable::Precipitation => "mm/day",
        }
    }
}

/// How a [`Variable`] is assembled from dataset fields: the named components
/// are summed cell-wise and the result multiplied by `scale`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    components: Vec<String>,
    scale: f64,
}

impl FieldSpec {
    pub fn new<I, S>(components: I, scale: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            components: components.into_iter().map(Into::into).collect(),
            scale,
        }
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

/// Field specs for every [`Variable`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldCatalog {
    temperature: FieldSpec,
    precipitation: FieldSpec,
}

/// Converts a precipitation rate in m/s to mm/day.
pub const PRECIP_M_PER_S_TO_MM_PER_DAY: f64 = 86_400_000.0;

impl Default for FieldCatalog {
    fn default() -> Self {
        Self {
            temperature: FieldSpec::new(["TS"], 1.0),
            precipitation: FieldSpec::new(["PRECC", "PRECL"], PRECIP_M_PER_S_TO_MM_PER_DAY),
        }
    }
}

impl FieldCatalog {
    pub fn new(temperature: FieldSpec, precipitation: FieldSpec) -> Self {
        Self {
            temperature,
            precipitation,
        }
    }

    pub fn spec(&self, variable: Variable) -> &FieldSpec {
        match variable {
            Variable::Temperature => &self.temperature,
            Variable::Precipitation => &self.precipitation,
        }
    }

    /// Every field name referenced by the catalog, without duplicates.
    pub fn field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for name in self
            .temperature
            .components
            .iter()
            .chain(&self.precipitation.components)
        {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
        names
    }
}

/// The dataset retrieval product: coordinates plus named (time, lat, lon)
/// arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    lats: Vec<f64>,
    lons: Vec<f64>,
    n_time: usize,
    fields: BTreeMap<String, Vec<f64>>,
}

impl Dataset {
    /// Creates a dataset, checking that every field has
    /// `n_time * lats.len() * lons.len()` values.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DimensionMismatch`] naming the first bad field.
    pub fn new(
        lats: Vec<f64>,
        lons: Vec<f64>,
        n_time: usize,
        fields: BTreeMap<String, Vec<f64>>,
    ) -> Result<Self, GridError> {
        let expected = n_time * lats.len() * lons.len();
        for (name, values) in &fields {
            if values.len() != expected {
                return Err(GridError::DimensionMismatch {
                    name: name.clone(),
                    expected,
                    got: values.len(),
                });
            }
        }
        Ok(Self {
            lats,
            lons,
            n_time,
            fields,
        })
    }

    pub fn lats(&self) -> &[f64] {
        &self.lats
    }

    pub fn lons(&self) -> &[f64] {
        &self.lons
    }

    pub fn n_time(&self) -> usize {
        self.n_time
    }

    /// Field names in sorted order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Builds the [`Grid`] described by `spec`.
    ///
    /// A cell missing in any component is missing in the sum.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::MissingField`] for an unknown component name, or
    /// any error from [`Grid::new`].
    pub fn extract(&self, spec: &FieldSpec) -> Result<Grid, GridError> {
        let mut components = spec.components.iter();
        let Some(first) = components.next() else {
            return Err(GridError::MissingField {
                name: "<no components>".into(),
            });
        };

        let mut values = self.require(first)?.to_vec();
        for name in components {
            for (acc, v) in values.iter_mut().zip(self.require(name)?) {
                *acc += v;
            }
        }
        if spec.scale != 1.0 {
            for v in &mut values {
                *v *= spec.scale;
            }
        }

        Grid::new(self.lats.clone(), self.lons.clone(), self.n_time, values)
    }

    /// Raw flat `(time, lat, lon)` values of one field.
    pub fn field(&self, name: &str) -> Option<&[f64]> {
        self.fields.get(name).map(Vec::as_slice)
    }

    fn require(&self, name: &str) -> Result<&[f64], GridError> {
        self.field(name)
            .ok_or_else(|| GridError::MissingField { name: name.into() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        let mut fields = BTreeMap::new();
        fields.insert("TS".to_string(), vec![280.0, 290.0]);
        fields.insert("PRECC".to_string(), vec![1e-8, f64::NAN]);
        fields.insert("PRECL".to_string(), vec![2e-8, 1e-8]);
        Dataset::new(vec![0.0], vec![0.0, 90.0], 1, fields).unwrap()
    }

    #[test]
    fn extract_single_component() {
        let ds = dataset();
        let g = ds.extract(FieldCatalog::default().spec(Variable::Temperature)).unwrap();
        assert_eq!(g.values(), &[280.0, 290.0]);
    }

    #[test]
    fn extract_sums_and_scales() {
        let ds = dataset();
        let g = ds.extract(FieldCatalog::default().spec(Variable::Precipitation)).unwrap();
        assert!((g.values()[0] - 2.592).abs() < 1e-9);
        assert!(g.values()[1].is_nan());
    }

    #[test]
    fn extract_unknown_field() {
        let ds = dataset();
        let err = ds.extract(&FieldSpec::new(["T2M"], 1.0)).unwrap_err();
        assert_eq!(err, GridError::MissingField { name: "T2M".into() });
    }

    #[test]
    fn new_rejects_wrong_length() {
        let mut fields = BTreeMap::new();
        fields.insert("TS".to_string(), vec![1.0]);
        let err = Dataset::new(vec![0.0], vec![0.0, 1.0], 1, fields).unwrap_err();
        assert!(matches!(err, GridError::DimensionMismatch { expected: 2, got: 1, .. }));
    }

    #[test]
    fn catalog_field_names() {
        assert_eq!(FieldCatalog::default().field_names(), vec!["TS", "PRECC", "PRECL"]);
    }

    #[test]
    fn variable_units() {
        assert_eq!(Variable::Temperature.units(), "K");
        assert_eq!(Variable::Precipitation.units(), "mm/day");
    }
}
