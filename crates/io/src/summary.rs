//! Dataset descriptions for the file check.

use std::fmt;

use climplot_grid::Dataset;
use serde::Serialize;

/// Extent and missing-value counts of one loaded field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSummary {
    pub name: String,
    pub finite: usize,
    pub missing: usize,
    pub min: f64,
    pub max: f64,
}

/// Dimensions, coordinate ranges and per-field statistics of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub n_time: usize,
    pub n_lat: usize,
    pub n_lon: usize,
    pub lat_range: (f64, f64),
    pub lon_range: (f64, f64),
    pub fields: Vec<FieldSummary>,
}

impl DatasetSummary {
    pub fn describe(dataset: &Dataset) -> Self {
        let fields = dataset
            .field_names()
            .filter_map(|name| dataset.field(name).map(|v| summarise_field(name, v)))
            .collect();
        Self {
            n_time: dataset.n_time(),
            n_lat: dataset.lats().len(),
            n_lon: dataset.lons().len(),
            lat_range: range(dataset.lats()),
            lon_range: range(dataset.lons()),
            fields,
        }
    }
}

fn summarise_field(name: &str, values: &[f64]) -> FieldSummary {
    let (min, max) = range(values);
    let finite = values.iter().filter(|v| v.is_finite()).count();
    FieldSummary {
        name: name.to_string(),
        finite,
        missing: values.len() - finite,
        min,
        max,
    }
}

/// `(min, max)` over finite values, `(NaN, NaN)` if there are none.
fn range(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or((f64::NAN, f64::NAN))
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "dimensions: time={} lat={} lon={}",
            self.n_time, self.n_lat, self.n_lon
        )?;
        writeln!(f, "latitude:  {} .. {}", self.lat_range.0, self.lat_range.1)?;
        writeln!(f, "longitude: {} .. {}", self.lon_range.0, self.lon_range.1)?;
        for field in &self.fields {
            writeln!(
                f,
                "  {:<8} min={:<14} max={:<14} missing={}/{}",
                field.name,
                field.min,
                field.max,
                field.missing,
                field.finite + field.missing
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn describes_dimensions_and_missing() {
        let mut fields = BTreeMap::new();
        fields.insert("TS".to_string(), vec![250.0, f64::NAN, 300.0, 280.0]);
        let ds = Dataset::new(vec![-45.0, 45.0], vec![0.0, 180.0], 1, fields).unwrap();

        let s = DatasetSummary::describe(&ds);
        assert_eq!((s.n_time, s.n_lat, s.n_lon), (1, 2, 2));
        assert_eq!(s.lat_range, (-45.0, 45.0));
        assert_eq!(s.fields.len(), 1);
        assert_eq!(s.fields[0].missing, 1);
        assert_eq!(s.fields[0].min, 250.0);
        assert_eq!(s.fields[0].max, 300.0);
        assert!(s.to_string().starts_with("dimensions: time=1 lat=2 lon=2"));
    }
}
