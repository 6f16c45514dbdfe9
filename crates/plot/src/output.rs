//! Render payloads handed to the plotting and export layers.

use climplot_stats::SummaryStats;
use serde::Serialize;

/// One finished plot: data to draw plus the text and hints around it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotOutput {
    /// Snake_case plot kind name.
    pub kind: &'static str,
    pub title: String,
    /// Axis or colour-bar label including units.
    pub value_label: String,
    pub body: PlotBody,
    /// Statistics of the plotted values, when the plot reports them.
    pub summary: Option<SummaryStats>,
    /// Colour-bar limits for field plots.
    pub color_range: Option<ColorRange>,
    /// Lines of the statistics / information text box.
    pub overlay: Vec<String>,
    /// Tables for the CSV exporter.
    pub exports: Vec<ExportTable>,
    /// Percent-mode cells left undefined by a zero denominator.
    pub masked: usize,
    pub hints: RenderHints,
}

/// What is drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlotBody {
    /// A 2-D field, `values[lat][lon]`.
    Field {
        lats: Vec<f64>,
        lons: Vec<f64>,
        values: Vec<Vec<f64>>,
    },
    /// One or more curves over a shared axis.
    Line {
        x_label: String,
        /// Tick labels replacing numeric `x`, e.g. month abbreviations.
        x_ticks: Vec<String>,
        series: Vec<Series>,
        band: Option<Band>,
    },
}

/// A labelled curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Series {
    pub fn new(label: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            x,
            y,
        }
    }
}

/// Shaded uncertainty band, `centre ± k·std`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Band {
    pub label: String,
    pub x: Vec<f64>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

impl Band {
    pub fn around(
        label: impl Into<String>,
        x: Vec<f64>,
        centre: &[f64],
        std: &[f64],
        k: f64,
    ) -> Self {
        Self {
            label: label.into(),
            x,
            lower: centre.iter().zip(std).map(|(c, s)| c - k * s).collect(),
            upper: centre.iter().zip(std).map(|(c, s)| c + k * s).collect(),
        }
    }
}

/// Colour-bar limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorRange {
    pub min: f64,
    pub max: f64,
}

impl ColorRange {
    /// `[max(0, mean - kσ), mean + kσ]`, for non-negative fields.
    pub fn from_spread(summary: &SummaryStats, k: f64) -> Self {
        Self {
            min: (summary.mean - k * summary.std).max(0.0),
            max: summary.mean + k * summary.std,
        }
    }

    /// `[floor(min), ceil(max)]`.
    pub fn from_extent(summary: &SummaryStats) -> Self {
        Self {
            min: summary.min.floor(),
            max: summary.max.ceil(),
        }
    }

    /// Symmetric `±max|value|`, at least `±floor`.
    pub fn symmetric(summary: &SummaryStats, floor: f64) -> Self {
        let m = summary.max_abs().max(floor);
        Self { min: -m, max: m }
    }
}

/// Drawing options passed through to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderHints {
    pub colormap: String,
    pub central_longitude: f64,
    pub num_std_dev: f64,
}

/// Which statistic an export table holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Statistic {
    Average,
    StdDev,
}

/// A named numeric table: one row per label, one column per series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportTable {
    pub statistic: Statistic,
    pub row_labels: Vec<String>,
    pub columns: Vec<ExportColumn>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportColumn {
    pub name: String,
    pub values: Vec<f64>,
}

impl ExportTable {
    pub fn new(statistic: Statistic, row_labels: Vec<String>) -> Self {
        Self {
            statistic,
            row_labels,
            columns: Vec::new(),
        }
    }

    pub fn with_column(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.columns.push(ExportColumn {
            name: name.into(),
            values,
        });
        self
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(values: &[f64]) -> SummaryStats {
        SummaryStats::from_values(values)
    }

    #[test]
    fn spread_range_clamps_at_zero() {
        // mean 1, population std 1
        let r = ColorRange::from_spread(&stats(&[0.0, 2.0]), 2.0);
        assert_eq!(r.min, 0.0);
        assert_eq!(r.max, 3.0);
    }

    #[test]
    fn extent_range_rounds_outward() {
        let r = ColorRange::from_extent(&stats(&[271.4, 300.2]));
        assert_eq!((r.min, r.max), (271.0, 301.0));
    }

    #[test]
    fn symmetric_range_has_floor() {
        let s = stats(&[-0.5, 1.0]);
        assert_eq!(ColorRange::symmetric(&s, 0.0), ColorRange { min: -1.0, max: 1.0 });
        assert_eq!(ColorRange::symmetric(&s, 2.0), ColorRange { min: -2.0, max: 2.0 });
    }

    #[test]
    fn band_around_centre() {
        let b = Band::around("±1σ", vec![0.0, 1.0], &[10.0, 20.0], &[1.0, 2.0], 2.0);
        assert_eq!(b.lower, vec![8.0, 16.0]);
        assert_eq!(b.upper, vec![12.0, 24.0]);
    }

    #[test]
    fn body_serialises_with_type_tag() {
        let body = PlotBody::Field {
            lats: vec![0.0],
            lons: vec![0.0],
            values: vec![vec![f64::NAN]],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "field");
        assert!(json["values"][0][0].is_null());
    }

    #[test]
    fn statistic_names() {
        assert_eq!(serde_json::to_value(Statistic::StdDev).unwrap(), "std_dev");
    }
}
