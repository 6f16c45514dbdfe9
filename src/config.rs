use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use climplot_grid::{PRECIP_M_PER_S_TO_MM_PER_DAY, Variable};

/// Top-level climplot configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ClimplotConfig {
    /// Dataset location and field names.
    #[serde(default)]
    pub io: IoConfig,

    /// How period indices map onto model years.
    #[serde(default)]
    pub periods: PeriodsToml,

    /// The plot to build.
    #[serde(default)]
    pub plot: PlotToml,
}

impl ClimplotConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }

    /// Dataset path: the CLI override if given, else `[io].input`.
    pub fn input_path(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        cli_override
            .or(self.io.input.as_deref())
            .map(Path::to_path_buf)
            .ok_or_else(|| anyhow!("no input path: set [io].input in config or use --input"))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    #[serde(default = "default_temperature_var")]
    pub temperature_var: String,
    #[serde(default = "default_precip_vars")]
    pub precip_vars: Vec<String>,
    #[serde(default = "default_precip_scale")]
    pub precip_scale: f64,
    #[serde(default)]
    pub lat_aliases: Option<Vec<String>>,
    #[serde(default)]
    pub lon_aliases: Option<Vec<String>>,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            temperature_var: default_temperature_var(),
            precip_vars: default_precip_vars(),
            precip_scale: default_precip_scale(),
            lat_aliases: None,
            lon_aliases: None,
        }
    }
}

fn default_temperature_var() -> String {
    "TS".to_string()
}
fn default_precip_vars() -> Vec<String> {
    vec!["PRECC".to_string(), "PRECL".to_string()]
}
fn default_precip_scale() -> f64 {
    PRECIP_M_PER_S_TO_MM_PER_DAY
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeriodsToml {
    #[serde(default = "default_base_year")]
    pub base_year: i32,
    #[serde(default = "default_length_years")]
    pub length_years: usize,
}

impl Default for PeriodsToml {
    fn default() -> Self {
        Self {
            base_year: default_base_year(),
            length_years: default_length_years(),
        }
    }
}

fn default_base_year() -> i32 {
    4000
}
fn default_length_years() -> usize {
    10
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlotToml {
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default = "default_variable")]
    pub variable: Variable,
    #[serde(default = "default_months")]
    pub months: Vec<i64>,
    #[serde(default = "default_periods")]
    pub periods: Vec<i64>,
    #[serde(default = "default_min_latitude")]
    pub min_latitude: f64,
    #[serde(default = "default_max_latitude")]
    pub max_latitude: f64,
    #[serde(default = "default_min_longitude")]
    pub min_longitude: f64,
    #[serde(default = "default_max_longitude")]
    pub max_longitude: f64,
    #[serde(default)]
    pub show_percent: bool,
    #[serde(default = "default_num_std_dev")]
    pub num_std_dev: f64,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub central_longitude: f64,
}

impl Default for PlotToml {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            variable: default_variable(),
            months: default_months(),
            periods: default_periods(),
            min_latitude: default_min_latitude(),
            max_latitude: default_max_latitude(),
            min_longitude: default_min_longitude(),
            max_longitude: default_max_longitude(),
            show_percent: false,
            num_std_dev: default_num_std_dev(),
            color: default_color(),
            central_longitude: 0.0,
        }
    }
}

fn default_kind() -> String {
    "map".to_string()
}
fn default_variable() -> Variable {
    Variable::Temperature
}
fn default_months() -> Vec<i64> {
    (1..=12).collect()
}
fn default_periods() -> Vec<i64> {
    vec![0]
}
fn default_min_latitude() -> f64 {
    -90.0
}
fn default_max_latitude() -> f64 {
    90.0
}
fn default_min_longitude() -> f64 {
    -180.0
}
fn default_max_longitude() -> f64 {
    180.0
}
fn default_num_std_dev() -> f64 {
    2.0
}
fn default_color() -> String {
    "viridis".to_string()
}
