//! High-level dataset reader configuration and orchestration.

use std::path::Path;

#[cfg(feature = "netcdf")]
use std::collections::BTreeMap;

use climplot_grid::{Dataset, FieldCatalog};
#[cfg(feature = "netcdf")]
use tracing::debug;
use tracing::info;

use crate::error::IoError;
#[cfg(feature = "netcdf")]
use crate::netcdf_read;

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Configuration for reading model output from NetCDF files.
///
/// Use the builder methods (`with_*`) to customise coordinate aliases and
/// the fields to load. The [`Default`] implementation loads the fields of
/// the default [`FieldCatalog`] (`TS`, `PRECC`, `PRECL`).
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Aliases to try when looking up latitude coordinates.
    lat_aliases: Vec<String>,
    /// Aliases to try when looking up longitude coordinates.
    lon_aliases: Vec<String>,
    /// 3-D `(time, lat, lon)` variables to load.
    fields: Vec<String>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            lat_aliases: vec!["lat".into(), "latitude".into()],
            lon_aliases: vec!["lon".into(), "longitude".into()],
            fields: FieldCatalog::default().field_names(),
        }
    }
}

impl ReaderConfig {
    /// Load exactly the fields a catalog needs.
    pub fn for_catalog(catalog: &FieldCatalog) -> Self {
        Self::default().with_fields(catalog.field_names())
    }

    /// Replace the list of fields to load.
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the latitude coordinate aliases.
    pub fn with_lat_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lat_aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the longitude coordinate aliases.
    pub fn with_lon_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lon_aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn lat_aliases(&self) -> &[String] {
        &self.lat_aliases
    }

    pub fn lon_aliases(&self) -> &[String] {
        &self.lon_aliases
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

// ---------------------------------------------------------------------------
// read_dataset
// ---------------------------------------------------------------------------

/// Read a [`Dataset`] from a NetCDF file.
///
/// Every configured field must be a 3-D `(time, lat, lon)` variable sized to
/// the coordinate arrays. Fill values become NaN. The file handle is closed
/// before this function returns, on success and on error.
///
/// # Errors
///
/// Returns [`IoError::DataUnavailable`] if the file does not exist or cannot
/// be opened (including builds without the `netcdf` feature), and
/// [`IoError::MissingVariable`] / [`IoError::DimensionMismatch`] for files
/// that do not hold the configured grid.
pub fn read_dataset(path: &Path, config: &ReaderConfig) -> Result<Dataset, IoError> {
    info!(path = %path.display(), fields = ?config.fields, "reading dataset");
    read_impl(path, config)
}

#[cfg(feature = "netcdf")]
fn read_impl(path: &Path, config: &ReaderConfig) -> Result<Dataset, IoError> {
    let file = netcdf_read::open_file(path)?;

    // -- Coordinates --------------------------------------------------------

    let lat_alias_refs: Vec<&str> = config.lat_aliases.iter().map(String::as_str).collect();
    let lon_alias_refs: Vec<&str> = config.lon_aliases.iter().map(String::as_str).collect();

    let lats = netcdf_read::read_1d_f64(&file, &lat_alias_refs, path)?;
    let lons = netcdf_read::read_1d_f64(&file, &lon_alias_refs, path)?;

    // -- 3-D fields ---------------------------------------------------------

    let mut fields = BTreeMap::new();
    let mut n_time = None;
    for name in &config.fields {
        let (data, [nt, ny, nx]) = netcdf_read::read_3d_f64(&file, name, path)?;
        check_dim("lat", lats.len(), ny)?;
        check_dim("lon", lons.len(), nx)?;
        match n_time {
            None => n_time = Some(nt),
            Some(expected) => check_dim("time", expected, nt)?,
        }
        debug!(field = %name, nt, ny, nx, "loaded field");
        fields.insert(name.clone(), data);
    }

    let n_time = n_time.unwrap_or(0);
    let dataset = Dataset::new(lats, lons, n_time, fields)?;
    info!(
        n_time,
        n_lat = dataset.lats().len(),
        n_lon = dataset.lons().len(),
        "dataset loaded"
    );
    Ok(dataset)
}

#[cfg(not(feature = "netcdf"))]
fn read_impl(path: &Path, _config: &ReaderConfig) -> Result<Dataset, IoError> {
    if !path.exists() {
        return Err(IoError::DataUnavailable {
            path: path.to_path_buf(),
            reason: "file not found".into(),
        });
    }
    Err(IoError::DataUnavailable {
        path: path.to_path_buf(),
        reason: "built without NetCDF support (enable the `netcdf` feature)".into(),
    })
}

#[cfg(feature = "netcdf")]
fn check_dim(name: &str, expected: usize, got: usize) -> Result<(), IoError> {
    if expected != got {
        return Err(IoError::DimensionMismatch {
            name: name.to_string(),
            expected,
            got,
        });
    }
    Ok(())
}

/// Names of every variable in a NetCDF file, for diagnostics.
///
/// # Errors
///
/// Returns [`IoError::DataUnavailable`] if the file cannot be opened.
pub fn list_variables(path: &Path) -> Result<Vec<String>, IoError> {
    #[cfg(feature = "netcdf")]
    {
        let file = netcdf_read::open_file(path)?;
        Ok(netcdf_read::variable_names(&file))
    }
    #[cfg(not(feature = "netcdf"))]
    {
        read_impl(path, &ReaderConfig::default()).map(|_| Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_loads_catalog_fields() {
        assert_eq!(ReaderConfig::default().fields(), &["TS", "PRECC", "PRECL"]);
    }

    #[test]
    fn builder_overrides_fields() {
        let cfg = ReaderConfig::default().with_fields(["T"]);
        assert_eq!(cfg.fields(), &["T"]);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = read_dataset(
            Path::new("/tmp/climplot_nonexistent_file.nc"),
            &ReaderConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, IoError::DataUnavailable { .. }), "got {err:?}");
    }
}
