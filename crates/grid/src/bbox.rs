//! Latitude/longitude bounding boxes and grid subsetting.

use serde::Serialize;

use crate::error::GridError;
use crate::grid::Grid;
use crate::longitude::{permute_columns, wrap_longitude};

/// Geographic selection box.
///
/// Latitudes are an inclusive closed range. Longitudes are stored as a start
/// meridian in `[-180, 180)` plus an eastward span, so a box whose `min_lon`
/// is numerically greater than its `max_lon` crosses the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
    /// Start meridian folded into `[-180, 180)`.
    lon_start: f64,
    /// Eastward extent in degrees, `0..=360`.
    lon_span: f64,
}

impl BoundingBox {
    /// Creates a bounding box.
    ///
    /// `min_lat == max_lat` is accepted and selects a single latitude row.
    /// When `max_lon - min_lon >= 360` the box covers every longitude.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidBoundingBox`] if a bound is not finite, a
    /// latitude lies outside `[-90, 90]`, or `min_lat > max_lat`.
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Result<Self, GridError> {
        if ![min_lat, max_lat, min_lon, max_lon]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(GridError::InvalidBoundingBox {
                reason: "bounds must be finite".into(),
            });
        }
        if !(-90.0..=90.0).contains(&min_lat) || !(-90.0..=90.0).contains(&max_lat) {
            return Err(GridError::InvalidBoundingBox {
                reason: format!("latitudes must lie in [-90, 90], got {min_lat}..{max_lat}"),
            });
        }
        if min_lat > max_lat {
            return Err(GridError::InvalidBoundingBox {
                reason: format!("min_lat ({min_lat}) must not exceed max_lat ({max_lat})"),
            });
        }

        let raw_span = max_lon - min_lon;
        let lon_span = if raw_span >= 360.0 {
            360.0
        } else {
            raw_span.rem_euclid(360.0)
        };

        Ok(Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
            lon_start: wrap_longitude(min_lon),
            lon_span,
        })
    }

    /// The whole globe.
    pub fn global() -> Self {
        Self {
            min_lat: -90.0,
            max_lat: 90.0,
            min_lon: -180.0,
            max_lon: 180.0,
            lon_start: -180.0,
            lon_span: 360.0,
        }
    }

    pub fn min_lat(&self) -> f64 {
        self.min_lat
    }

    pub fn max_lat(&self) -> f64 {
        self.max_lat
    }

    /// Western bound as supplied.
    pub fn min_lon(&self) -> f64 {
        self.min_lon
    }

    /// Eastern bound as supplied.
    pub fn max_lon(&self) -> f64 {
        self.max_lon
    }

    /// Returns `true` when the box covers the full sphere.
    pub fn is_global(&self) -> bool {
        self.min_lat <= -90.0 && self.max_lat >= 90.0 && self.lon_span >= 360.0
    }

    /// Returns `true` when the box crosses the antimeridian.
    pub fn crosses_antimeridian(&self) -> bool {
        self.lon_span < 360.0 && self.lon_start + self.lon_span > 180.0
    }

    /// Returns `true` when `lat` lies within the latitude range.
    pub fn contains_lat(&self, lat: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat
    }

    /// Eastward offset of `lon` from the box start, if `lon` is inside the box.
    pub fn lon_offset(&self, lon: f64) -> Option<f64> {
        let offset = (wrap_longitude(lon) - self.lon_start).rem_euclid(360.0);
        (offset <= self.lon_span).then_some(offset)
    }

    /// Human-readable region description used in plot overlays.
    pub fn describe(&self) -> String {
        if self.is_global() {
            return "Region: Global".to_string();
        }
        let region = format!(
            "Region: {}°-{}°N, {}°-{}°E",
            self.min_lat, self.max_lat, self.min_lon, self.max_lon
        );
        if self.crosses_antimeridian() {
            format!("{region} (across 180°)")
        } else {
            region
        }
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::global()
    }
}

/// Restricts `grid` to the cells inside `bbox`.
///
/// Latitude rows keep their grid order. Selected longitudes are ordered by
/// their eastward offset from the box start and relabelled `start + offset`,
/// so the axis stays continuous and increasing across the antimeridian
/// (a 170°E..170°W box yields coordinates 170..190).
///
/// # Errors
///
/// Returns [`GridError::EmptySelection`] if no latitude row or no longitude
/// column falls inside the box.
pub fn subset(grid: &Grid, bbox: &BoundingBox) -> Result<Grid, GridError> {
    let lat_keep: Vec<usize> = grid
        .lats()
        .iter()
        .enumerate()
        .filter(|(_, lat)| bbox.contains_lat(**lat))
        .map(|(i, _)| i)
        .collect();
    if lat_keep.is_empty() {
        return Err(GridError::EmptySelection { axis: "latitude" });
    }

    let mut lon_keep: Vec<(usize, f64)> = grid
        .lons()
        .iter()
        .enumerate()
        .filter_map(|(i, &lon)| bbox.lon_offset(lon).map(|off| (i, off)))
        .collect();
    if lon_keep.is_empty() {
        return Err(GridError::EmptySelection { axis: "longitude" });
    }
    lon_keep.sort_by(|a, b| a.1.total_cmp(&b.1));

    let order: Vec<usize> = lon_keep.iter().map(|&(i, _)| i).collect();
    let lons: Vec<f64> = lon_keep
        .iter()
        .map(|&(_, off)| bbox.lon_start + off)
        .collect();
    let columns = permute_columns(grid, &order, lons);

    if lat_keep.len() == grid.n_lat() {
        return Ok(columns);
    }

    let n_lon = columns.n_lon();
    let src = columns.values();
    let mut values = Vec::with_capacity(grid.n_time() * lat_keep.len() * n_lon);
    for t in 0..grid.n_time() {
        for &y in &lat_keep {
            let start = (t * grid.n_lat() + y) * n_lon;
            values.extend_from_slice(&src[start..start + n_lon]);
        }
    }
    let lats = lat_keep.iter().map(|&y| grid.lats()[y]).collect();
    Ok(Grid::from_parts(
        lats,
        columns.lons().to_vec(),
        grid.n_time(),
        values,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lon_grid(lons: Vec<f64>) -> Grid {
        let values = lons.clone();
        Grid::new(vec![0.0], lons, 1, values).unwrap()
    }

    #[test]
    fn rejects_inverted_latitudes() {
        assert!(matches!(
            BoundingBox::new(10.0, -10.0, 0.0, 10.0),
            Err(GridError::InvalidBoundingBox { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        assert!(BoundingBox::new(-91.0, 0.0, 0.0, 10.0).is_err());
    }

    #[test]
    fn rejects_nan() {
        assert!(BoundingBox::new(0.0, 10.0, f64::NAN, 10.0).is_err());
    }

    #[test]
    fn accepts_single_latitude_row() {
        assert!(BoundingBox::new(90.0, 90.0, -180.0, 180.0).is_ok());
    }

    #[test]
    fn global_box_is_global() {
        assert!(BoundingBox::global().is_global());
        assert!(BoundingBox::new(-90.0, 90.0, -180.0, 180.0).unwrap().is_global());
        assert!(!BoundingBox::new(-90.0, 90.0, -180.0, 170.0).unwrap().is_global());
    }

    #[test]
    fn antimeridian_detection() {
        assert!(BoundingBox::new(0.0, 1.0, 170.0, -170.0).unwrap().crosses_antimeridian());
        assert!(!BoundingBox::new(0.0, 1.0, -20.0, 40.0).unwrap().crosses_antimeridian());
    }

    #[test]
    fn subset_plain_range() {
        let g = lon_grid(vec![-90.0, -45.0, 0.0, 45.0, 90.0]);
        let bbox = BoundingBox::new(-10.0, 10.0, -45.0, 45.0).unwrap();
        let s = subset(&g, &bbox).unwrap();
        assert_eq!(s.lons(), &[-45.0, 0.0, 45.0]);
        assert_eq!(s.values(), &[-45.0, 0.0, 45.0]);
    }

    #[test]
    fn subset_across_antimeridian_is_continuous() {
        let g = lon_grid(vec![-175.0, -165.0, 0.0, 165.0, 175.0]);
        let bbox = BoundingBox::new(-10.0, 10.0, 170.0, -170.0).unwrap();
        let s = subset(&g, &bbox).unwrap();
        assert_eq!(s.lons(), &[175.0, 185.0]);
        assert_eq!(s.values(), &[175.0, -175.0]);
    }

    #[test]
    fn subset_accepts_zero_to_360_box() {
        let g = lon_grid(vec![-90.0, 0.0, 90.0]);
        let bbox = BoundingBox::new(-10.0, 10.0, 0.0, 360.0).unwrap();
        let s = subset(&g, &bbox).unwrap();
        assert_eq!(s.n_lon(), 3);
    }

    #[test]
    fn subset_latitudes() {
        let g = Grid::new(
            vec![-60.0, -30.0, 0.0, 30.0, 60.0],
            vec![0.0],
            1,
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
        )
        .unwrap();
        let bbox = BoundingBox::new(-30.0, 30.0, -180.0, 180.0).unwrap();
        let s = subset(&g, &bbox).unwrap();
        assert_eq!(s.lats(), &[-30.0, 0.0, 30.0]);
        assert_eq!(s.values(), &[2.0, 3.0, 4.0]);
    }

    #[test]
    fn subset_empty_latitude() {
        let g = lon_grid(vec![0.0]);
        let bbox = BoundingBox::new(10.0, 20.0, -180.0, 180.0).unwrap();
        assert_eq!(
            subset(&g, &bbox).unwrap_err(),
            GridError::EmptySelection { axis: "latitude" }
        );
    }

    #[test]
    fn subset_empty_longitude() {
        let g = lon_grid(vec![0.0, 90.0]);
        let bbox = BoundingBox::new(-10.0, 10.0, 10.0, 20.0).unwrap();
        assert_eq!(
            subset(&g, &bbox).unwrap_err(),
            GridError::EmptySelection { axis: "longitude" }
        );
    }

    #[test]
    fn describe_region() {
        assert_eq!(BoundingBox::global().describe(), "Region: Global");
        let bbox = BoundingBox::new(-30.0, 30.0, 0.0, 90.0).unwrap();
        assert_eq!(bbox.describe(), "Region: -30°-30°N, 0°-90°E");
        let wrapped = BoundingBox::new(40.0, 60.0, 170.0, -170.0).unwrap();
        assert_eq!(
            wrapped.describe(),
            "Region: 40°-60°N, 170°--170°E (across 180°)"
        );
    }
}
