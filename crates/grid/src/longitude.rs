//! Longitude folding into the canonical `[-180, 180)` range.

use crate::grid::Grid;

/// Folds a longitude in degrees into `[-180, 180)`.
///
/// `[180, 360)` maps onto `[-180, 0)`; values already in range are unchanged.
pub fn wrap_longitude(lon: f64) -> f64 {
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 180.0 { wrapped - 360.0 } else { wrapped }
}

/// Returns a copy of `grid` with longitudes folded into `[-180, 180)` and the
/// longitude axis sorted ascending.
///
/// Values move with their columns. When folding produces the same meridian
/// twice (e.g. a cyclic `0`/`360` pair) only the first column is kept.
pub fn normalize_longitudes(grid: &Grid) -> Grid {
    let folded: Vec<f64> = grid.lons().iter().map(|&l| wrap_longitude(l)).collect();

    let mut order: Vec<usize> = (0..folded.len()).collect();
    order.sort_by(|&a, &b| folded[a].total_cmp(&folded[b]));
    order.dedup_by(|b, a| folded[*a] == folded[*b]);

    let already_canonical = order.len() == folded.len()
        && order.iter().enumerate().all(|(i, &o)| i == o)
        && folded.iter().zip(grid.lons()).all(|(f, l)| f == l);
    if already_canonical {
        return grid.clone();
    }

    let lons: Vec<f64> = order.iter().map(|&i| folded[i]).collect();
    permute_columns(grid, &order, lons)
}

/// Builds a grid whose column `j` is column `order[j]` of `grid`, labelled
/// with `lons[j]`.
pub(crate) fn permute_columns(grid: &Grid, order: &[usize], lons: Vec<f64>) -> Grid {
    let n_lon = grid.n_lon();
    let rows = grid.n_time() * grid.n_lat();
    let src = grid.values();

    let mut values = Vec::with_capacity(rows * order.len());
    for r in 0..rows {
        let row = &src[r * n_lon..(r + 1) * n_lon];
        values.extend(order.iter().map(|&x| row[x]));
    }
    Grid::from_parts(grid.lats().to_vec(), lons, grid.n_time(), values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_basic() {
        assert_eq!(wrap_longitude(0.0), 0.0);
        assert_eq!(wrap_longitude(179.0), 179.0);
        assert_eq!(wrap_longitude(180.0), -180.0);
        assert_eq!(wrap_longitude(270.0), -90.0);
        assert_eq!(wrap_longitude(357.5), -2.5);
        assert_eq!(wrap_longitude(360.0), 0.0);
        assert_eq!(wrap_longitude(-190.0), 170.0);
    }

    #[test]
    fn wrap_stays_in_range_for_tiny_negative() {
        let w = wrap_longitude(-1e-20);
        assert!((-180.0..180.0).contains(&w));
    }

    #[test]
    fn normalize_folds_and_sorts() {
        // 1 time, 1 lat, lons 0, 90, 180, 270 with values equal to the lon
        let g = Grid::new(
            vec![0.0],
            vec![0.0, 90.0, 180.0, 270.0],
            1,
            vec![0.0, 90.0, 180.0, 270.0],
        )
        .unwrap();
        let n = normalize_longitudes(&g);
        assert_eq!(n.lons(), &[-180.0, -90.0, 0.0, 90.0]);
        assert_eq!(n.values(), &[180.0, 270.0, 0.0, 90.0]);
    }

    #[test]
    fn normalize_drops_cyclic_duplicate() {
        let g = Grid::new(vec![0.0], vec![0.0, 180.0, 360.0], 1, vec![1.0, 2.0, 3.0]).unwrap();
        let n = normalize_longitudes(&g);
        assert_eq!(n.lons(), &[-180.0, 0.0]);
        assert_eq!(n.values(), &[2.0, 1.0]);
    }

    #[test]
    fn normalize_keeps_canonical_grid() {
        let g = Grid::new(vec![0.0], vec![-90.0, 0.0, 90.0], 1, vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(normalize_longitudes(&g), g);
    }

    #[test]
    fn normalize_moves_every_row() {
        // 2 times, 2 lats, lons [0, 270]
        let g = Grid::new(
            vec![-10.0, 10.0],
            vec![0.0, 270.0],
            2,
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0],
        )
        .unwrap();
        let n = normalize_longitudes(&g);
        assert_eq!(n.lons(), &[-90.0, 0.0]);
        assert_eq!(n.values(), &[2.0, 1.0, 4.0, 3.0, 6.0, 5.0, 8.0, 7.0]);
    }
}
