use approx::assert_abs_diff_eq;
use climplot_calendar::{MonthSet, TimePeriod, select_indices};
use climplot_grid::{Averaged, BoundingBox, Grid, GridError, Reduction, average};

const N_TIME: usize = 12 * 21;

/// A global 5°-ish grid on 0..360 longitudes, like raw model output.
fn model_grid(value: impl Fn(usize, f64, f64) -> f64) -> Grid {
    let lats: Vec<f64> = (0..19).map(|i| -90.0 + 10.0 * i as f64).collect();
    let lons: Vec<f64> = (0..36).map(|i| 10.0 * i as f64).collect();
    let mut values = Vec::with_capacity(N_TIME * lats.len() * lons.len());
    for t in 0..N_TIME {
        for &lat in &lats {
            for &lon in &lons {
                values.push(value(t, lat, lon));
            }
        }
    }
    Grid::new(lats, lons, N_TIME, values).unwrap()
}

fn area(result: Averaged) -> climplot_grid::AreaMean {
    match result {
        Averaged::Area(a) => a,
        other => panic!("expected area mean, got {}", other.kind()),
    }
}

#[test]
fn uniform_field_averages_to_its_value_for_any_box() {
    let grid = model_grid(|_, _, _| 5.0);
    let indices = select_indices(TimePeriod::from(0), &MonthSet::new([1]).unwrap(), 10).unwrap();
    let boxes = [
        BoundingBox::global(),
        BoundingBox::new(-20.0, 20.0, -30.0, 60.0).unwrap(),
        BoundingBox::new(50.0, 80.0, 170.0, -170.0).unwrap(),
        BoundingBox::new(-80.0, -60.0, 0.0, 360.0).unwrap(),
    ];
    for bbox in &boxes {
        let a = area(average(&grid, &indices, Some(bbox), Reduction::LatLon).unwrap());
        assert_eq!(a.summary().mean(), 5.0);
        assert_eq!(a.summary().std(), 0.0);
        assert_eq!(a.series().len(), 11);
    }
}

#[test]
fn constant_fields_average_exactly() {
    let indices = select_indices(TimePeriod::from(0), &MonthSet::new([1]).unwrap(), 10).unwrap();
    let lat_ranges = [(-90.0, 90.0), (-20.0, 20.0), (50.0, 80.0), (-85.0, -5.0), (10.0, 10.0)];
    for c in [5.0, 0.1, 288.15, -3.7, 1e-8] {
        let grid = model_grid(|_, _, _| c);
        for (lo, hi) in lat_ranges {
            let bbox = BoundingBox::new(lo, hi, -180.0, 180.0).unwrap();
            let a = area(average(&grid, &indices, Some(&bbox), Reduction::LatLon).unwrap());
            assert_eq!(a.summary().mean(), c, "mean for c={c} lat {lo}..{hi}");
            assert_eq!(a.summary().std(), 0.0, "std for c={c} lat {lo}..{hi}");
            assert!(a.series().iter().all(|&v| v == c));
        }
    }
}

#[test]
fn polar_box_is_degenerate() {
    let grid = model_grid(|_, _, _| 1.0);
    let bbox = BoundingBox::new(90.0, 90.0, -180.0, 180.0).unwrap();
    let err = average(&grid, &[0, 1], Some(&bbox), Reduction::LatLon).unwrap_err();
    assert_eq!(err, GridError::DegenerateWeight { n_lat: 1 });
}

#[test]
fn averaging_is_idempotent() {
    let grid = model_grid(|t, lat, lon| t as f64 + lat.sin() * lon.cos());
    let before = grid.clone();
    let months = MonthSet::new([3, 4]).unwrap();
    let indices = select_indices(TimePeriod::from(1), &months, 10).unwrap();
    let bbox = BoundingBox::new(-40.0, 40.0, 100.0, -100.0).unwrap();

    let first = average(&grid, &indices, Some(&bbox), Reduction::LatLon).unwrap();
    let second = average(&grid, &indices, Some(&bbox), Reduction::LatLon).unwrap();
    assert_eq!(first, second);
    assert_eq!(grid, before);
}

#[test]
fn antimeridian_box_selects_both_sides_in_order() {
    let grid = model_grid(|_, _, lon| lon);
    let bbox = BoundingBox::new(-10.0, 10.0, 160.0, -160.0).unwrap();
    let Averaged::Field(field) = average(&grid, &[0], Some(&bbox), Reduction::None).unwrap()
    else {
        panic!("expected field");
    };
    assert_eq!(field.lons(), &[160.0, 170.0, 180.0, 190.0, 200.0]);
    // values still carry the original 0..360 labels
    assert_eq!(&field.rows()[0], &[160.0, 170.0, 180.0, 190.0, 200.0]);
}

#[test]
fn folded_field_is_sorted_in_canonical_range() {
    let grid = model_grid(|_, _, _| 0.0);
    let Averaged::Field(field) = average(&grid, &[0], None, Reduction::None).unwrap() else {
        panic!("expected field");
    };
    assert_eq!(field.lons()[0], -180.0);
    assert_eq!(*field.lons().last().unwrap(), 170.0);
    assert!(field.lons().windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn zonal_profile_is_plain_longitude_mean() {
    let grid = model_grid(|_, lat, lon| lat + if lon < 180.0 { 1.0 } else { -1.0 });
    let Averaged::Zonal(z) =
        average(&grid, &[0, 12], None, Reduction::LonOnly { time_mean: true }).unwrap()
    else {
        panic!("expected zonal");
    };
    assert_eq!(z.n_time(), 1);
    for (value, lat) in z.values().iter().zip(z.lats()) {
        assert_abs_diff_eq!(*value, *lat, epsilon = 1e-12);
    }
}

#[test]
fn january_series_picks_every_twelfth_step() {
    // value = time index, so each series entry equals its index
    let grid = model_grid(|t, _, _| t as f64);
    let indices = select_indices(TimePeriod::from(0), &MonthSet::new([1]).unwrap(), 10).unwrap();
    assert_eq!(indices, vec![0, 12, 24, 36, 48, 60, 72, 84, 96, 108, 120]);

    let a = area(average(&grid, &indices, None, Reduction::LatLon).unwrap());
    for (v, i) in a.series().iter().zip(&indices) {
        assert_abs_diff_eq!(*v, *i as f64, epsilon = 1e-9);
    }
    assert_abs_diff_eq!(a.summary().mean(), 60.0, epsilon = 1e-9);
}

#[test]
fn out_of_range_index_is_reported() {
    let grid = model_grid(|_, _, _| 0.0);
    let err = average(&grid, &[N_TIME], None, Reduction::LatLon).unwrap_err();
    assert_eq!(
        err,
        GridError::TimeIndexOutOfRange {
            index: N_TIME,
            n_time: N_TIME
        }
    );
}
