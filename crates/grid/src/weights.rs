//! Cosine-latitude area weights.

/// Weights below this are treated as exactly zero.
const WEIGHT_EPSILON: f64 = 1e-12;

/// Area weight of a latitude row, `cos(lat)` with `lat` in degrees.
///
/// `cos(90°)` evaluates to about `6e-17` in floating point; anything below
/// `1e-12` is returned as `0.0` so a polar row carries no weight at all.
pub fn cos_weight(lat: f64) -> f64 {
    let w = lat.to_radians().cos();
    if w < WEIGHT_EPSILON { 0.0 } else { w }
}

/// Area weights for every latitude row.
pub fn cos_weights(lats: &[f64]) -> Vec<f64> {
    lats.iter().map(|&lat| cos_weight(lat)).collect()
}
