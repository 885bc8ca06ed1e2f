//! Shared angle utilities for chart calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Minimal angular separation between two longitudes, in [0, 180].
pub fn angular_separation(lon_a: f64, lon_b: f64) -> f64 {
    let diff = (normalize_360(lon_a) - normalize_360(lon_b)).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}
