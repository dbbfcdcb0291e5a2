//! Angle canonicalization and unit conversion
//!
//! All orbital math works on canonical angles: degrees in `[0, 360)` or
//! radians in `[0, 2π)`.

use std::f64::consts::PI;

/// Degrees in one full turn
pub const FULL_TURN_DEG: f64 = 360.0;

/// Radians in one full turn
pub const FULL_TURN_RAD: f64 = 2.0 * PI;

/// Normalize an angle in degrees to the canonical range `[0, 360)`.
///
/// Exact multiples of 360 (including 0 itself) map to exactly 0.
pub fn normalize_degrees(angle: f64) -> f64 {
    wrap(angle, FULL_TURN_DEG)
}

/// Normalize an angle in radians to the canonical range `[0, 2π)`.
pub fn normalize_radians(angle: f64) -> f64 {
    wrap(angle, FULL_TURN_RAD)
}

/// Convert degrees to canonical radians in `[0, 2π)`.
pub fn degrees_to_radians(angle_deg: f64) -> f64 {
    normalize_degrees(angle_deg) / 180.0 * PI
}

/// Convert radians to canonical degrees in `[0, 360)`.
pub fn radians_to_degrees(angle_rad: f64) -> f64 {
    normalize_radians(angle_rad) / PI * 180.0
}

fn wrap(angle: f64, period: f64) -> f64 {
    let mut wrapped = angle % period;
    if wrapped < 0.0 {
        wrapped += period;
    }
    // adding the period to a tiny negative remainder can round up to the
    // period itself, which is outside the canonical range
    if wrapped >= period {
        0.0
    } else {
        wrapped
    }
}
