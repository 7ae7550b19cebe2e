//! Heading arithmetic in compass degrees (0 = North, clockwise).

use crate::types::Position;

/// Wrap any finite angle into `[0, 360)`.
pub fn normalize_heading(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Whether `deg` is a valid heading, i.e. lies in `[0, 360)`.
pub fn is_valid_heading(deg: f64) -> bool {
    (0.0..360.0).contains(&deg)
}

/// Signed shortest rotation from `from` to `to`, in `(-180, 180]`.
/// Positive means clockwise (turn right).
pub fn signed_heading_diff(from: f64, to: f64) -> f64 {
    let diff = (to - from).rem_euclid(360.0);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}

/// Compass bearing from one position to another, in `[0, 360)`.
/// Returns 0 when the positions coincide horizontally.
pub fn bearing_deg(from: &Position, to: &Position) -> f64 {
    let delta = to.planar() - from.planar();
    if delta.length_squared() == 0.0 {
        return 0.0;
    }
    normalize_heading(delta.x.atan2(delta.y).to_degrees())
}
