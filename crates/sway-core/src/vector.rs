//! Direction vectors and the scalar helpers used to move between them.

use glam::DVec2;

/// Offset from a reference center. Pointer input is roughly in
/// \[-0.5, 0.5\] per axis, orientation input roughly in \[-1, 1\].
pub type DirectionVector = DVec2;

/// Round `value` to `places` decimal digits.
#[inline]
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}

/// Linear interpolation written as `a·(1-e) + b·e` so that `e == 1` lands on `b` exactly.
#[inline]
pub fn lerp(a: f64, b: f64, e: f64) -> f64 {
    a * (1.0 - e) + b * e
}

#[inline]
pub fn lerp_vector(a: DirectionVector, b: DirectionVector, e: f64) -> DirectionVector {
    DVec2::new(lerp(a.x, b.x, e), lerp(a.y, b.y, e))
}

/// Build a vector only when both components are finite.
#[inline]
pub fn finite_vector(x: f64, y: f64) -> Option<DirectionVector> {
    (x.is_finite() && y.is_finite()).then(|| DVec2::new(x, y))
}
