//! Angle helpers.

use std::f32::consts::{PI, TAU};

/// Normalize an angle into `(-π, π]`.
///
/// # Example
/// ```
/// use seema::core::math::normalize_angle;
/// use std::f32::consts::PI;
///
/// assert!((normalize_angle(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-5);
/// assert_eq!(normalize_angle(-PI), PI);
/// ```
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let mut a = angle % TAU;
    if a > PI {
        a -= TAU;
    } else if a <= -PI {
        a += TAU;
    }
    a
}

/// Signed shortest rotation from `from` to `to`, in `(-π, π]`.
///
/// Positive means counter-clockwise.
#[inline]
pub fn angle_diff(from: f32, to: f32) -> f32 {
    normalize_angle(to - from)
}
