use crate::core::types::Number;
use std::f64::consts::TAU;

/// Linear interpolation between two values of the same type
pub trait Lerp<T> {
    /// Interpolates between `a` and `b`, where `t = 0` returns `a` and `t = 1` returns `b`
    fn lerp(a: Self, b: Self, t: T) -> Self;
}

impl Lerp<Number> for Number {
    fn lerp(a: Self, b: Self, t: Number) -> Self { a + (b - a) * t }
}

/// Wraps an angle (in radians) into the range `[0, 2π)`.
///
/// Angles already inside the range are returned untouched.
/// Does not guard against `NaN` or infinite input.
pub fn wrap_angle(theta: Number) -> Number {
    if theta >= TAU || theta < 0. {
        let wrapped = theta % TAU;
        if wrapped < 0. {
            // Adding `TAU` to a tiny negative number can round up to exactly `TAU`
            (wrapped + TAU) % TAU
        } else {
            wrapped
        }
    } else {
        theta
    }
}
