//! Linear interpolation helpers.

use crate::foundation::core::{Vec2, Vec3};

/// Unclamped linear interpolation. `t` outside `[0, 1]` extrapolates.
pub trait Lerp: Sized {
    /// Blend `a` toward `b` by `t`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Vec3 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec3::new(
            a.x + (b.x - a.x) * t,
            a.y + (b.y - a.y) * t,
            a.z + (b.z - a.z) * t,
        )
    }
}

#[inline]
/// Free-function form of [`Lerp::lerp`].
pub fn lerp<T: Lerp>(a: T, b: T, t: f64) -> T {
    T::lerp(&a, &b, t)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/linear.rs"]
mod tests;
