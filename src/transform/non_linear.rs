//! Non-linear progress envelopes.

use std::f64::consts::PI;

#[inline]
/// Dispersion envelope `sin(t·π)`: zero at both ends, peak `1` at `t = 0.5`.
pub fn dispersion(t: f64) -> f64 {
    (t * PI).sin()
}

#[inline]
/// Clamp scalar value to normalized range `[0, 1]`.
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/non_linear.rs"]
mod tests;
