//! Offline artifacts built from discrete samples of the continuous animation.
//!
//! - [`sampler`]: evaluates the engine at `N + 1` evenly spaced progress values.
//! - [`css`]: serializes samples as a standalone HTML document driven by CSS keyframes.
//! - [`svg`]: serializes one projected scene as a flat SVG document.

/// HTML/CSS keyframe document.
pub mod css;
/// Evenly spaced evaluation.
pub mod sampler;
/// Flat SVG serialization.
pub mod svg;

use crate::foundation::error::PlaneshiftError;

pub(crate) fn fmt_err(e: std::fmt::Error) -> PlaneshiftError {
    PlaneshiftError::export(format!("format document: {e}"))
}
