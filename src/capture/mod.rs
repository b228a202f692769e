//! Still-frame capture of the projected scene.

/// Backend trait and captured pixels.
pub mod backend;
/// resvg-based CPU backend.
pub mod raster;
