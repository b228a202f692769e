/// Per-frame bundle of wrapper and poses.
pub mod frame;
/// Item pose at a given progress.
pub mod pose;
/// Seeded per-item motion parameters.
pub mod targets;
/// Shared group transform.
pub mod wrapper;
