pub mod host;
/// Progress advancement and the frame-driven loop.
pub mod scheduler;
