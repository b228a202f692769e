use crate::{
    animation::pose::{Pose, evaluate_poses},
    animation::targets::Target,
    animation::wrapper::{WrapperTransform, evaluate_wrapper},
    config::model::Config,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Everything a renderer needs for one progress value.
pub struct FrameState {
    /// Progress the frame was evaluated at.
    pub progress: f64,
    /// Shared group transform.
    pub wrapper: WrapperTransform,
    /// One pose per configured item, in index order.
    pub poses: Vec<Pose>,
}

#[tracing::instrument(level = "trace", skip(cfg, targets))]
/// Evaluate the wrapper and every item pose at `progress`.
pub fn evaluate_frame(progress: f64, cfg: &Config, targets: &[Target]) -> FrameState {
    FrameState {
        progress,
        wrapper: evaluate_wrapper(progress, cfg),
        poses: evaluate_poses(progress, cfg, targets),
    }
}
