use crate::{
    animation::frame::{FrameState, evaluate_frame},
    animation::targets::{Target, generate_targets},
    config::model::Config,
    projection::{ProjectedScene, project_frame},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Engine output at `frame_count + 1` evenly spaced progress values, `0` and `1` included.
pub struct SampledAnimation {
    /// Number of sampling intervals.
    pub frame_count: usize,
    /// One frame per sample, `frames[k].progress == k / frame_count`.
    pub frames: Vec<FrameState>,
}

impl SampledAnimation {
    /// Keyframe offset of sample `k` in percent.
    pub fn offset_percent(&self, k: usize) -> f64 {
        k as f64 * 100.0 / self.frame_count as f64
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Depth-sorted flat scenes for every sample.
pub struct ProjectedAnimation {
    /// Number of sampling intervals.
    pub frame_count: usize,
    /// Animation duration of one pass, in seconds.
    pub duration_seconds: f64,
    /// One scene per sample.
    pub scenes: Vec<ProjectedScene>,
}

/// Sample with an existing target set. A `frame_count` of zero is treated as one.
pub fn sample_frames(cfg: &Config, targets: &[Target], frame_count: usize) -> SampledAnimation {
    let n = frame_count.max(1);
    let frames = (0..=n)
        .map(|k| evaluate_frame(k as f64 / n as f64, cfg, targets))
        .collect();
    SampledAnimation {
        frame_count: n,
        frames,
    }
}

#[tracing::instrument(level = "debug", skip(cfg))]
/// Sample with a target set regenerated from `cfg`, so the artifact depends on the
/// configuration alone.
pub fn sample_keyframes(cfg: &Config, frame_count: usize) -> SampledAnimation {
    let targets = generate_targets(cfg);
    sample_frames(cfg, &targets, frame_count)
}

#[tracing::instrument(level = "debug", skip(cfg))]
/// Sample and project every frame.
pub fn sample_projection(cfg: &Config, frame_count: usize) -> ProjectedAnimation {
    let sampled = sample_keyframes(cfg, frame_count);
    ProjectedAnimation {
        frame_count: sampled.frame_count,
        duration_seconds: cfg.animation_speed,
        scenes: sampled
            .frames
            .iter()
            .map(|f| project_frame(f, cfg))
            .collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/sampler.rs"]
mod tests;
