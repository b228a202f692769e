use crate::{
    animation::targets::Target,
    config::model::{Config, Phase},
    foundation::core::Vec3,
    transform::linear::lerp,
    transform::non_linear::dispersion,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Position (pixels, relative to the container center) and rotation (degrees) of one item.
pub struct Pose {
    /// Translation.
    pub position: Vec3,
    /// `rotateX/Y/Z` angles.
    pub rotation: Vec3,
}

/// Where item `index` rests in `phase`.
fn phase_position(phase: &Phase, index: usize, cfg: &Config, target: &Target) -> Vec3 {
    if phase.stacked {
        Vec3::new(0.0, 0.0, index as f64 * phase.stack_gap)
    } else {
        let base = phase.position.coords(cfg.container);
        let spread = phase.spread / 50.0;
        Vec3::new(
            base.x + target.random_offset.x * spread,
            base.y + target.random_offset.y * spread,
            target.random_offset.z * spread,
        )
    }
}

/// Resting orientation of an item in `phase`; stacked items lie flat.
fn phase_initial_rotation(phase: &Phase, target: &Target) -> Vec3 {
    if phase.stacked {
        Vec3::ZERO
    } else {
        target.initial_rotation * (phase.rotation_amount / 100.0)
    }
}

/// Resolved start and end rest positions of item `index`.
pub fn rest_positions(index: usize, cfg: &Config, target: &Target) -> (Vec3, Vec3) {
    let start = phase_position(&cfg.start, index, cfg, target);
    let end = if cfg.return_to_start {
        start
    } else {
        phase_position(&cfg.end, index, cfg, target)
    };
    (start, end)
}

/// Evaluate the pose of item `index` at progress `t`.
///
/// `t` is not clamped: values outside `[0, 1]` extrapolate both the linear blends and the
/// dispersion envelope.
///
/// # Panics
///
/// Panics if `index` is outside `targets`; target sets always cover every configured item.
pub fn evaluate_pose(t: f64, index: usize, cfg: &Config, targets: &[Target]) -> Pose {
    let target = &targets[index];
    let envelope = dispersion(t);

    let (start_pos, end_pos) = rest_positions(index, cfg, target);
    let mut position = lerp(start_pos, end_pos, t);
    if cfg.start.stacked || cfg.end.stacked {
        position = position + target.journey_path * envelope;
    }

    let start_rot = phase_initial_rotation(&cfg.start, target);
    let end_rot = if cfg.return_to_start {
        start_rot
    } else {
        phase_initial_rotation(&cfg.end, target)
    };
    let rotation = lerp(start_rot, end_rot, t) + target.rotation * envelope;

    Pose { position, rotation }
}

/// Evaluate every configured item at progress `t`.
pub fn evaluate_poses(t: f64, cfg: &Config, targets: &[Target]) -> Vec<Pose> {
    (0..cfg.item_count().min(targets.len()))
        .map(|i| evaluate_pose(t, i, cfg, targets))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/pose.rs"]
mod tests;
