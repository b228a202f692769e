use crate::{
    config::model::{Config, RotationMode},
    foundation::core::Vec3,
    foundation::math::{centered, seeded_random},
};

/// Seed offset of the random placement offset draws.
const OFFSET_SEED: u64 = 0;
/// Seed offset of the journey path draws.
const JOURNEY_SEED: u64 = 50;
/// Seed offset of the rotation delta draws.
const ROTATION_SEED: u64 = 100;
/// Seed offset of the initial rotation draws.
const INITIAL_ROTATION_SEED: u64 = 200;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Precomputed randomized motion parameters of one item.
pub struct Target {
    /// Offset from the anchor when spread, in pixels.
    pub random_offset: Vec3,
    /// Fixed orientation in degrees, before the phase rotation-amount scale.
    pub initial_rotation: Vec3,
    /// Mid-transition displacement in pixels, applied through the dispersion envelope.
    pub journey_path: Vec3,
    /// Rotation delta in degrees, applied through the dispersion envelope.
    pub rotation: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// The configuration inputs a target set depends on. A change in any of them requires a
/// fresh set.
pub struct TargetKey {
    /// Item count.
    pub num_items: usize,
    /// Seed.
    pub random_seed: u64,
    /// Rotation variation.
    pub rotation_variation: f64,
    /// Positional variation.
    pub positional_variation: f64,
    /// Rotation mode.
    pub rotation_mode: RotationMode,
}

impl TargetKey {
    /// Extract the key from a snapshot.
    pub fn of(cfg: &Config) -> Self {
        Self {
            num_items: cfg.item_count(),
            random_seed: cfg.random_seed,
            rotation_variation: cfg.rotation_variation,
            positional_variation: cfg.positional_variation,
            rotation_mode: cfg.rotation_mode,
        }
    }
}

fn draw(seed: u64, index: usize, offset: u64) -> f64 {
    // Summed in f64 so large seeds (e.g. millisecond timestamps) behave the same as the
    // generator's integer arithmetic as long as they stay below 2^53.
    let base = seed as f64 + (index as f64) * 3.0;
    seeded_random(base + offset as f64)
}

fn draw3(seed: u64, index: usize, offset: u64, scale: Vec3) -> Vec3 {
    Vec3::new(
        centered(draw(seed, index, offset), scale.x),
        centered(draw(seed, index, offset + 1), scale.y),
        centered(draw(seed, index, offset + 2), scale.z),
    )
}

/// Build the target descriptor of item `index`.
pub fn generate_target(cfg: &Config, index: usize) -> Target {
    let seed = cfg.random_seed;
    let pos_scale = cfg.positional_variation / 50.0;
    let rot_scale = cfg.rotation_variation / 50.0;

    let rotation = match cfg.rotation_mode {
        RotationMode::Different => {
            draw3(seed, index, ROTATION_SEED, Vec3::splat(720.0)) * rot_scale
        }
        RotationMode::Same => Vec3::splat(360.0 * rot_scale),
    };

    Target {
        random_offset: draw3(seed, index, OFFSET_SEED, Vec3::new(200.0, 200.0, 150.0)),
        initial_rotation: draw3(seed, index, INITIAL_ROTATION_SEED, Vec3::splat(360.0)),
        journey_path: draw3(seed, index, JOURNEY_SEED, Vec3::new(300.0, 300.0, 200.0))
            * pos_scale,
        rotation,
    }
}

/// Build one target per item, in index order.
pub fn generate_targets(cfg: &Config) -> Vec<Target> {
    (0..cfg.item_count()).map(|i| generate_target(cfg, i)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/targets.rs"]
mod tests;
