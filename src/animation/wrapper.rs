use crate::{
    config::model::Config,
    foundation::core::{Vec2, Vec3},
    transform::linear::lerp,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Group-level transform applied on top of every item transform.
pub struct WrapperTransform {
    /// Shared 2D translation in pixels; zero unless grouped.
    pub translation: Vec2,
    /// Shared `rotateX/Y/Z` angles in degrees; zero unless grouped.
    pub rotation: Vec3,
    /// Depth of the rotation origin (the stack's midpoint), in pixels.
    pub origin_z: f64,
    /// Whether items move inside a stacked group. Ungrouped layouts fold the anchor into
    /// every item position instead.
    pub grouped: bool,
}

impl WrapperTransform {
    /// True when the wrapper rotates its contents.
    pub fn has_rotation(&self) -> bool {
        !self.rotation.is_zero()
    }
}

/// Evaluate the shared group transform at `progress`.
pub fn evaluate_wrapper(progress: f64, cfg: &Config) -> WrapperTransform {
    let n = cfg.item_count();
    let start_center = cfg.start.center_z(n);
    let origin_z = if cfg.return_to_start {
        start_center
    } else {
        lerp(start_center, cfg.end.center_z(n), progress)
    };

    let grouped = cfg.is_grouped();
    if !grouped {
        return WrapperTransform {
            translation: Vec2::ZERO,
            rotation: Vec3::ZERO,
            origin_z,
            grouped,
        };
    }

    let end = cfg.effective_end();
    let translation = lerp(
        cfg.start.position.coords(cfg.container),
        end.position.coords(cfg.container),
        progress,
    );
    let rotation = if cfg.return_to_start {
        cfg.start.rotation
    } else {
        lerp(cfg.start.rotation, cfg.end.rotation, progress)
    };

    WrapperTransform {
        translation,
        rotation,
        origin_z,
        grouped,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/wrapper.rs"]
mod tests;
