//! Orthographic reprojection of the layered 3D scene into a flat, depth-sorted 2D scene.
//!
//! Every item is a square centered on its own origin. Its corners go through the item frame
//! (rotation Z→Y→X, then translation), the wrapper frame (rotation about the wrapper's origin
//! depth, then translation) and finally the container frame (depth dropped, origin moved to
//! the container's top-left). Items are ordered by the mean depth of their corners,
//! ascending: the farthest item comes first and should be painted first.

use kurbo::BezPath;

use crate::{
    animation::frame::{FrameState, evaluate_frame},
    animation::pose::Pose,
    animation::targets::Target,
    animation::wrapper::WrapperTransform,
    config::model::Config,
    foundation::core::{Dims, Point, Vec3},
    transform::rotate::rotate_zyx,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One item after projection.
pub struct ProjectedItem {
    /// Item index in the configuration.
    pub index: usize,
    /// Corners in container pixels: top-left, top-right, bottom-right, bottom-left of the
    /// untransformed square.
    pub corners: [Point; 4],
    /// Mean corner depth after all transforms; the sort key.
    pub avg_z: f64,
    /// Fill color.
    pub color: String,
    /// Fill opacity.
    pub opacity: f64,
}

impl ProjectedItem {
    /// Closed polygon through the projected corners.
    pub fn outline(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.corners[0]);
        for c in &self.corners[1..] {
            path.line_to(*c);
        }
        path.close_path();
        path
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A flat scene, items in back-to-front paint order.
pub struct ProjectedScene {
    /// Progress the scene was evaluated at.
    pub progress: f64,
    /// Container size the corners are expressed in.
    pub dims: Dims,
    /// Items, farthest first.
    pub items: Vec<ProjectedItem>,
}

/// Corner positions and mean depth of one item, before container offsetting.
pub fn transform_corners(
    pose: &Pose,
    wrapper: &WrapperTransform,
    item_size: f64,
) -> ([Vec3; 4], f64) {
    let h = item_size / 2.0;
    let local = [
        Vec3::new(-h, -h, 0.0),
        Vec3::new(h, -h, 0.0),
        Vec3::new(h, h, 0.0),
        Vec3::new(-h, h, 0.0),
    ];
    let origin = Vec3::new(0.0, 0.0, wrapper.origin_z);
    let shift = Vec3::from_xy(wrapper.translation);

    let corners = local.map(|c| {
        let mut p = rotate_zyx(c, pose.rotation) + pose.position;
        if wrapper.has_rotation() {
            p = rotate_zyx(p - origin, wrapper.rotation) + origin;
        }
        p + shift
    });
    let avg_z = corners.iter().map(|c| c.z).sum::<f64>() / 4.0;
    (corners, avg_z)
}

/// Project item `index` into container pixel space.
pub fn project_item(
    index: usize,
    pose: &Pose,
    wrapper: &WrapperTransform,
    cfg: &Config,
) -> ProjectedItem {
    let (corners, avg_z) = transform_corners(pose, wrapper, cfg.item_size());
    let center = cfg.container.center();
    ProjectedItem {
        index,
        corners: corners.map(|c| Point::new(c.x + center.x, c.y + center.y)),
        avg_z,
        color: cfg.item_color(index).to_owned(),
        opacity: cfg.item_opacity(index),
    }
}

/// Project an evaluated frame and sort it back to front. Ties keep index order.
pub fn project_frame(frame: &FrameState, cfg: &Config) -> ProjectedScene {
    let mut items: Vec<ProjectedItem> = frame
        .poses
        .iter()
        .enumerate()
        .map(|(index, pose)| project_item(index, pose, &frame.wrapper, cfg))
        .collect();
    items.sort_by(|a, b| a.avg_z.total_cmp(&b.avg_z));

    ProjectedScene {
        progress: frame.progress,
        dims: cfg.container,
        items,
    }
}

#[tracing::instrument(level = "debug", skip(cfg, targets))]
/// Evaluate and project the scene at `progress`.
pub fn project_scene(cfg: &Config, targets: &[Target], progress: f64) -> ProjectedScene {
    project_frame(&evaluate_frame(progress, cfg, targets), cfg)
}

#[cfg(test)]
#[path = "../../tests/unit/projection/mod.rs"]
mod tests;
