//! Single-axis and composed 3D rotations (degrees, right-handed about each axis with
//! y pointing down, matching CSS `rotateX/Y/Z`).

use crate::foundation::core::Vec3;

/// Rotate `p` about the X axis.
pub fn rotate_x(p: Vec3, deg: f64) -> Vec3 {
    let (sin, cos) = deg.to_radians().sin_cos();
    Vec3::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos)
}

/// Rotate `p` about the Y axis.
pub fn rotate_y(p: Vec3, deg: f64) -> Vec3 {
    let (sin, cos) = deg.to_radians().sin_cos();
    Vec3::new(p.x * cos + p.z * sin, p.y, -p.x * sin + p.z * cos)
}

/// Rotate `p` about the Z axis.
pub fn rotate_z(p: Vec3, deg: f64) -> Vec3 {
    let (sin, cos) = deg.to_radians().sin_cos();
    Vec3::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos, p.z)
}

/// Apply `rotateX(r.x) rotateY(r.y) rotateZ(r.z)`.
///
/// Transform lists compose right to left, so the point is rotated about Z first, then Y,
/// then X.
pub fn rotate_zyx(p: Vec3, r: Vec3) -> Vec3 {
    rotate_x(rotate_y(rotate_z(p, r.z), r.y), r.x)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/rotate.rs"]
mod tests;
