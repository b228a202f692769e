use super::*;

fn close(a: Vec3, b: Vec3) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9 && (a.z - b.z).abs() < 1e-9
}

#[test]
fn quarter_turns_about_each_axis() {
    let x = Vec3::new(1.0, 0.0, 0.0);
    let y = Vec3::new(0.0, 1.0, 0.0);
    assert!(close(rotate_z(x, 90.0), y));
    assert!(close(rotate_x(y, 90.0), Vec3::new(0.0, 0.0, 1.0)));
    assert!(close(rotate_y(x, 90.0), Vec3::new(0.0, 0.0, -1.0)));
}

#[test]
fn zero_rotation_is_identity() {
    let p = Vec3::new(3.0, -4.0, 5.0);
    assert_eq!(rotate_zyx(p, Vec3::ZERO), p);
}

#[test]
fn composition_applies_z_first() {
    // Z then X: (1,0,0) -> (0,1,0) -> (0,0,1).
    let p = rotate_zyx(Vec3::new(1.0, 0.0, 0.0), Vec3::new(90.0, 0.0, 90.0));
    assert!(close(p, Vec3::new(0.0, 0.0, 1.0)));
    // X then Z would leave the point on the Y axis instead.
    let q = rotate_z(rotate_x(Vec3::new(1.0, 0.0, 0.0), 90.0), 90.0);
    assert!(close(q, Vec3::new(0.0, 1.0, 0.0)));
}

#[test]
fn rotation_preserves_length() {
    let p = Vec3::new(75.0, -75.0, 0.0);
    let r = rotate_zyx(p, Vec3::new(33.0, -71.0, 128.0));
    let len = |v: Vec3| (v.x * v.x + v.y * v.y + v.z * v.z).sqrt();
    assert!((len(p) - len(r)).abs() < 1e-9);
}
