use super::*;
use crate::animation::targets::generate_targets;
use crate::foundation::core::{Anchor, Vec2};

fn flat_stack() -> Config {
    let mut c = Config {
        rotation_variation: 0.0,
        positional_variation: 0.0,
        ..Config::default()
    };
    for phase in [&mut c.start, &mut c.end] {
        phase.rotation = Vec3::ZERO;
        phase.position = Anchor::CenterCenter;
    }
    c
}

fn near(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn identity_pose_is_centered_in_container() {
    let c = flat_stack();
    let item = project_item(0, &Pose::default(), &WrapperTransform::default(), &c);
    assert_eq!(
        item.corners,
        [
            Point::new(325.0, 225.0),
            Point::new(475.0, 225.0),
            Point::new(475.0, 375.0),
            Point::new(325.0, 375.0),
        ]
    );
    assert_eq!(item.avg_z, 0.0);
    assert_eq!(item.color, "#C50978");
    assert_eq!(item.opacity, 0.5);
}

#[test]
fn unrotated_stack_paints_in_index_order() {
    let c = flat_stack();
    let targets = generate_targets(&c);
    for p in [0.0, 0.5, 1.0] {
        let scene = project_scene(&c, &targets, p);
        let order: Vec<usize> = scene.items.iter().map(|i| i.index).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
        for item in &scene.items {
            assert!(near(item.avg_z, item.index as f64 * 25.0));
        }
    }
}

#[test]
fn equal_depths_keep_index_order() {
    let mut c = flat_stack();
    c.start.stack_gap = 0.0;
    c.end.stack_gap = 0.0;
    let targets = generate_targets(&c);
    let scene = project_scene(&c, &targets, 0.3);
    let order: Vec<usize> = scene.items.iter().map(|i| i.index).collect();
    assert_eq!(order, vec![0, 1, 2, 3, 4]);
}

#[test]
fn wrapper_rotates_about_its_origin_depth() {
    let c = flat_stack();
    let pose = Pose {
        position: Vec3::new(0.0, 0.0, 100.0),
        rotation: Vec3::ZERO,
    };
    let wrapper = WrapperTransform {
        translation: Vec2::ZERO,
        rotation: Vec3::new(0.0, 180.0, 0.0),
        origin_z: 50.0,
        grouped: true,
    };
    let (corners, avg_z) = transform_corners(&pose, &wrapper, c.item_size());
    assert!(near(avg_z, 0.0));
    // a half turn about Y mirrors x
    assert!(near(corners[0].x, 75.0));
    assert!(near(corners[1].x, -75.0));
}

#[test]
fn wrapper_translation_moves_every_corner() {
    let c = flat_stack();
    let wrapper = WrapperTransform {
        translation: Vec2::new(-100.0, 40.0),
        ..WrapperTransform::default()
    };
    let item = project_item(0, &Pose::default(), &wrapper, &c);
    assert_eq!(item.corners[0], Point::new(225.0, 265.0));
}

#[test]
fn outline_is_a_closed_quad() {
    let c = flat_stack();
    let item = project_item(0, &Pose::default(), &WrapperTransform::default(), &c);
    let path = item.outline();
    let els = path.elements();
    assert_eq!(els.len(), 5);
    assert_eq!(els[0], kurbo::PathEl::MoveTo(item.corners[0]));
    assert_eq!(els[3], kurbo::PathEl::LineTo(item.corners[3]));
    assert_eq!(els[4], kurbo::PathEl::ClosePath);
}

#[test]
fn projected_scene_carries_progress_and_dims() {
    let c = Config::default();
    let targets = generate_targets(&c);
    let scene = project_scene(&c, &targets, 0.75);
    assert_eq!(scene.progress, 0.75);
    assert_eq!(scene.dims, c.container);
    assert_eq!(scene.items.len(), c.num_items);
}
