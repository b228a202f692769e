use super::*;
use crate::foundation::core::Anchor;

#[test]
fn stacked_group_blends_anchor_and_angles() {
    let mut c = Config::default();
    c.end.rotation = Vec3::new(-45.0, 90.0, 0.0);
    let w = evaluate_wrapper(0.5, &c);
    assert!(w.grouped);
    // top-left (-280,-210) to bottom-right (280,210)
    assert_eq!(w.translation, Vec2::new(0.0, 0.0));
    assert_eq!(w.rotation, Vec3::new(0.0, 45.0, 22.5));
    assert_eq!(w.origin_z, 50.0);
}

#[test]
fn endpoints_match_phase_parameters() {
    let c = Config::default();
    let w0 = evaluate_wrapper(0.0, &c);
    assert_eq!(w0.translation, Anchor::TopLeft.coords(c.container));
    assert_eq!(w0.rotation, c.start.rotation);
    let w1 = evaluate_wrapper(1.0, &c);
    assert_eq!(w1.translation, Anchor::BottomRight.coords(c.container));
    assert_eq!(w1.rotation, c.end.rotation);
}

#[test]
fn spread_layouts_carry_no_shared_translation() {
    let mut c = Config::default();
    c.start.stacked = false;
    c.end.stacked = false;
    for p in [0.0, 0.3, 1.0] {
        let w = evaluate_wrapper(p, &c);
        assert!(!w.grouped);
        assert_eq!(w.translation, Vec2::ZERO);
        assert!(!w.has_rotation());
        assert_eq!(w.origin_z, 0.0);
    }
}

#[test]
fn return_to_start_holds_start_values() {
    let mut c = Config::default();
    c.return_to_start = true;
    c.end.rotation = Vec3::new(10.0, 20.0, 30.0);
    c.end.stack_gap = 100.0;
    for p in [0.0, 0.4, 1.0] {
        let w = evaluate_wrapper(p, &c);
        assert_eq!(w.rotation, c.start.rotation);
        assert_eq!(w.translation, Anchor::TopLeft.coords(c.container));
        assert_eq!(w.origin_z, 50.0);
    }
}

#[test]
fn return_to_start_from_spread_is_ungrouped() {
    let mut c = Config::default();
    c.return_to_start = true;
    c.start.stacked = false;
    let w = evaluate_wrapper(0.5, &c);
    assert!(!w.grouped);
    assert_eq!(w.rotation, Vec3::ZERO);
}

#[test]
fn origin_depth_blends_between_stack_centers() {
    let mut c = Config::default();
    c.end.stacked = false;
    let w = evaluate_wrapper(0.25, &c);
    assert!(w.grouped);
    assert_eq!(w.origin_z, 37.5);
}
