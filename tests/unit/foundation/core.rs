use super::*;

#[test]
fn anchor_coords_are_center_relative() {
    let dims = Dims::new(800.0, 600.0);
    assert_eq!(Anchor::CenterCenter.coords(dims), Vec2::new(0.0, 0.0));
    assert_eq!(Anchor::TopLeft.coords(dims), Vec2::new(-280.0, -210.0));
    assert_eq!(Anchor::BottomRight.coords(dims), Vec2::new(280.0, 210.0));
    assert_eq!(Anchor::TopCenter.coords(dims), Vec2::new(0.0, -210.0));
}

#[test]
fn unknown_anchor_falls_back_to_center() {
    assert_eq!(Anchor::from_name("middle-ish"), Anchor::CenterCenter);
    let a: Anchor = serde_json::from_str("\"nowhere\"").unwrap();
    assert_eq!(a, Anchor::CenterCenter);
}

#[test]
fn anchor_names_survive_json() {
    for a in Anchor::ALL {
        let s = serde_json::to_string(&a).unwrap();
        assert_eq!(s, format!("\"{}\"", a.name()));
        let back: Anchor = serde_json::from_str(&s).unwrap();
        assert_eq!(back, a);
    }
}

#[test]
fn aspect_ratio_parses_and_rejects() {
    let r = AspectRatio::parse("16:9").unwrap();
    assert_eq!((r.width, r.height), (16, 9));
    assert_eq!(r.to_css(), "16 / 9");
    assert!(AspectRatio::parse("16x9").is_err());
    assert!(AspectRatio::parse("0:9").is_err());
    assert!(serde_json::from_str::<AspectRatio>("\"4:\"").is_err());
}

#[test]
fn fit_aspect_prefers_base_width() {
    let d = Dims::fit_aspect(AspectRatio::default(), Dims::new(1920.0, 1080.0));
    assert_eq!(d, Dims::new(800.0, 600.0));
}

#[test]
fn fit_aspect_shrinks_to_viewport_height_then_width() {
    let tall = AspectRatio::parse("9:16").unwrap();
    let d = Dims::fit_aspect(tall, Dims::new(1920.0, 1080.0));
    assert_eq!(d.height, 960.0);
    assert_eq!(d.width, 540.0);

    let narrow = Dims::fit_aspect(AspectRatio::default(), Dims::new(500.0, 1080.0));
    assert_eq!(narrow.width, 450.0);
    assert_eq!(narrow.height, 337.5);
}

#[test]
fn scaled_px_rounds() {
    assert_eq!(Dims::new(800.0, 600.0).scaled_px(2), (1600, 1200));
    assert_eq!(Dims::new(450.5, 337.5).scaled_px(1), (451, 338));
}

#[test]
fn vec3_arithmetic() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::splat(1.0);
    assert_eq!(a + b, Vec3::new(2.0, 3.0, 4.0));
    assert_eq!(a - b, Vec3::new(0.0, 1.0, 2.0));
    assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
    assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
    assert!(Vec3::ZERO.is_zero());
    assert_eq!(a.xy(), Vec2::new(1.0, 2.0));
}
