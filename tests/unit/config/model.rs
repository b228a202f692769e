use super::*;

#[test]
fn defaults_match_factory_state() {
    let c = Config::default();
    assert_eq!(c.num_items, 5);
    assert_eq!(c.item_colors.len(), MAX_ITEMS);
    assert_eq!(c.item_color(0), "#C50978");
    assert_eq!(c.item_opacity(3), 0.5);
    assert!(c.start.stacked && c.end.stacked);
    assert_eq!(c.start.position, Anchor::TopLeft);
    assert_eq!(c.end.position, Anchor::BottomRight);
    assert_eq!(c.start.rotation, Vec3::new(45.0, 0.0, 45.0));
    assert_eq!(c.playback_mode, PlaybackMode::Bounce);
    assert_eq!(c.export_quality.frame_count(), 50);
    assert_eq!(c.export_resolution.factor(), 2);
    assert_eq!(c.item_size(), 150.0);
    c.validate().unwrap();
}

#[test]
fn item_count_is_clamped_silently() {
    let mut c = Config {
        num_items: 0,
        ..Config::default()
    };
    assert_eq!(c.normalized().num_items, 1);
    c.num_items = 500;
    assert_eq!(c.normalized().num_items, MAX_ITEMS);
}

#[test]
fn normalization_pads_and_clamps_styling() {
    let c = Config {
        item_colors: vec!["red".to_owned()],
        item_opacities: vec![1.5, -1.0, f64::NAN],
        progress: 3.0,
        ..Config::default()
    }
    .normalized();
    assert_eq!(c.item_colors.len(), MAX_ITEMS);
    assert_eq!(c.item_color(0), "red");
    assert_eq!(c.item_color(1), "#C50978");
    assert_eq!(&c.item_opacities[..4], &[1.0, 0.0, 0.5, 0.5]);
    assert_eq!(c.progress, 1.0);
}

#[test]
fn validate_rejects_malformed_snapshots() {
    let bad_speed = Config {
        animation_speed: 0.0,
        ..Config::default()
    };
    assert!(bad_speed.validate().is_err());

    let bad_dims = Config {
        container: Dims::new(0.0, 600.0),
        ..Config::default()
    };
    assert!(bad_dims.validate().is_err());

    let mut bad_gap = Config::default();
    bad_gap.end.stack_gap = f64::INFINITY;
    let err = bad_gap.validate().unwrap_err();
    assert!(err.to_string().contains("end.stack_gap"));
}

#[test]
fn partial_json_uses_defaults_and_legacy_names() {
    let c = Config::from_json(
        r#"{
            "num_items": 3,
            "playback_mode": "back-and-forth",
            "direction": -1,
            "export_resolution": "4x",
            "start": { "stacked": false, "position": "bogus" }
        }"#,
    )
    .unwrap();
    assert_eq!(c.num_items, 3);
    assert_eq!(c.playback_mode, PlaybackMode::Bounce);
    assert_eq!(c.direction, Direction::Backward);
    assert_eq!(c.export_resolution, CaptureScale::X4);
    assert!(!c.start.stacked);
    assert_eq!(c.start.position, Anchor::CenterCenter);
    assert_eq!(c.start.stack_gap, 25.0);
    assert_eq!(c.end.position, Anchor::BottomRight);
}

#[test]
fn config_json_round_trips() {
    let c = Config::default();
    let s = serde_json::to_string(&c).unwrap();
    let back: Config = serde_json::from_str(&s).unwrap();
    assert_eq!(back, c);
}

#[test]
fn grouping_follows_stacked_phases() {
    let mut c = Config::default();
    c.start.stacked = false;
    c.end.stacked = true;
    assert!(c.is_grouped());
    c.return_to_start = true;
    assert!(!c.is_grouped());
    assert_eq!(c.effective_end(), &c.start);
}

#[test]
fn center_z_is_half_stack_depth() {
    let p = Phase::default();
    assert_eq!(p.center_z(5), 50.0);
    assert_eq!(p.center_z(1), 0.0);
    let spread = Phase {
        stacked: false,
        ..Phase::default()
    };
    assert_eq!(spread.center_z(5), 0.0);
}

#[test]
fn item_kind_metadata() {
    assert_eq!(ItemKind::Plane.keyframes_name(3), "plane3Animation");
    assert_eq!(ItemKind::Shard.class_name(), "shard");
    assert_eq!(ItemKind::Shard.document_title(), "3D Shard Animation");
}

#[test]
fn capture_scale_factors() {
    assert_eq!(CaptureScale::from_factor(3), Some(CaptureScale::X3));
    assert_eq!(CaptureScale::from_factor(5), None);
    assert_eq!(CaptureScale::X4.label(), "4x");
}

#[test]
fn direction_flips() {
    assert_eq!(Direction::Forward.flipped(), Direction::Backward);
    assert_eq!(Direction::Backward.sign(), -1.0);
}
