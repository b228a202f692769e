//! Planeshift is a parametric engine for layered-plane animations that look three-dimensional.
//!
//! A set of flat square items travels between a start layout and an end layout, each either
//! stacked along depth or spread around an anchor, along per-item randomized trajectories.
//! The public API is session-oriented:
//!
//! - Describe the animation with a [`Config`] snapshot
//! - Drive it live through a [`Session`] bound to a [`FrameHost`] and a [`Clock`]
//! - Export a standalone HTML/CSS document, a projected SVG frame, or a PNG capture
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Per-item targets, poses and the shared group transform.
pub mod animation;
/// Still-frame capture backends.
pub mod capture;
/// Configuration snapshot and its enums.
pub mod config;
pub mod export;
/// Wall-clock playback scheduling.
pub mod playback;
pub mod projection;
pub mod session;
/// Interpolation and rotation primitives.
pub mod transform;

pub use crate::foundation::core::{Anchor, AspectRatio, BezPath, Dims, Point, Vec2, Vec3};
pub use crate::foundation::error::{PlaneshiftError, PlaneshiftResult};
pub use crate::foundation::math::seeded_random;

pub use crate::animation::frame::{FrameState, evaluate_frame};
pub use crate::animation::pose::{Pose, evaluate_pose};
pub use crate::animation::targets::{Target, TargetKey, generate_targets};
pub use crate::animation::wrapper::{WrapperTransform, evaluate_wrapper};
pub use crate::capture::backend::{CaptureBackend, CapturedFrame};
pub use crate::capture::raster::SvgRasterBackend;
pub use crate::config::model::{
    CaptureScale, Config, Direction, ExportQuality, ItemKind, MAX_ITEMS, Phase, PlaybackMode,
    RotationMode,
};
pub use crate::export::css::export_html;
pub use crate::export::sampler::{
    ProjectedAnimation, SampledAnimation, sample_keyframes, sample_projection,
};
pub use crate::export::svg::scene_to_svg;
pub use crate::playback::host::{
    Clock, FrameHost, FrameRequest, ManualClock, QueuedFrameHost, SystemClock,
};
pub use crate::playback::scheduler::{PlaybackState, PlaybackTiming, Scheduler, Tick, advance};
pub use crate::projection::{ProjectedItem, ProjectedScene, project_item, project_scene};
pub use crate::session::Session;
