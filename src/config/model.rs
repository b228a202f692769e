use crate::foundation::core::{Anchor, AspectRatio, Dims, Vec3};
use crate::foundation::error::{PlaneshiftError, PlaneshiftResult};

/// Upper bound on the number of animated items.
pub const MAX_ITEMS: usize = 20;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Immutable snapshot of every animation parameter.
///
/// The control layer owns and mutates configuration; the engine only ever reads a snapshot.
/// Every field has a factory default so partial JSON documents are accepted.
pub struct Config {
    /// Item vocabulary (naming and default styling).
    pub item_kind: ItemKind,
    /// Number of animated items, clamped to `[1, MAX_ITEMS]` by [`Config::normalized`].
    pub num_items: usize,
    /// Per-item CSS colors, index-addressed.
    pub item_colors: Vec<String>,
    /// Per-item opacities in `[0, 1]`, index-addressed.
    pub item_opacities: Vec<f64>,
    /// Container aspect ratio.
    pub aspect_ratio: AspectRatio,
    /// Start phase placement.
    pub start: Phase,
    /// End phase placement; ignored when `return_to_start` is set.
    pub end: Phase,
    /// Collapse the end phase onto the start phase.
    pub return_to_start: bool,
    /// Rotation delta scale (50 = unit).
    pub rotation_variation: f64,
    /// Shared or per-item rotation delta.
    pub rotation_mode: RotationMode,
    /// Journey path scale (50 = unit).
    pub positional_variation: f64,
    /// Seed for target generation.
    pub random_seed: u64,
    /// Live container size in pixels.
    pub container: Dims,
    /// Seconds for one pass from progress 0 to 1.
    pub animation_speed: f64,
    /// Playback semantics.
    pub playback_mode: PlaybackMode,
    /// Export sampling density.
    pub export_quality: ExportQuality,
    /// Frame capture pixel-density multiplier.
    pub export_resolution: CaptureScale,
    /// Current normalized progress.
    pub progress: f64,
    /// Current playback direction.
    pub direction: Direction,
    /// Whether playback is running.
    pub is_playing: bool,
}

impl Default for Config {
    fn default() -> Self {
        let kind = ItemKind::default();
        Self {
            item_kind: kind,
            num_items: 5,
            item_colors: vec![kind.default_color().to_owned(); MAX_ITEMS],
            item_opacities: vec![kind.default_opacity(); MAX_ITEMS],
            aspect_ratio: AspectRatio::default(),
            start: Phase {
                position: Anchor::TopLeft,
                ..Phase::default()
            },
            end: Phase {
                position: Anchor::BottomRight,
                ..Phase::default()
            },
            return_to_start: false,
            rotation_variation: 50.0,
            rotation_mode: RotationMode::Different,
            positional_variation: 100.0,
            random_seed: 0,
            container: Dims::default(),
            animation_speed: 5.0,
            playback_mode: PlaybackMode::Bounce,
            export_quality: ExportQuality::Medium,
            export_resolution: CaptureScale::X2,
            progress: 0.0,
            direction: Direction::Forward,
            is_playing: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Placement parameters for one phase (start or end).
pub struct Phase {
    /// Stack items along depth instead of spreading them around the anchor.
    pub stacked: bool,
    /// Depth gap between consecutive stacked items, in pixels.
    pub stack_gap: f64,
    /// Spread scale for random offsets (50 = unit).
    pub spread: f64,
    /// Share of each item's initial rotation applied, in percent.
    pub rotation_amount: f64,
    /// Group rotation angles in degrees.
    pub rotation: Vec3,
    /// Group anchor cell.
    pub position: Anchor,
}

impl Default for Phase {
    fn default() -> Self {
        Self {
            stacked: true,
            stack_gap: 25.0,
            spread: 50.0,
            rotation_amount: 0.0,
            rotation: Vec3::new(45.0, 0.0, 45.0),
            position: Anchor::CenterCenter,
        }
    }
}

impl Phase {
    /// Depth of the stack's midpoint, or zero when not stacked.
    pub fn center_z(&self, num_items: usize) -> f64 {
        if self.stacked {
            num_items.saturating_sub(1) as f64 * self.stack_gap / 2.0
        } else {
            0.0
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Whether items share one rotation delta or draw their own.
pub enum RotationMode {
    /// One rotation delta for every item.
    Same,
    /// Independent random rotation delta per item.
    #[default]
    Different,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Playback semantics shared by the live scheduler and exported animations.
pub enum PlaybackMode {
    /// Ping-pong between 0 and 1.
    #[default]
    #[serde(alias = "back-and-forth")]
    Bounce,
    /// Wrap from 1 back to 0.
    Loop,
    /// Play to 1 and stop.
    Once,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Export sampling tier.
pub enum ExportQuality {
    /// 25 frames.
    Low,
    /// 50 frames.
    #[default]
    Medium,
    /// 100 frames.
    High,
}

impl ExportQuality {
    /// Number of sampling intervals; `frame_count() + 1` samples are taken.
    pub fn frame_count(self) -> usize {
        match self {
            Self::Low => 25,
            Self::Medium => 50,
            Self::High => 100,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Frame capture pixel-density multiplier.
pub enum CaptureScale {
    /// 1x
    #[serde(rename = "1x")]
    X1,
    /// 2x
    #[default]
    #[serde(rename = "2x")]
    X2,
    /// 3x
    #[serde(rename = "3x")]
    X3,
    /// 4x
    #[serde(rename = "4x")]
    X4,
}

impl CaptureScale {
    /// Integer multiplier.
    pub fn factor(self) -> u32 {
        match self {
            Self::X1 => 1,
            Self::X2 => 2,
            Self::X3 => 3,
            Self::X4 => 4,
        }
    }

    /// Map an integer multiplier; only `1..=4` are valid.
    pub fn from_factor(factor: u32) -> Option<Self> {
        match factor {
            1 => Some(Self::X1),
            2 => Some(Self::X2),
            3 => Some(Self::X3),
            4 => Some(Self::X4),
            _ => None,
        }
    }

    /// Label such as `2x`.
    pub fn label(self) -> String {
        format!("{}x", self.factor())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "i8", into = "i8")]
/// Playback direction, serialized as `1` / `-1`.
pub enum Direction {
    /// Progress increases.
    #[default]
    Forward,
    /// Progress decreases.
    Backward,
}

impl Direction {
    /// `+1.0` or `-1.0`.
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }

    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

impl From<i8> for Direction {
    fn from(value: i8) -> Self {
        if value < 0 {
            Self::Backward
        } else {
            Self::Forward
        }
    }
}

impl From<Direction> for i8 {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Item vocabulary. Both kinds share one engine and differ only in naming and styling.
pub enum ItemKind {
    /// Flat square planes.
    #[default]
    Plane,
    /// Flat square shards.
    Shard,
}

impl ItemKind {
    /// Human-readable singular label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Plane => "Plane",
            Self::Shard => "Shard",
        }
    }

    /// CSS class shared by every item element; also the keyframe-name prefix.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Plane => "plane",
            Self::Shard => "shard",
        }
    }

    /// Name of the `@keyframes` block for item `index`.
    pub fn keyframes_name(self, index: usize) -> String {
        format!("{}{index}Animation", self.class_name())
    }

    /// Title used in exported documents.
    pub fn document_title(self) -> String {
        format!("3D {} Animation", self.label())
    }

    /// Default item color.
    pub fn default_color(self) -> &'static str {
        "#C50978"
    }

    /// Default item opacity.
    pub fn default_opacity(self) -> f64 {
        0.5
    }

    /// Item edge length relative to container width.
    pub fn size_ratio(self) -> f64 {
        0.1875
    }
}

impl Config {
    /// Return a copy with control-layer input silently brought into range: item count
    /// clamped to `[1, MAX_ITEMS]`, color/opacity lists padded to `MAX_ITEMS` with kind
    /// defaults, opacities and progress clamped to `[0, 1]`.
    pub fn normalized(&self) -> Self {
        let mut out = self.clone();
        out.num_items = out.item_count();

        let kind = out.item_kind;
        out.item_colors.truncate(MAX_ITEMS);
        out.item_colors
            .resize(MAX_ITEMS, kind.default_color().to_owned());
        out.item_opacities.truncate(MAX_ITEMS);
        out.item_opacities.resize(MAX_ITEMS, kind.default_opacity());
        for o in &mut out.item_opacities {
            *o = if o.is_finite() { o.clamp(0.0, 1.0) } else { kind.default_opacity() };
        }

        if out.progress.is_finite() {
            out.progress = out.progress.clamp(0.0, 1.0);
        }
        out
    }

    /// Reject malformed snapshots. These are programming errors, not user input errors.
    pub fn validate(&self) -> PlaneshiftResult<()> {
        fn finite(v: f64, field: &str) -> PlaneshiftResult<()> {
            if v.is_finite() {
                Ok(())
            } else {
                Err(PlaneshiftError::validation(format!("{field} must be finite")))
            }
        }

        for (name, phase) in [("start", &self.start), ("end", &self.end)] {
            finite(phase.stack_gap, &format!("{name}.stack_gap"))?;
            finite(phase.spread, &format!("{name}.spread"))?;
            finite(phase.rotation_amount, &format!("{name}.rotation_amount"))?;
            if !phase.rotation.is_finite() {
                return Err(PlaneshiftError::validation(format!(
                    "{name}.rotation must be finite"
                )));
            }
        }
        finite(self.rotation_variation, "rotation_variation")?;
        finite(self.positional_variation, "positional_variation")?;
        finite(self.progress, "progress")?;

        if !self.animation_speed.is_finite() || self.animation_speed <= 0.0 {
            return Err(PlaneshiftError::validation(
                "animation_speed must be finite and > 0",
            ));
        }
        if !(self.container.width.is_finite() && self.container.width > 0.0)
            || !(self.container.height.is_finite() && self.container.height > 0.0)
        {
            return Err(PlaneshiftError::validation(
                "container dimensions must be finite and > 0",
            ));
        }
        if self.item_colors.iter().any(|c| c.trim().is_empty()) {
            return Err(PlaneshiftError::validation("item colors must be non-empty"));
        }
        Ok(())
    }

    /// Item count clamped to `[1, MAX_ITEMS]`. Every engine entry point iterates this, so an
    /// unnormalized snapshot never yields an empty or oversized item set.
    pub fn item_count(&self) -> usize {
        self.num_items.clamp(1, MAX_ITEMS)
    }

    /// Whether items move inside a shared stacked group at any point.
    pub fn is_grouped(&self) -> bool {
        self.start.stacked || (!self.return_to_start && self.end.stacked)
    }

    /// The phase used as the end of the transition.
    pub fn effective_end(&self) -> &Phase {
        if self.return_to_start {
            &self.start
        } else {
            &self.end
        }
    }

    /// Color of item `index`, falling back to the kind default.
    pub fn item_color(&self, index: usize) -> &str {
        self.item_colors
            .get(index)
            .map(String::as_str)
            .unwrap_or(self.item_kind.default_color())
    }

    /// Opacity of item `index`, falling back to the kind default.
    pub fn item_opacity(&self, index: usize) -> f64 {
        self.item_opacities
            .get(index)
            .copied()
            .unwrap_or(self.item_kind.default_opacity())
    }

    /// Edge length of one item in live container pixels.
    pub fn item_size(&self) -> f64 {
        self.container.width * self.item_kind.size_ratio()
    }

    /// Parse a JSON document into a validated, normalized snapshot.
    pub fn from_json(s: &str) -> PlaneshiftResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg.normalized())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
