use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::foundation::error::{PlaneshiftError, PlaneshiftResult};

pub use kurbo::{BezPath, Point, Vec2};

/// A 3D vector in container pixels (x right, y down, z toward the viewer) or degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Same value on every axis.
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Lift a 2D vector into the `z = 0` plane.
    pub fn from_xy(v: Vec2) -> Self {
        Self::new(v.x, v.y, 0.0)
    }

    /// Drop the depth axis.
    pub fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// True when every component is exactly zero.
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// True when every component is finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// Container size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dims {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Default for Dims {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Dims {
    /// Preferred container width before viewport constraints.
    pub const BASE_WIDTH: f64 = 800.0;
    /// Vertical space reserved around the container.
    pub const VIEWPORT_MARGIN_Y: f64 = 120.0;
    /// Fraction of viewport width the container may occupy.
    pub const VIEWPORT_FILL_X: f64 = 0.9;

    /// Create dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Container center in pixel coordinates.
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Fit an aspect ratio into a viewport: start at [`Self::BASE_WIDTH`], then shrink to the
    /// available height and width while keeping the ratio.
    pub fn fit_aspect(aspect: AspectRatio, viewport: Dims) -> Self {
        let w = f64::from(aspect.width);
        let h = f64::from(aspect.height);

        let mut width = Self::BASE_WIDTH;
        let mut height = Self::BASE_WIDTH * h / w;

        let max_height = viewport.height - Self::VIEWPORT_MARGIN_Y;
        if height > max_height {
            height = max_height;
            width = height * w / h;
        }

        let max_width = viewport.width * Self::VIEWPORT_FILL_X;
        if width > max_width {
            width = max_width;
            height = width * h / w;
        }

        Self { width, height }
    }

    /// Scale both sides by `factor`, rounding to whole pixels (at least 1).
    pub fn scaled_px(self, factor: u32) -> (u32, u32) {
        let f = f64::from(factor);
        let w = (self.width * f).round().max(1.0) as u32;
        let h = (self.height * f).round().max(1.0) as u32;
        (w, h)
    }
}

/// Integer aspect ratio, serialized as `"W:H"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AspectRatio {
    /// Horizontal part.
    pub width: u32,
    /// Vertical part.
    pub height: u32,
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self {
            width: 4,
            height: 3,
        }
    }
}

impl AspectRatio {
    /// Parse `"W:H"` with both parts > 0.
    pub fn parse(s: &str) -> PlaneshiftResult<Self> {
        let (w, h) = s
            .split_once(':')
            .ok_or_else(|| PlaneshiftError::validation(format!("aspect ratio '{s}' must be W:H")))?;
        let parse_part = |p: &str| {
            p.trim()
                .parse::<u32>()
                .ok()
                .filter(|v| *v > 0)
                .ok_or_else(|| {
                    PlaneshiftError::validation(format!(
                        "aspect ratio '{s}' parts must be positive integers"
                    ))
                })
        };
        Ok(Self {
            width: parse_part(w)?,
            height: parse_part(h)?,
        })
    }

    /// CSS `aspect-ratio` value, e.g. `4 / 3`.
    pub fn to_css(self) -> String {
        format!("{} / {}", self.width, self.height)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl TryFrom<String> for AspectRatio {
    type Error = PlaneshiftError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AspectRatio> for String {
    fn from(value: AspectRatio) -> Self {
        value.to_string()
    }
}

/// One of the nine named grid cells used as a group anchor.
///
/// Unknown names deserialize to [`Anchor::CenterCenter`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Anchor {
    /// `top-left`
    TopLeft,
    /// `top-center`
    TopCenter,
    /// `top-right`
    TopRight,
    /// `center-left`
    CenterLeft,
    /// `center-center`
    #[default]
    CenterCenter,
    /// `center-right`
    CenterRight,
    /// `bottom-left`
    BottomLeft,
    /// `bottom-center`
    BottomCenter,
    /// `bottom-right`
    BottomRight,
}

impl Anchor {
    /// All anchors in row-major grid order.
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::CenterLeft,
        Anchor::CenterCenter,
        Anchor::CenterRight,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
    ];

    /// Resolve a name; unknown names fall back to the center cell.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == name)
            .unwrap_or_default()
    }

    /// Canonical kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
            Self::CenterLeft => "center-left",
            Self::CenterCenter => "center-center",
            Self::CenterRight => "center-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
        }
    }

    /// Cell position as percentages of container width and height.
    pub fn percent(self) -> (f64, f64) {
        let col = match self {
            Self::TopLeft | Self::CenterLeft | Self::BottomLeft => 15.0,
            Self::TopCenter | Self::CenterCenter | Self::BottomCenter => 50.0,
            Self::TopRight | Self::CenterRight | Self::BottomRight => 85.0,
        };
        let row = match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => 15.0,
            Self::CenterLeft | Self::CenterCenter | Self::CenterRight => 50.0,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => 85.0,
        };
        (col, row)
    }

    /// Offset of the anchor from the container center, in pixels.
    pub fn coords(self, dims: Dims) -> Vec2 {
        let (xp, yp) = self.percent();
        Vec2::new(
            (xp / 100.0) * dims.width - dims.width / 2.0,
            (yp / 100.0) * dims.height - dims.height / 2.0,
        )
    }
}

impl From<String> for Anchor {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<Anchor> for String {
    fn from(value: Anchor) -> Self {
        value.name().to_owned()
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
