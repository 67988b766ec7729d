//! Value types describing the arrow shape and where it is pinned.

use std::fmt;
use std::str::FromStr;

use crate::errors::IconError;
use crate::render::defaults;

/// Metric of the arrowhead triangle, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadMetric {
    /// Width of the head's base
    pub width: f64,
    /// Length from the base to the tip
    pub length: f64,
}

impl HeadMetric {
    /// Create a head metric from its base width and its length
    pub const fn new(width: f64, length: f64) -> Self {
        Self { width, length }
    }
}

impl Default for HeadMetric {
    fn default() -> Self {
        defaults::HEAD
    }
}

/// Metric of the shaft rectangle, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyMetric {
    /// Width of the shaft
    pub width: f64,
}

impl BodyMetric {
    /// Create a body metric from the shaft width
    pub const fn new(width: f64) -> Self {
        Self { width }
    }
}

impl Default for BodyMetric {
    fn default() -> Self {
        defaults::BODY
    }
}

/// Which point of the arrow sits on the marker's geographic position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnchorKind {
    /// Origin of the vector
    #[default]
    Tail,
    /// Midpoint between tail and tip
    Mid,
    /// Tip of the vector
    Head,
}

impl AnchorKind {
    /// Every anchor kind, tail first
    pub const ALL: [AnchorKind; 3] = [AnchorKind::Tail, AnchorKind::Mid, AnchorKind::Head];

    /// Token accepted by `FromStr`
    pub fn as_str(self) -> &'static str {
        match self {
            AnchorKind::Tail => "tail",
            AnchorKind::Mid => "mid",
            AnchorKind::Head => "head",
        }
    }
}

impl fmt::Display for AnchorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnchorKind {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tail" => Ok(AnchorKind::Tail),
            "mid" => Ok(AnchorKind::Mid),
            "head" => Ok(AnchorKind::Head),
            other => Err(IconError::InvalidAnchor {
                value: other.to_string(),
            }),
        }
    }
}

/// Padded box around the rotated arrow, in icon pixels.
///
/// `(x0, y0)` is the top-left corner relative to the vector's tail and is
/// never positive; `width` and `height` always include the margin on both sides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub x0: f64,
    pub y0: f64,
    pub width: f64,
    pub height: f64,
}

impl BBox {
    /// Whether `(x, y)` lies inside the box, edges included.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x0 && x <= self.x0 + self.width && y >= self.y0 && y <= self.y0 + self.height
    }
}
