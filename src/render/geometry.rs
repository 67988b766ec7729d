//! Geometry of a rotated vector: endpoint, padded bounding box, anchor points.
//!
//! Angles are in radians, clockwise from the positive x axis in screen
//! coordinates (y grows downward). Nothing here validates its inputs; NaN and
//! infinities propagate into every derived value.

use glam::{DVec2, dvec2};

use crate::types::{AnchorKind, BBox};

/// Resolved metrics of a vector of `length` pointing at `angle`, padded by `margin`.
///
/// All derived quantities are computed once in [`Metrics::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    length: f64,
    angle: f64,
    margin: f64,
    /// `(cos, sin)` of the angle
    unit: DVec2,
    /// Tip of the vector relative to its tail
    tip: DVec2,
    bbox: BBox,
}

impl Metrics {
    pub fn new(length: f64, angle: f64, margin: f64) -> Self {
        let unit = dvec2(angle.cos(), angle.sin());
        let tip = unit * length;
        let (x0, width) = padded_extent(tip.x, margin);
        let (y0, height) = padded_extent(tip.y, margin);
        Self {
            length,
            angle,
            margin,
            unit,
            tip,
            bbox: BBox {
                x0,
                y0,
                width,
                height,
            },
        }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn cos(&self) -> f64 {
        self.unit.x
    }

    pub fn sin(&self) -> f64 {
        self.unit.y
    }

    /// Endpoint offset `(length * cos, length * sin)`.
    pub fn tip(&self) -> DVec2 {
        self.tip
    }

    pub fn bbox(&self) -> BBox {
        self.bbox
    }

    /// Pixel dimensions of the icon.
    pub fn size(&self) -> (f64, f64) {
        (self.bbox.width.abs(), self.bbox.height.abs())
    }

    /// Position of the requested point of the vector in box-local coordinates.
    pub fn anchor(&self, kind: AnchorKind) -> DVec2 {
        let tail = dvec2(self.bbox.x0.abs(), self.bbox.y0.abs());
        match kind {
            AnchorKind::Tail => tail,
            AnchorKind::Mid => tail + self.tip / 2.0,
            AnchorKind::Head => tail + self.tip,
        }
    }

    /// Rotate `p` about the origin by the vector's angle.
    pub fn rotate(&self, p: DVec2) -> DVec2 {
        dvec2(
            self.unit.x * p.x - self.unit.y * p.y,
            self.unit.y * p.x + self.unit.x * p.y,
        )
    }
}

/// Near edge and extent of the box along one axis.
///
/// The far edge is rounded away from the tail to whole pixels; the margin is
/// added beyond both the tail and the far edge.
fn padded_extent(offset: f64, margin: f64) -> (f64, f64) {
    let (far, near) = if offset >= 0.0 {
        (offset.ceil(), -margin)
    } else {
        let far = offset.floor();
        (far, far - margin)
    };
    (near, far.abs() + 2.0 * margin)
}
