//! Builder for the arrow outline as SVG path data.
//!
//! The outline is a closed polygon described by one absolute move followed by
//! relative line segments. Each segment is an offset from the previous vertex
//! in the unrotated arrow frame; rotation is applied to every offset on its own,
//! never to accumulated absolute points.
//!
//! ```text
//!            5
//!            | \
//! @-----<----6  \
//! |              \
//! |               4
//! |              /
//! 1---->-----2  /
//!            | /
//!            3
//! ```

use glam::{DVec2, dvec2};

use super::geometry::Metrics;
use super::svg::fmt_num;
use crate::types::{BodyMetric, HeadMetric};

/// A single path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// `M x y`
    MoveTo(DVec2),
    /// `l dx dy`
    LineBy(DVec2),
    /// `Z`
    Close,
}

/// Accumulates path commands and renders them as a `d` attribute value.
#[derive(Debug, Default, Clone)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, p: DVec2) -> Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn line_by(mut self, d: DVec2) -> Self {
        self.commands.push(PathCommand::LineBy(d));
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Render as path data, numbers formatted with `precision` significant digits.
    pub fn to_data(&self, precision: usize) -> String {
        let mut parts = Vec::with_capacity(self.commands.len());
        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) => parts.push(format!(
                    "M {} {}",
                    fmt_num(p.x, precision),
                    fmt_num(p.y, precision)
                )),
                PathCommand::LineBy(d) => parts.push(format!(
                    "l {} {}",
                    fmt_num(d.x, precision),
                    fmt_num(d.y, precision)
                )),
                PathCommand::Close => parts.push("Z".to_string()),
            }
        }
        parts.join(" ")
    }
}

/// Unrotated outline of the arrow: the starting point followed by the six
/// segment offsets, tail on the origin and pointing along +x.
pub fn arrow_outline(length: f64, head: HeadMetric, body: BodyMetric) -> [DVec2; 7] {
    let step_out = (head.width - body.width) / 2.0;
    [
        dvec2(0.0, -body.width / 2.0),
        dvec2(0.0, body.width),
        dvec2((length - head.length).max(0.0), 0.0),
        dvec2(0.0, step_out),
        dvec2(head.length, -head.width / 2.0),
        dvec2(-head.length, -head.width / 2.0),
        dvec2(0.0, step_out),
    ]
}

/// Build the closed arrow path oriented by `metrics`.
pub fn arrow_path(metrics: &Metrics, head: HeadMetric, body: BodyMetric) -> PathBuilder {
    let [start, segments @ ..] = arrow_outline(metrics.length(), head, body);
    segments
        .iter()
        .fold(PathBuilder::new().move_to(metrics.rotate(start)), |path, d| {
            path.line_by(metrics.rotate(*d))
        })
        .close()
}
