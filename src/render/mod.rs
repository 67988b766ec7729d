//! Arrow rendering: angle convention, margin, outline and markup.

pub mod defaults;
pub mod geometry;
pub mod path_builder;
pub mod svg;

use std::f64::consts::FRAC_PI_2;

use crate::icon::IconStyle;
use crate::log::{debug, warn};
use crate::types::{BodyMetric, HeadMetric};

use geometry::Metrics;
use path_builder::arrow_path;
use svg::{Paint, render_svg};

/// Padding around the arrow's box: the largest of the shape metrics.
pub fn margin(head: HeadMetric, body: BodyMetric) -> f64 {
    head.length.max(head.width).max(body.width)
}

/// Resolve the metrics of an arrow of `length` at `angle`.
///
/// `angle` is clockwise from the positive vertical (latitude) axis; the
/// returned metrics use the horizontal axis, a quarter turn earlier.
pub fn resolve(length: f64, angle: f64, head: HeadMetric, body: BodyMetric) -> Metrics {
    Metrics::new(length, angle - FRAC_PI_2, margin(head, body))
}

/// Render the SVG markup for an arrow resolved into `metrics`.
pub fn render_arrow(metrics: &Metrics, style: &IconStyle) -> String {
    let length = metrics.length();
    let path = arrow_path(metrics, style.head, style.body);

    // A head longer than the vector is drawn at full size and scaled down
    let scale = if style.head.length < length {
        None
    } else {
        let k = length / style.head.length;
        if !k.is_finite() {
            warn!(
                length,
                head_length = style.head.length,
                "arrow scale is not finite"
            );
        }
        Some(k)
    };

    let bbox = metrics.bbox();
    debug!(
        length,
        angle = metrics.angle(),
        margin = metrics.margin(),
        ?bbox,
        ?scale,
        "rendering arrow"
    );

    let paint = Paint {
        fill: &style.color,
        stroke: style.border_color(),
        stroke_width: style.border_width,
    };
    render_svg(
        bbox,
        paint,
        &path.to_data(defaults::PATH_PRECISION),
        scale,
    )
}
