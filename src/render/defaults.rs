//! Default metrics and settings (all in pixels)

use crate::types::{BodyMetric, HeadMetric};

pub const HEAD: HeadMetric = HeadMetric::new(8.0, 10.0);
pub const BODY: BodyMetric = BodyMetric::new(2.0);
pub const COLOR: &str = "black";
pub const BORDER_WIDTH: f64 = 0.0;
pub const CLASS_NAME: &str = "empty";
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const SVG_VERSION: &str = "1.1";
/// Significant digits for path coordinates (C's `%.7g`)
pub const PATH_PRECISION: usize = 7;
