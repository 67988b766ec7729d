//! Arrow-shaped marker icons for web maps.
//!
//! A [`VectorIcon`] draws a vector of a given pixel length and direction as an
//! SVG arrow, and computes the icon size and anchor a map library needs to pin
//! it on a coordinate. Positioning the marker itself is left to the caller.
//!
//! ```
//! use std::f64::consts::FRAC_PI_2;
//! use vector_icon::{IconStyle, VectorIcon};
//!
//! // 100px pointing east, pinned by its tail
//! let icon = VectorIcon::new(100.0, FRAC_PI_2, &IconStyle::default());
//! assert_eq!(icon.icon_size(), (120.0, 20.0));
//! assert!(icon.html().starts_with("<svg"));
//! ```

pub mod errors;
pub mod icon;
mod log;
pub mod render;
pub mod types;

pub use errors::IconError;
pub use icon::{DivIconOptions, IconFactory, IconStyle, VectorIcon};
pub use render::geometry::Metrics;
pub use types::{AnchorKind, BBox, BodyMetric, HeadMetric};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Icon for a vector of `length` pixels at `angle`, with the default style.
pub fn vector_icon(length: f64, angle: f64) -> VectorIcon {
    VectorIcon::new(length, angle, &IconStyle::default())
}
