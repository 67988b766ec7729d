//! The icon handed to a web map: markup plus the layout values a Leaflet
//! `divIcon` needs.

use glam::DVec2;
use serde::Serialize;

use crate::errors::IconError;
use crate::render::{self, defaults, geometry::Metrics};
use crate::types::{AnchorKind, BodyMetric, HeadMetric};

/// Shape and style of a vector icon.
///
/// The defaults draw a black arrow with an 8x10 head and a 2px shaft, pinned
/// by its tail, with the `empty` class name.
#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    pub head: HeadMetric,
    pub body: BodyMetric,
    /// Fill color, any CSS color
    pub color: String,
    pub border_width: f64,
    /// Stroke color; the fill color when `None`
    pub border_color: Option<String>,
    pub anchor: AnchorKind,
    pub popup_anchor: Option<(f64, f64)>,
    pub class_name: String,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            head: defaults::HEAD,
            body: defaults::BODY,
            color: defaults::COLOR.to_string(),
            border_width: defaults::BORDER_WIDTH,
            border_color: None,
            anchor: AnchorKind::default(),
            popup_anchor: None,
            class_name: defaults::CLASS_NAME.to_string(),
        }
    }
}

impl IconStyle {
    pub fn with_head(mut self, head: HeadMetric) -> Self {
        self.head = head;
        self
    }

    pub fn with_body(mut self, body: BodyMetric) -> Self {
        self.body = body;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_border(mut self, width: f64, color: impl Into<String>) -> Self {
        self.border_width = width;
        self.border_color = Some(color.into());
        self
    }

    pub fn with_border_width(mut self, width: f64) -> Self {
        self.border_width = width;
        self
    }

    pub fn with_anchor(mut self, anchor: AnchorKind) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the anchor from its token (`tail`, `mid` or `head`).
    pub fn with_anchor_token(self, token: &str) -> Result<Self, IconError> {
        Ok(self.with_anchor(token.parse()?))
    }

    pub fn with_popup_anchor(mut self, x: f64, y: f64) -> Self {
        self.popup_anchor = Some((x, y));
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Effective stroke color.
    pub fn border_color(&self) -> &str {
        self.border_color.as_deref().unwrap_or(&self.color)
    }
}

/// An arrow-shaped marker icon, ready to hand to a map library.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorIcon {
    html: String,
    metrics: Metrics,
    icon_size: (f64, f64),
    icon_anchor: DVec2,
    popup_anchor: Option<(f64, f64)>,
    class_name: String,
}

impl VectorIcon {
    /// Build an icon for a vector of `length` pixels pointing at `angle`.
    ///
    /// `angle` is in radians, clockwise from the positive latitude axis, so
    /// `0` points north and `PI / 2` points east.
    pub fn new(length: f64, angle: f64, style: &IconStyle) -> Self {
        let metrics = render::resolve(length, angle, style.head, style.body);
        let html = render::render_arrow(&metrics, style);
        Self {
            html,
            icon_size: metrics.size(),
            icon_anchor: metrics.anchor(style.anchor),
            metrics,
            popup_anchor: style.popup_anchor,
            class_name: style.class_name.clone(),
        }
    }

    /// Build an icon from the latitude and longitude components of a vector.
    pub fn from_components(components: [f64; 2], style: &IconStyle) -> Self {
        let [lat, lon] = components;
        Self::new(lon.hypot(lat), lon.atan2(lat), style)
    }

    /// SVG markup of the arrow.
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// `(width, height)` in pixels.
    pub fn icon_size(&self) -> (f64, f64) {
        self.icon_size
    }

    /// Pixel position inside the icon that sits on the marker's location.
    pub fn icon_anchor(&self) -> DVec2 {
        self.icon_anchor
    }

    pub fn popup_anchor(&self) -> Option<(f64, f64)> {
        self.popup_anchor
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Options for Leaflet's `L.divIcon`.
    pub fn div_icon_options(&self) -> DivIconOptions {
        DivIconOptions {
            html: self.html.clone(),
            icon_size: [self.icon_size.0, self.icon_size.1],
            icon_anchor: self.icon_anchor.to_array(),
            popup_anchor: self.popup_anchor.map(|(x, y)| [x, y]),
            class_name: self.class_name.clone(),
        }
    }

    /// The `L.divIcon` options as a JSON object literal.
    pub fn to_js_options(&self) -> Result<String, IconError> {
        Ok(serde_json::to_string(&self.div_icon_options())?)
    }

    /// Hand the icon to a map library's icon constructor.
    pub fn into_host<F: IconFactory>(self, factory: &F) -> F::Icon {
        factory.make_icon(self.div_icon_options())
    }
}

/// Option object of Leaflet's `L.divIcon`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivIconOptions {
    pub html: String,
    pub icon_size: [f64; 2],
    pub icon_anchor: [f64; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popup_anchor: Option<[f64; 2]>,
    pub class_name: String,
}

/// A map library's icon constructor.
pub trait IconFactory {
    type Icon;

    fn make_icon(&self, options: DivIconOptions) -> Self::Icon;
}

impl<T, F> IconFactory for F
where
    F: Fn(DivIconOptions) -> T,
{
    type Icon = T;

    fn make_icon(&self, options: DivIconOptions) -> T {
        self(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn style_defaults() {
        let style = IconStyle::default();
        assert_eq!(style.color, "black");
        assert_eq!(style.border_width, 0.0);
        assert_eq!(style.border_color(), "black");
        assert_eq!(style.anchor, AnchorKind::Tail);
        assert_eq!(style.popup_anchor, None);
        assert_eq!(style.class_name, "empty");
    }

    #[test]
    fn border_color_overrides_fill() {
        let style = IconStyle::default().with_color("red").with_border(1.0, "blue");
        assert_eq!(style.border_color(), "blue");
        let style = IconStyle::default().with_color("red");
        assert_eq!(style.border_color(), "red");
    }

    #[test]
    fn anchor_token_errors_name_the_token() {
        let err = IconStyle::default().with_anchor_token("nose").unwrap_err();
        assert!(err.to_string().contains("nose"));
        let style = IconStyle::default().with_anchor_token("mid").unwrap();
        assert_eq!(style.anchor, AnchorKind::Mid);
    }

    #[test]
    fn layout_for_eastward_arrow() {
        let icon = VectorIcon::new(100.0, FRAC_PI_2, &IconStyle::default());
        assert_eq!(icon.icon_size(), (120.0, 20.0));
        assert_eq!(icon.icon_anchor(), dvec2(10.0, 10.0));
        assert_eq!(icon.class_name(), "empty");
        assert_eq!(icon.popup_anchor(), None);
    }

    #[test]
    fn anchor_kind_moves_the_anchor() {
        let style = IconStyle::default().with_anchor(AnchorKind::Head);
        let icon = VectorIcon::new(100.0, FRAC_PI_2, &style);
        assert_eq!(icon.icon_anchor(), dvec2(110.0, 10.0));
        let style = IconStyle::default().with_anchor(AnchorKind::Mid);
        let icon = VectorIcon::new(100.0, FRAC_PI_2, &style);
        assert_eq!(icon.icon_anchor(), dvec2(60.0, 10.0));
    }

    #[test]
    fn options_serialize_with_leaflet_names() {
        let style = IconStyle::default()
            .with_popup_anchor(0.0, -12.0)
            .with_class_name("wind");
        let icon = VectorIcon::new(100.0, FRAC_PI_2, &style);
        let json: serde_json::Value = serde_json::from_str(&icon.to_js_options().unwrap()).unwrap();
        assert_eq!(json["html"], icon.html());
        assert_eq!(json["iconSize"], serde_json::json!([120.0, 20.0]));
        assert_eq!(json["iconAnchor"], serde_json::json!([10.0, 10.0]));
        assert_eq!(json["popupAnchor"], serde_json::json!([0.0, -12.0]));
        assert_eq!(json["className"], "wind");
    }

    #[test]
    fn options_omit_missing_popup_anchor() {
        let icon = VectorIcon::new(10.0, 0.0, &IconStyle::default());
        let json: serde_json::Value = serde_json::from_str(&icon.to_js_options().unwrap()).unwrap();
        assert!(json.get("popupAnchor").is_none());
    }

    #[test]
    fn closures_are_icon_factories() {
        let icon = VectorIcon::new(30.0, 1.0, &IconStyle::default());
        let expected = icon.div_icon_options();
        let received = icon.into_host(&|options: DivIconOptions| options);
        assert_eq!(received, expected);
    }
}
