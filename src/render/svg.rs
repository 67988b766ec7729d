//! SVG generation

use super::defaults;
use crate::types::BBox;

/// Paint attributes of the arrow group.
#[derive(Debug, Clone, Copy)]
pub struct Paint<'a> {
    pub fill: &'a str,
    pub stroke: &'a str,
    pub stroke_width: f64,
}

/// Wrap a path's data in a painted group and a root element whose viewBox is `bbox`.
///
/// `scale` adds a `transform="scale(k)"` to the group.
pub fn render_svg(bbox: BBox, paint: Paint<'_>, path_data: &str, scale: Option<f64>) -> String {
    let transform = match scale {
        Some(k) => format!(" transform=\"scale({})\"", fmt_float(k)),
        None => String::new(),
    };
    format!(
        "<svg xmlns=\"{ns}\" version=\"{version}\" viewBox=\"{x0} {y0} {w} {h}\">\
         <g stroke=\"{stroke}\" fill=\"{fill}\" stroke-width=\"{sw}\"{transform}>\
         <path d=\"{path_data}\" /></g></svg>",
        ns = defaults::SVG_NAMESPACE,
        version = defaults::SVG_VERSION,
        x0 = bbox.x0,
        y0 = bbox.y0,
        w = bbox.width,
        h = bbox.height,
        stroke = paint.stroke,
        fill = paint.fill,
        sw = paint.stroke_width,
    )
}

/// Format a number like C's `%.{sig_figs}g`.
///
/// Trailing zeros are trimmed, exponent notation kicks in when the decimal
/// exponent is below -4 or at least `sig_figs`, and negative zero keeps its sign.
pub(crate) fn fmt_num(value: f64, sig_figs: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let sig_figs = sig_figs.max(1);
    // Round once in scientific form to learn the exponent after rounding
    let sci = format!("{:.prec$e}", value, prec = sig_figs - 1);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= sig_figs as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.unsigned_abs())
    } else {
        let decimals = (sig_figs as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.prec$}", value, prec = decimals)).to_string()
    }
}

/// Format a float the way Python's `repr` does.
///
/// Shortest round-trip digits, `.0` kept on whole numbers, exponent notation
/// when the decimal exponent is below -4 or at least 16.
pub(crate) fn fmt_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let sci = format!("{value:e}");
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if value != 0.0 && !(-4..16).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
    } else {
        let fixed = value.to_string();
        if fixed.contains('.') {
            fixed
        } else {
            fixed + ".0"
        }
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_num_integers_and_fractions() {
        assert_eq!(fmt_num(0.0, 7), "0");
        assert_eq!(fmt_num(-0.0, 7), "-0");
        assert_eq!(fmt_num(90.0, 7), "90");
        assert_eq!(fmt_num(-4.0, 7), "-4");
        assert_eq!(fmt_num(0.5, 7), "0.5");
        assert_eq!(fmt_num(1234567.0, 7), "1234567");
        assert_eq!(fmt_num(3.14159265, 7), "3.141593");
        assert_eq!(fmt_num(-0.70710678118, 7), "-0.7071068");
        assert_eq!(fmt_num(0.0001, 7), "0.0001");
    }

    #[test]
    fn fmt_num_exponent_form() {
        assert_eq!(fmt_num(6.123233995736766e-17, 7), "6.123234e-17");
        assert_eq!(fmt_num(-1.2246467991473532e-16, 7), "-1.224647e-16");
        assert_eq!(fmt_num(12345678.0, 7), "1.234568e+07");
        assert_eq!(fmt_num(0.00001, 7), "1e-05");
        assert_eq!(fmt_num(1e100, 7), "1e+100");
    }

    #[test]
    fn fmt_num_rounding_can_bump_the_exponent() {
        assert_eq!(fmt_num(9999999.5, 7), "1e+07");
        assert_eq!(fmt_num(0.000099999999, 7), "0.0001");
    }

    #[test]
    fn fmt_num_non_finite() {
        assert_eq!(fmt_num(f64::NAN, 7), "nan");
        assert_eq!(fmt_num(f64::INFINITY, 7), "inf");
        assert_eq!(fmt_num(f64::NEG_INFINITY, 7), "-inf");
    }

    #[test]
    fn fmt_float_keeps_a_fraction() {
        assert_eq!(fmt_float(0.0), "0.0");
        assert_eq!(fmt_float(-0.0), "-0.0");
        assert_eq!(fmt_float(1.0), "1.0");
        assert_eq!(fmt_float(0.5), "0.5");
        assert_eq!(fmt_float(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(fmt_float(0.0001), "0.0001");
        assert_eq!(fmt_float(1e15), "1000000000000000.0");
    }

    #[test]
    fn fmt_float_exponent_form() {
        assert_eq!(fmt_float(0.00005), "5e-05");
        assert_eq!(fmt_float(1.5e-7), "1.5e-07");
        assert_eq!(fmt_float(1e16), "1e+16");
        assert_eq!(fmt_float(-2.5e20), "-2.5e+20");
        assert_eq!(fmt_float(1e-300), "1e-300");
    }

    #[test]
    fn fmt_float_non_finite() {
        assert_eq!(fmt_float(f64::NAN), "nan");
        assert_eq!(fmt_float(f64::INFINITY), "inf");
        assert_eq!(fmt_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn render_without_scale() {
        let bbox = BBox {
            x0: -10.0,
            y0: -10.0,
            width: 120.0,
            height: 20.0,
        };
        let paint = Paint {
            fill: "red",
            stroke: "blue",
            stroke_width: 1.5,
        };
        let svg = render_svg(bbox, paint, "M 0 0 Z", None);
        assert_eq!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"-10 -10 120 20\">\
             <g stroke=\"blue\" fill=\"red\" stroke-width=\"1.5\"><path d=\"M 0 0 Z\" /></g></svg>"
        );
    }

    #[test]
    fn render_with_scale() {
        let bbox = BBox {
            x0: -20.0,
            y0: -20.0,
            width: 50.0,
            height: 40.0,
        };
        let paint = Paint {
            fill: "black",
            stroke: "black",
            stroke_width: 0.0,
        };
        let svg = render_svg(bbox, paint, "M 0 0 Z", Some(0.5));
        assert!(svg.contains("<g stroke=\"black\" fill=\"black\" stroke-width=\"0\" transform=\"scale(0.5)\">"));
        let svg = render_svg(bbox, paint, "M 0 0 Z", Some(0.0));
        assert!(svg.contains("transform=\"scale(0.0)\""), "{svg}");
    }
}
