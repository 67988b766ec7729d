//! Print the markup and Leaflet options of a wind-style arrow.
//!
//! Usage: `cargo run --example arrow --features tracing -- [length] [degrees]`

use vector_icon::{AnchorKind, BodyMetric, HeadMetric, IconStyle, VectorIcon};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let length: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(100.0);
    let degrees: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(90.0);

    let style = IconStyle::default()
        .with_head(HeadMetric::new(10.0, 20.0))
        .with_body(BodyMetric::new(5.0))
        .with_color("hsl(30deg, 100%, 50%)")
        .with_border(1.0, "red")
        .with_anchor(AnchorKind::Mid);
    let icon = VectorIcon::new(length, degrees.to_radians(), &style);

    println!("{}", icon.html());
    match icon.to_js_options() {
        Ok(options) => println!("L.divIcon({options})"),
        Err(e) => eprintln!("Error: {}", e),
    }
}
