//! Section stack walkthrough.
//!
//! Run with: `cargo run -p lamina --example section_stack`

use lamina::{
    Color, GeometryEvent, PanelSection, Rect, Section, SectionViewer,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let mut viewer = SectionViewer::new(3);

    let header = PanelSection::new("header");
    let body = PanelSection::new("body");
    let footer = PanelSection::new("footer");
    let footer_id = footer.id();

    viewer.add(header).unwrap();
    viewer.add(body).unwrap();
    viewer.add(footer).unwrap();

    // Capacity reached: the overflow section comes straight back.
    if let Err(rejected) = viewer.add(PanelSection::new("overflow")) {
        println!("rejected: {rejected}");
    }

    viewer.move_to(0, footer_id).unwrap();
    viewer.set_background(Color::rgb8(30, 30, 46));
    viewer.handle_geometry(GeometryEvent::Resized {
        bounds: Rect::new(0.0, 0.0, 800.0, 600.0),
    });

    for (index, section) in viewer.container().iter().enumerate() {
        println!("{index}: {}", section.title());
    }
}
