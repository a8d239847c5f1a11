//! Example: Building and rendering a styled coach-mark label
//!
//! This example demonstrates configuring a label with chained setters,
//! rendering it to an SVG document, and writing the result to a file.

use callout::{
    InfoLabelBuilder,
    color::Color,
    draw::Icon,
    geometry::Size,
    style::{Dimension, FontEmphasis, Gravity, HorizontalAlign},
    units::Density,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building coach-mark label...\n");

    // A device with a 2x display density: dp values are converted to
    // pixels as they are set
    let density = Density::new(2.0);

    let label = InfoLabelBuilder::new(density)
        .with_text("Tap the compose button\nto write your first note")
        .with_background_color(Color::new("#204060")?)
        .with_text_color(Color::new("white")?)
        .with_corner_radius(12.0)
        .with_text_size(14.0)
        .with_padding_dp(8.0, 6.0, 8.0, 6.0)
        .with_width(Dimension::Px(160.0))
        .with_height(Dimension::Px(44.0))
        .with_font_emphasis(FontEmphasis::Bold)
        .with_text_align(HorizontalAlign::Start)
        .with_icon(Some(Icon::new("compose.png", Size::new(32.0, 32.0))))
        .with_icon_position(Gravity::Start)
        .build();

    println!("Created label:");
    println!("  Text: {:?}", label.text());
    println!("  Background: {}", label.background().fill());
    println!("  Corner radius: {}", label.background().corner_radius());
    println!();

    // Render the label into the overlay's available area
    println!("Rendering to SVG...");
    let available = Size::new(360.0, 96.0);
    let svg = label.to_svg_document(available).to_string();

    println!("SVG generated successfully!");
    println!("SVG length: {} bytes", svg.len());

    // Write to file
    let output_path = "styled_label_output.svg";
    label.write_svg(output_path, available)?;
    println!("SVG written to: {}", output_path);

    Ok(())
}
