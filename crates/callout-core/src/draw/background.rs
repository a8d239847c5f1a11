//! Rounded-rectangle background fill for labels.

use svg::{self, node::element as svg_element};

use crate::{
    color::Color,
    geometry::{Point, Size},
};

/// The filled rounded-rectangle backdrop of a label.
///
/// On every render the backdrop covers the label's full bounds, with the
/// corner radius applied to both axes, beneath icon and text content.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundDefinition {
    fill: Color,
    corner_radius: f32,
}

impl BackgroundDefinition {
    /// Creates a background with the given fill color and corner radius.
    ///
    /// The radius is not validated; out-of-range values propagate to the
    /// rendered output unchanged.
    pub fn new(fill: Color, corner_radius: f32) -> Self {
        Self {
            fill,
            corner_radius,
        }
    }

    /// Returns the fill color.
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Returns the corner radius in pixels.
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Renders this background to an SVG rectangle element.
    ///
    /// # Arguments
    ///
    /// * `size` - The dimensions of the backdrop to render.
    /// * `position` - The center position of the backdrop.
    pub fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        // Position is the center of the label; the rectangle needs its
        // top-left corner
        let bounds = position.to_bounds(size);

        let rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", size.width())
            .set("height", size.height())
            .set("rx", self.corner_radius)
            .set("ry", self.corner_radius)
            .set("fill", self.fill.to_string())
            .set("fill-opacity", self.fill.alpha());

        rect.into()
    }
}
