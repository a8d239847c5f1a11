//! Drawable components for label rendering.
//!
//! This module provides the drawable abstractions a coach-mark label is
//! composed of. All drawable components implement the [`Drawable`] trait,
//! which provides a consistent interface for rendering to SVG layers and
//! calculating size.

mod background;
mod icon;
mod layer;
mod text;

pub use background::BackgroundDefinition;
pub use icon::{Icon, IconSlots};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use text::{Text, TextStyle};

use crate::geometry::{Point, Size};

/// A renderable element positioned by a reference point.
pub trait Drawable: std::fmt::Debug {
    /// Renders this element into z-ordered SVG layers at `position`
    /// (the element's center, unless the implementation documents otherwise).
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// Returns the size this element occupies when rendered.
    fn size(&self) -> Size;
}
