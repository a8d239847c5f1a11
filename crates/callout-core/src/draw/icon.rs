//! Icon definitions for label decoration.
//!
//! An [`Icon`] is an external image reference with an intrinsic size,
//! rendered as an SVG `<image>` element. [`IconSlots`] holds the result of
//! resolving an icon position: at most one of the four physical slots around
//! the label text is ever occupied.

use svg::node::element as svg_element;

use crate::{
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
    style::IconSlot,
};

/// An image decoration for a label.
///
/// Icons reference an external image by href and carry their intrinsic size;
/// they are rendered at that size regardless of the label dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    href: String,
    size: Size,
}

impl Icon {
    /// Creates a new icon from an image reference and its intrinsic size.
    ///
    /// # Arguments
    ///
    /// * `href` - The image reference (a URL, path, or data URI).
    /// * `size` - The intrinsic size the icon renders at.
    pub fn new(href: impl Into<String>, size: Size) -> Self {
        Self {
            href: href.into(),
            size,
        }
    }

    /// Returns the image reference of this icon.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Returns the intrinsic size of this icon.
    pub fn size(&self) -> Size {
        self.size
    }
}

impl Drawable for Icon {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let bounds = position.to_bounds(self.size);

        let image = svg_element::Image::new()
            .set("href", self.href.as_str())
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", self.size.width())
            .set("height", self.size.height());

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Icon, Box::new(image));
        output
    }

    fn size(&self) -> Size {
        Icon::size(self)
    }
}

/// The four physical icon slots around a label's text.
///
/// At most one slot is ever occupied: [`place`](Self::place) fills exactly
/// the slot it is given, and an unresolved position (no slot) leaves all
/// four empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconSlots {
    above: Option<Icon>,
    left: Option<Icon>,
    below: Option<Icon>,
    right: Option<Icon>,
}

impl IconSlots {
    /// Returns slots with no icon placed.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Places an icon in exactly one slot, or in none when `slot` is `None`.
    pub fn place(icon: Icon, slot: Option<IconSlot>) -> Self {
        let mut slots = Self::empty();
        match slot {
            Some(IconSlot::Above) => slots.above = Some(icon),
            Some(IconSlot::Left) => slots.left = Some(icon),
            Some(IconSlot::Below) => slots.below = Some(icon),
            Some(IconSlot::Right) => slots.right = Some(icon),
            None => {}
        }
        slots
    }

    /// Returns the icon above the text, if placed.
    pub fn above(&self) -> Option<&Icon> {
        self.above.as_ref()
    }

    /// Returns the icon on the left of the text, if placed.
    pub fn left(&self) -> Option<&Icon> {
        self.left.as_ref()
    }

    /// Returns the icon below the text, if placed.
    pub fn below(&self) -> Option<&Icon> {
        self.below.as_ref()
    }

    /// Returns the icon on the right of the text, if placed.
    pub fn right(&self) -> Option<&Icon> {
        self.right.as_ref()
    }

    /// Returns the occupied slot and its icon, if any.
    pub fn occupied(&self) -> Option<(IconSlot, &Icon)> {
        if let Some(icon) = &self.above {
            Some((IconSlot::Above, icon))
        } else if let Some(icon) = &self.left {
            Some((IconSlot::Left, icon))
        } else if let Some(icon) = &self.below {
            Some((IconSlot::Below, icon))
        } else {
            self.right.as_ref().map(|icon| (IconSlot::Right, icon))
        }
    }

    /// Returns `true` if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.occupied().is_none()
    }
}
