//! Closed style vocabularies for coach-mark labels.
//!
//! Every type here is a closed enum: values outside the vocabulary cannot be
//! represented, and the one "do nothing" case ([`Gravity::Center`] as an icon
//! position) is an explicit, documented variant rather than a silent fallback.

use serde::Deserialize;

/// An alignment/positioning vocabulary describing where content sits
/// relative to its container or anchor.
///
/// `Gravity` is used both for the edge a label anchors to and for the
/// position of an icon relative to the label text. As an icon position,
/// only [`Top`](Self::Top), [`Start`](Self::Start), [`Bottom`](Self::Bottom)
/// and [`End`](Self::End) place an icon; [`Center`](Self::Center) is the
/// documented no-op case and leaves every icon slot empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gravity {
    /// Above the reference content.
    Top,
    /// On the leading edge (left in left-to-right contexts).
    Start,
    /// Below the reference content.
    Bottom,
    /// On the trailing edge (right in left-to-right contexts).
    End,
    /// Centered on the reference content. No-op as an icon position.
    Center,
}

/// Font emphasis applied to label text.
///
/// Resolves to a (weight, slant) pair; the optional custom font family is
/// orthogonal and combines with every variant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontEmphasis {
    /// Regular weight, upright (default).
    #[default]
    Normal,
    /// Bold weight, upright.
    Bold,
    /// Regular weight, italic.
    Italic,
    /// Bold weight, italic.
    BoldItalic,
}

impl FontEmphasis {
    /// Returns true if this emphasis uses a bold weight.
    pub fn is_bold(self) -> bool {
        matches!(self, Self::Bold | Self::BoldItalic)
    }

    /// Returns true if this emphasis uses an italic slant.
    pub fn is_italic(self) -> bool {
        matches!(self, Self::Italic | Self::BoldItalic)
    }

    /// Returns the SVG `font-weight` value for this emphasis.
    pub fn to_svg_weight(self) -> &'static str {
        if self.is_bold() { "bold" } else { "normal" }
    }

    /// Returns the SVG `font-style` value for this emphasis.
    pub fn to_svg_style(self) -> &'static str {
        if self.is_italic() { "italic" } else { "normal" }
    }
}

/// The reading direction of the rendering context.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutDirection {
    /// Leading edge on the left (default).
    #[default]
    LeftToRight,
    /// Leading edge on the right.
    RightToLeft,
}

/// A physical icon slot relative to the label text, after layout-direction
/// resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSlot {
    /// Icon stacked above the text.
    Above,
    /// Icon on the left of the text.
    Left,
    /// Icon stacked below the text.
    Below,
    /// Icon on the right of the text.
    Right,
}

/// Strategy for mapping a logical icon position onto a physical slot.
///
/// The strategy is chosen once when a label is built and reused for every
/// render. [`Logical`](Self::Logical) honors the layout direction when
/// resolving [`Gravity::Start`]/[`Gravity::End`];
/// [`Physical`](Self::Physical) is for targets that only understand
/// left/right and maps Start to the left unconditionally. The two agree in
/// left-to-right contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSlotResolver {
    /// Direction-aware resolution of Start/End.
    Logical(LayoutDirection),
    /// Direction-unaware resolution: Start is always left, End always right.
    Physical,
}

impl IconSlotResolver {
    /// Resolves an icon position to its physical slot.
    ///
    /// Returns `None` for [`Gravity::Center`], which does not place an icon.
    pub fn resolve(self, position: Gravity) -> Option<IconSlot> {
        let direction = match self {
            Self::Logical(direction) => direction,
            Self::Physical => LayoutDirection::LeftToRight,
        };

        match position {
            Gravity::Top => Some(IconSlot::Above),
            Gravity::Bottom => Some(IconSlot::Below),
            Gravity::Start => Some(match direction {
                LayoutDirection::LeftToRight => IconSlot::Left,
                LayoutDirection::RightToLeft => IconSlot::Right,
            }),
            Gravity::End => Some(match direction {
                LayoutDirection::LeftToRight => IconSlot::Right,
                LayoutDirection::RightToLeft => IconSlot::Left,
            }),
            Gravity::Center => None,
        }
    }
}

/// A preferred width or height for a label.
///
/// Pixel values are stored after unit conversion; [`Fill`](Self::Fill)
/// resolves against the available space at measure time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// Occupy all available space along this axis.
    Fill,
    /// A fixed length in device pixels.
    Px(f32),
}

impl Dimension {
    /// Resolves this dimension against the available length.
    pub fn resolve(self, available: f32) -> f32 {
        match self {
            Self::Fill => available,
            Self::Px(length) => length,
        }
    }
}

/// Horizontal alignment of text inside the label's content area.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HorizontalAlign {
    /// Align to the leading content edge.
    Start,
    /// Center within the content area (default).
    #[default]
    Center,
    /// Align to the trailing content edge.
    End,
}

impl HorizontalAlign {
    /// Returns the SVG `text-anchor` value for this alignment.
    pub fn to_svg_anchor(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "middle",
            Self::End => "end",
        }
    }
}
