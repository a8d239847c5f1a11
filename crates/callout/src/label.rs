//! Coach-mark info label construction and rendering.
//!
//! This module provides the two halves of the label lifecycle:
//!
//! - [`InfoLabelBuilder`] collects style options, either through chained
//!   setters or by bulk-importing a [`CoachMarkConfig`] section.
//! - [`InfoLabel`] is the immutable render target produced by
//!   [`build`](InfoLabelBuilder::build). Building freezes a defensive copy
//!   of the builder state, so the same builder can keep producing
//!   independent labels with divergent subsequent edits.
//!
//! Rendering never fails: an absent icon skips icon placement, an absent
//! custom font falls back to the default family, and out-of-range numeric
//! values propagate to the output unchanged.
//!
//! # Example
//!
//! ```
//! use callout::InfoLabelBuilder;
//! use callout::geometry::Size;
//! use callout::units::Density;
//!
//! let label = InfoLabelBuilder::new(Density::MEDIUM)
//!     .with_text("Tap the compose button to get started")
//!     .with_corner_radius(12.0)
//!     .build();
//!
//! let document = label.to_svg_document(Size::new(320.0, 48.0));
//! assert!(document.to_string().contains("<rect"));
//! ```

use std::{fs::File, io::Write, path::Path};

use log::{debug, error, info};
use svg::Document;

use callout_core::{
    color::Color,
    draw::{
        BackgroundDefinition, Drawable, Icon, IconSlots, LayeredOutput, RenderLayer, Text,
        TextStyle,
    },
    geometry::{Insets, Point, Size},
    style::{
        Dimension, FontEmphasis, Gravity, HorizontalAlign, IconSlot, IconSlotResolver,
        LayoutDirection,
    },
    units::Density,
};

use crate::{config::CoachMarkConfig, error::CalloutError};

/// Gap in pixels between an icon and the label text.
const ICON_GAP: f32 = 8.0;

/// Accumulates style options for an info label.
///
/// Setters chain by value and perform no range validation; density-dependent
/// setters convert their arguments to pixels at call time through the
/// builder's [`Density`]. [`apply_config`](Self::apply_config) bulk-imports
/// an external configuration section; individual setters called afterwards
/// override only the fields they touch.
#[derive(Debug, Clone)]
pub struct InfoLabelBuilder {
    density: Density,
    background_color: Color,
    corner_radius: f32,
    text: String,
    text_color: Color,
    margin: Insets,
    padding: Insets,
    text_size: f32,
    width: Dimension,
    height: Dimension,
    text_align: HorizontalAlign,
    gravity: Gravity,
    center_aligned: bool,
    attached_to_target: bool,
    icon: Option<Icon>,
    icon_position: Gravity,
    font_emphasis: FontEmphasis,
    font_family: Option<String>,
    direction: LayoutDirection,
}

impl InfoLabelBuilder {
    /// Creates a builder with default styling for the given display density.
    ///
    /// Defaults: gray background, corner radius 8, white text at 16 dp,
    /// full available width, 30 dp height, 4 dp padding, no margin, icon
    /// position [`Gravity::End`], no icon, no custom font.
    pub fn new(density: Density) -> Self {
        Self {
            density,
            background_color: Color::new("gray").expect("'gray' is a valid CSS color"),
            corner_radius: 8.0,
            text: String::new(),
            text_color: Color::new("white").expect("'white' is a valid CSS color"),
            margin: Insets::default(),
            padding: density.insets_from_dp(4.0, 4.0, 4.0, 4.0),
            text_size: 16.0,
            width: Dimension::Fill,
            height: Dimension::Px(density.dp_to_px_rounded(30.0)),
            text_align: HorizontalAlign::Center,
            gravity: Gravity::Bottom,
            center_aligned: false,
            attached_to_target: false,
            icon: None,
            icon_position: Gravity::End,
            font_emphasis: FontEmphasis::Normal,
            font_family: None,
            direction: LayoutDirection::LeftToRight,
        }
    }

    /// Sets the background color of the label.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Sets the text color of the label.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Sets the corner radius of the background rectangle, in pixels.
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Sets the text content of the label.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the text size in density-independent units.
    pub fn with_text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    /// Sets the outer margin from density-independent components
    /// (left, top, right, bottom), each converted to whole pixels.
    pub fn with_margin_dp(mut self, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        self.margin = self.density.insets_from_dp(left, top, right, bottom);
        self
    }

    /// Sets the outer margin from pre-built pixel insets, unconverted.
    pub fn with_margin(mut self, margin: Insets) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the inner padding from density-independent components
    /// (left, top, right, bottom), each converted to whole pixels.
    pub fn with_padding_dp(mut self, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        self.padding = self.density.insets_from_dp(left, top, right, bottom);
        self
    }

    /// Sets the inner padding from pre-built pixel insets, unconverted.
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the preferred width. Fixed values are given in
    /// density-independent units and converted to whole pixels.
    pub fn with_width(mut self, width: Dimension) -> Self {
        self.width = self.convert_dimension(width);
        self
    }

    /// Sets the preferred height. Fixed values are given in
    /// density-independent units and converted to whole pixels.
    pub fn with_height(mut self, height: Dimension) -> Self {
        self.height = self.convert_dimension(height);
        self
    }

    /// Sets the horizontal alignment of text within the label.
    pub fn with_text_align(mut self, align: HorizontalAlign) -> Self {
        self.text_align = align;
        self
    }

    /// Sets the edge of the screen the label gravitates to.
    pub fn with_gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    /// Sets whether the label is centered along its gravity edge.
    pub fn with_center_aligned(mut self, center_aligned: bool) -> Self {
        self.center_aligned = center_aligned;
        self
    }

    /// Sets whether the label is attached to its highlight target.
    pub fn with_attached_to_target(mut self, attached: bool) -> Self {
        self.attached_to_target = attached;
        self
    }

    /// Sets the icon decoration, or `None` to remove it.
    pub fn with_icon(mut self, icon: Option<Icon>) -> Self {
        self.icon = icon;
        self
    }

    /// Sets the position of the icon relative to the text.
    ///
    /// [`Gravity::Center`] leaves the icon unplaced.
    pub fn with_icon_position(mut self, position: Gravity) -> Self {
        self.icon_position = position;
        self
    }

    /// Sets the font emphasis of the label text.
    pub fn with_font_emphasis(mut self, emphasis: FontEmphasis) -> Self {
        self.font_emphasis = emphasis;
        self
    }

    /// Sets the custom font family, or `None` for the default family.
    pub fn with_font_family(mut self, family: Option<String>) -> Self {
        self.font_family = family;
        self
    }

    /// Sets the layout direction used to resolve Start/End icon positions.
    pub fn with_layout_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Bulk-imports the info-text section of an external configuration.
    ///
    /// Fields are imported in a fixed order: background color, text color,
    /// text size, corner radius, gravity, icon, icon position,
    /// attach-to-target flag, margin, padding, font emphasis, font family.
    /// Configured fields overwrite the builder's current values; unset
    /// fields leave them untouched. Individual setters called afterwards
    /// override only the fields they touch.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured color string cannot be parsed.
    pub fn apply_config(mut self, config: &CoachMarkConfig) -> Result<Self, CalloutError> {
        let info = config.info_text();

        if let Some(color) = info.background_color()? {
            self.background_color = color;
        }
        if let Some(color) = info.text_color()? {
            self.text_color = color;
        }
        if let Some(size) = info.text_size() {
            self.text_size = size;
        }
        if let Some(radius) = info.corner_radius() {
            self.corner_radius = radius;
        }
        if let Some(gravity) = info.gravity() {
            self.gravity = gravity;
        }
        if let Some(icon) = info.icon() {
            self.icon = Some(icon);
        }
        if let Some(position) = info.icon_position() {
            self.icon_position = position;
        }
        if let Some(attached) = info.attached_to_target() {
            self.attached_to_target = attached;
        }
        if let Some(margin) = info.margin() {
            self.margin = margin;
        }
        if let Some(padding) = info.padding() {
            self.padding = padding;
        }
        if let Some(emphasis) = info.font_emphasis() {
            self.font_emphasis = emphasis;
        }
        if let Some(family) = info.font_family() {
            self.font_family = Some(family.to_string());
        }

        Ok(self)
    }

    /// Freezes the current builder state into an immutable [`InfoLabel`].
    ///
    /// The builder remains usable; every call produces an independent label
    /// holding a copy of the state at build time.
    pub fn build(&self) -> InfoLabel {
        InfoLabel::new(self)
    }

    fn convert_dimension(&self, dimension: Dimension) -> Dimension {
        match dimension {
            Dimension::Fill => Dimension::Fill,
            Dimension::Px(dp) => Dimension::Px(self.density.dp_to_px_rounded(dp)),
        }
    }
}

impl Default for InfoLabelBuilder {
    fn default() -> Self {
        Self::new(Density::MEDIUM)
    }
}

/// An immutable, fully resolved info label ready for rendering.
///
/// Constructed through [`InfoLabelBuilder::build`]. Every paint pass draws
/// the filled rounded-rectangle background across the label's full bounds,
/// beneath icon and text.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoLabel {
    background: BackgroundDefinition,
    text: String,
    text_style: TextStyle,
    margin: Insets,
    padding: Insets,
    width: Dimension,
    height: Dimension,
    gravity: Gravity,
    center_aligned: bool,
    attached_to_target: bool,
    icon_slots: IconSlots,
}

impl InfoLabel {
    /// Resolves builder state into renderable form.
    ///
    /// Resolution order: dimensions and insets, text content and color,
    /// font (emphasis combined with the custom family if one is set),
    /// text alignment, background paint, icon placement.
    fn new(builder: &InfoLabelBuilder) -> Self {
        let width = builder.width;
        let height = builder.height;
        let margin = builder.margin;
        let padding = builder.padding;

        let text = builder.text.clone();
        let mut text_style = TextStyle::new();
        text_style.set_font_size(builder.density.dp_to_px(builder.text_size));
        text_style.set_color(Some(builder.text_color));
        text_style.set_font_family(builder.font_family.clone());
        text_style.set_emphasis(builder.font_emphasis);
        text_style.set_align(builder.text_align);

        let background =
            BackgroundDefinition::new(builder.background_color, builder.corner_radius);

        // The placement strategy is picked once here; renders reuse the
        // resolved slots.
        let resolver = IconSlotResolver::Logical(builder.direction);
        let slot = resolver.resolve(builder.icon_position);
        let icon_slots = match builder.icon.clone() {
            Some(icon) => IconSlots::place(icon, slot),
            None => IconSlots::empty(),
        };

        debug!(slot:? = slot, has_icon = builder.icon.is_some(); "Resolved info label");

        Self {
            background,
            text,
            text_style,
            margin,
            padding,
            width,
            height,
            gravity: builder.gravity,
            center_aligned: builder.center_aligned,
            attached_to_target: builder.attached_to_target,
            icon_slots,
        }
    }

    /// Returns the text content of the label.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the resolved text style.
    pub fn text_style(&self) -> &TextStyle {
        &self.text_style
    }

    /// Returns the background definition.
    pub fn background(&self) -> &BackgroundDefinition {
        &self.background
    }

    /// Returns the outer margin in pixels.
    pub fn margin(&self) -> Insets {
        self.margin
    }

    /// Returns the inner padding in pixels.
    pub fn padding(&self) -> Insets {
        self.padding
    }

    /// Returns the preferred width.
    pub fn width(&self) -> Dimension {
        self.width
    }

    /// Returns the preferred height.
    pub fn height(&self) -> Dimension {
        self.height
    }

    /// Returns the edge of the screen the label gravitates to.
    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    /// Returns whether the label is centered along its gravity edge.
    pub fn is_center_aligned(&self) -> bool {
        self.center_aligned
    }

    /// Returns whether the label is attached to its highlight target.
    pub fn is_attached_to_target(&self) -> bool {
        self.attached_to_target
    }

    /// Returns the resolved icon slots.
    pub fn icon_slots(&self) -> &IconSlots {
        &self.icon_slots
    }

    /// Resolves the label's dimensions against the available space.
    ///
    /// Fill dimensions take the full available length; fixed dimensions
    /// pass through regardless of content.
    pub fn measure(&self, available: Size) -> Size {
        Size::new(
            self.width.resolve(available.width()),
            self.height.resolve(available.height()),
        )
    }

    /// Assembles the rendered label into a standalone SVG document.
    ///
    /// The document is sized to the measured label plus its margin, with
    /// the label offset by the margin's left/top components.
    pub fn to_svg_document(&self, available: Size) -> Document {
        let size = self.measure(available);
        let document_size = size.add_padding(self.margin);
        let position = Point::new(
            self.margin.left() + size.width() / 2.0,
            self.margin.top() + size.height() / 2.0,
        );

        let mut document = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", document_size.width(), document_size.height()),
            )
            .set("width", document_size.width())
            .set("height", document_size.height());

        for node in self.render_sized(position, size).render() {
            document = document.add(node);
        }

        document
    }

    /// Writes the rendered label to an SVG file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn write_svg(&self, path: impl AsRef<Path>, available: Size) -> Result<(), CalloutError> {
        let path = path.as_ref();
        info!(path:? = path; "Creating SVG file");

        let document = self.to_svg_document(available);

        let f = match File::create(path) {
            Ok(file) => file,
            Err(err) => {
                error!(path:? = path, err:err; "Failed to create SVG file");
                return Err(CalloutError::Io(err));
            }
        };

        if let Err(err) = write!(&f, "{document}") {
            error!(path:? = path, err:err; "Failed to write SVG content");
            return Err(CalloutError::Io(err));
        }

        Ok(())
    }

    /// Intrinsic size of the label content: measured text, the icon's slot
    /// contribution, and padding.
    fn content_size(&self) -> Size {
        let text_size = Text::new(&self.text_style, &self.text).calculate_size();

        let content = match self.icon_slots.occupied() {
            Some((IconSlot::Above | IconSlot::Below, icon)) => Size::new(
                text_size.width().max(icon.size().width()),
                text_size.height() + ICON_GAP + icon.size().height(),
            ),
            Some((IconSlot::Left | IconSlot::Right, icon)) => Size::new(
                text_size.width() + ICON_GAP + icon.size().width(),
                text_size.height().max(icon.size().height()),
            ),
            None => text_size,
        };

        content.add_padding(self.padding)
    }

    /// Renders the label at the given center position and resolved size.
    fn render_sized(&self, position: Point, size: Size) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        // Background always spans the full bounds, whatever the content
        output.add_to_layer(
            RenderLayer::Background,
            self.background.render_to_svg(size, position),
        );

        let content = position.to_bounds(size).shrink(self.padding);

        // The icon keeps its intrinsic size; the text gets the rest of the
        // content area.
        let text_area = match self.icon_slots.occupied() {
            Some((IconSlot::Above, icon)) => {
                let icon_center = Point::new(
                    content.center().x(),
                    content.min_y() + icon.size().height() / 2.0,
                );
                output.merge(icon.render_to_layers(icon_center));
                content.shrink(Insets::new(icon.size().height() + ICON_GAP, 0.0, 0.0, 0.0))
            }
            Some((IconSlot::Below, icon)) => {
                let icon_center = Point::new(
                    content.center().x(),
                    content.max_y() - icon.size().height() / 2.0,
                );
                output.merge(icon.render_to_layers(icon_center));
                content.shrink(Insets::new(0.0, 0.0, icon.size().height() + ICON_GAP, 0.0))
            }
            Some((IconSlot::Left, icon)) => {
                let icon_center = Point::new(
                    content.min_x() + icon.size().width() / 2.0,
                    content.center().y(),
                );
                output.merge(icon.render_to_layers(icon_center));
                content.shrink(Insets::new(0.0, 0.0, 0.0, icon.size().width() + ICON_GAP))
            }
            Some((IconSlot::Right, icon)) => {
                let icon_center = Point::new(
                    content.max_x() - icon.size().width() / 2.0,
                    content.center().y(),
                );
                output.merge(icon.render_to_layers(icon_center));
                content.shrink(Insets::new(0.0, icon.size().width() + ICON_GAP, 0.0, 0.0))
            }
            None => content,
        };

        if !self.text.is_empty() {
            let anchor_x = match self.text_style.align() {
                HorizontalAlign::Start => text_area.min_x(),
                HorizontalAlign::Center => text_area.center().x(),
                HorizontalAlign::End => text_area.max_x(),
            };
            let anchor = Point::new(anchor_x, text_area.center().y());
            output.merge(Text::new(&self.text_style, &self.text).render_to_layers(anchor));
        }

        output
    }
}

impl Drawable for InfoLabel {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        self.render_sized(position, self.size())
    }

    /// Returns the label's size with Fill dimensions wrapping the intrinsic
    /// content size.
    fn size(&self) -> Size {
        self.measure(self.content_size())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use crate::config::{IconConfig, InfoTextConfig, InsetsConfig};

    use super::*;

    fn sample_icon() -> Icon {
        Icon::new("pointer.png", Size::new(24.0, 24.0))
    }

    #[test]
    fn test_builder_defaults() {
        let label = InfoLabelBuilder::default().build();

        assert_eq!(label.background().fill().to_string(), "gray");
        assert_approx_eq!(f32, label.background().corner_radius(), 8.0);
        assert_eq!(label.text(), "");
        assert_eq!(label.padding(), Insets::uniform(4.0));
        assert_eq!(label.margin(), Insets::default());
        assert_eq!(label.width(), Dimension::Fill);
        assert_eq!(label.height(), Dimension::Px(30.0));
        assert_eq!(label.gravity(), Gravity::Bottom);
        assert!(!label.is_center_aligned());
        assert!(!label.is_attached_to_target());
        assert!(label.icon_slots().is_empty());
        assert_eq!(label.text_style().emphasis(), FontEmphasis::Normal);
        assert_approx_eq!(f32, label.text_style().font_size(), 16.0);
    }

    #[test]
    fn test_margin_dp_converts_and_rounds() {
        let label = InfoLabelBuilder::new(Density::new(1.5))
            .with_margin_dp(3.0, 5.0, 7.0, 9.0)
            .build();

        let margin = label.margin();
        assert_approx_eq!(f32, margin.left(), 5.0); // 3 * 1.5 = 4.5 -> 5
        assert_approx_eq!(f32, margin.top(), 8.0); // 5 * 1.5 = 7.5 -> 8
        assert_approx_eq!(f32, margin.right(), 11.0); // 7 * 1.5 = 10.5 -> 11
        assert_approx_eq!(f32, margin.bottom(), 14.0); // 9 * 1.5 = 13.5 -> 14
    }

    #[test]
    fn test_margin_insets_pass_through_unconverted() {
        let insets = Insets::new(1.5, 2.5, 3.5, 4.5);
        let label = InfoLabelBuilder::new(Density::new(3.0))
            .with_margin(insets)
            .build();

        assert_eq!(label.margin(), insets);
    }

    #[test]
    fn test_padding_dp_converts_and_rounds() {
        let label = InfoLabelBuilder::new(Density::new(2.0))
            .with_padding_dp(1.0, 2.0, 3.0, 4.0)
            .build();

        let padding = label.padding();
        assert_approx_eq!(f32, padding.left(), 2.0);
        assert_approx_eq!(f32, padding.top(), 4.0);
        assert_approx_eq!(f32, padding.right(), 6.0);
        assert_approx_eq!(f32, padding.bottom(), 8.0);
    }

    #[test]
    fn test_fixed_dimensions_convert_from_dp() {
        let label = InfoLabelBuilder::new(Density::new(2.0))
            .with_width(Dimension::Px(100.0))
            .with_height(Dimension::Px(25.0))
            .build();

        assert_eq!(label.width(), Dimension::Px(200.0));
        assert_eq!(label.height(), Dimension::Px(50.0));
    }

    #[test]
    fn test_text_size_resolves_against_density() {
        let label = InfoLabelBuilder::new(Density::new(2.0))
            .with_text_size(16.0)
            .build();

        assert_approx_eq!(f32, label.text_style().font_size(), 32.0);
    }

    #[test]
    fn test_font_resolution_mapping() {
        let emphases = [
            FontEmphasis::Normal,
            FontEmphasis::Bold,
            FontEmphasis::Italic,
            FontEmphasis::BoldItalic,
        ];

        for emphasis in emphases {
            for family in [None, Some("Inter".to_string())] {
                let label = InfoLabelBuilder::default()
                    .with_font_emphasis(emphasis)
                    .with_font_family(family.clone())
                    .build();

                let style = label.text_style();
                assert_eq!(style.emphasis(), emphasis);
                match &family {
                    Some(name) => assert_eq!(style.resolved_font_family(), name),
                    None => assert_eq!(style.resolved_font_family(), "sans-serif"),
                }
            }
        }
    }

    #[test]
    fn test_icon_position_fills_exactly_one_slot() {
        let cases = [
            (Gravity::Top, IconSlot::Above),
            (Gravity::Start, IconSlot::Left),
            (Gravity::Bottom, IconSlot::Below),
            (Gravity::End, IconSlot::Right),
        ];

        for (position, expected_slot) in cases {
            let label = InfoLabelBuilder::default()
                .with_icon(Some(sample_icon()))
                .with_icon_position(position)
                .build();

            let (slot, icon) = label
                .icon_slots()
                .occupied()
                .expect("a slot should be occupied");
            assert_eq!(slot, expected_slot, "position {position:?}");
            assert_eq!(icon.href(), "pointer.png");
        }
    }

    #[test]
    fn test_center_icon_position_leaves_slots_empty() {
        let label = InfoLabelBuilder::default()
            .with_icon(Some(sample_icon()))
            .with_icon_position(Gravity::Center)
            .build();

        assert!(label.icon_slots().is_empty());
    }

    #[test]
    fn test_no_icon_leaves_slots_empty() {
        let label = InfoLabelBuilder::default()
            .with_icon_position(Gravity::Top)
            .build();

        assert!(label.icon_slots().is_empty());
    }

    #[test]
    fn test_rtl_direction_swaps_start_end_slots() {
        let label = InfoLabelBuilder::default()
            .with_layout_direction(LayoutDirection::RightToLeft)
            .with_icon(Some(sample_icon()))
            .with_icon_position(Gravity::Start)
            .build();

        assert!(label.icon_slots().right().is_some());
        assert!(label.icon_slots().left().is_none());
    }

    #[test]
    fn test_config_then_setter_overrides_only_touched_field() {
        let config = CoachMarkConfig::new(
            InfoTextConfig::new()
                .with_background_color("#102030")
                .with_text_color("black")
                .with_text_size(20.0)
                .with_corner_radius(2.0)
                .with_gravity(Gravity::Top)
                .with_icon(IconConfig::new("hint.png", 16.0, 16.0))
                .with_icon_position(Gravity::Start)
                .with_attached_to_target(true)
                .with_margin(InsetsConfig::new(1.0, 1.0, 1.0, 1.0))
                .with_padding(InsetsConfig::new(2.0, 2.0, 2.0, 2.0))
                .with_font_emphasis(FontEmphasis::Bold)
                .with_font_family("Inter"),
        );

        let label = InfoLabelBuilder::default()
            .apply_config(&config)
            .unwrap()
            .with_corner_radius(9.0)
            .build();

        // The individually set field reflects the setter
        assert_approx_eq!(f32, label.background().corner_radius(), 9.0);

        // Every other field reflects the config
        assert_eq!(label.background().fill(), Color::new("#102030").unwrap());
        assert_eq!(label.gravity(), Gravity::Top);
        assert!(label.is_attached_to_target());
        assert_eq!(label.margin(), Insets::uniform(1.0));
        assert_eq!(label.padding(), Insets::uniform(2.0));
        assert_eq!(label.text_style().emphasis(), FontEmphasis::Bold);
        assert_eq!(label.text_style().resolved_font_family(), "Inter");
        assert_approx_eq!(f32, label.text_style().font_size(), 20.0);
        assert!(label.icon_slots().left().is_some());
    }

    #[test]
    fn test_config_with_invalid_color_errors() {
        let config =
            CoachMarkConfig::new(InfoTextConfig::new().with_background_color("no-such-color"));

        let result = InfoLabelBuilder::default().apply_config(&config);
        assert!(matches!(result, Err(CalloutError::Config(_))));
    }

    #[test]
    fn test_builder_reuse_diverges_only_in_edited_field() {
        let builder = InfoLabelBuilder::default()
            .with_corner_radius(5.0)
            .with_text("First step");

        let first = builder.build();
        let second = builder.with_text("Second step").build();

        assert_eq!(first.text(), "First step");
        assert_eq!(second.text(), "Second step");

        // Non-text styling is identical across the two labels
        assert_eq!(first.background(), second.background());
        assert_eq!(first.text_style(), second.text_style());
        assert_eq!(first.margin(), second.margin());
        assert_eq!(first.padding(), second.padding());
        assert_eq!(first.width(), second.width());
        assert_eq!(first.height(), second.height());
    }

    #[test]
    fn test_measure_fill_takes_available_space() {
        let label = InfoLabelBuilder::default()
            .with_height(Dimension::Px(40.0))
            .build();

        let measured = label.measure(Size::new(320.0, 480.0));
        assert_approx_eq!(f32, measured.width(), 320.0);
        assert_approx_eq!(f32, measured.height(), 40.0);
    }

    #[test]
    fn test_background_spans_measured_bounds_regardless_of_text() {
        let available = Size::new(300.0, 60.0);

        for text in ["Hi", "A considerably longer piece of tutorial text"] {
            let label = InfoLabelBuilder::default()
                .with_width(Dimension::Px(200.0))
                .with_height(Dimension::Px(48.0))
                .with_text(text)
                .build();

            let rendered = label.to_svg_document(available).to_string();
            assert!(
                rendered.contains("width=\"200\"") && rendered.contains("height=\"48\""),
                "background should span the measured 200x48 bounds for {text:?}"
            );
        }
    }

    #[test]
    fn test_document_includes_margin_offset() {
        let label = InfoLabelBuilder::default()
            .with_width(Dimension::Px(100.0))
            .with_height(Dimension::Px(50.0))
            .with_margin(Insets::new(10.0, 10.0, 10.0, 10.0))
            .build();

        let rendered = label.to_svg_document(Size::new(100.0, 50.0)).to_string();
        // Document grows by the margin on both axes
        assert!(rendered.contains("viewBox=\"0 0 120 70\""));
        // The background's top-left corner sits at the margin offset
        assert!(rendered.contains("x=\"10\""));
        assert!(rendered.contains("y=\"10\""));
    }

    #[test]
    fn test_render_layers_background_icon_text() {
        let label = InfoLabelBuilder::default()
            .with_text("Guided step")
            .with_icon(Some(sample_icon()))
            .with_icon_position(Gravity::Start)
            .with_width(Dimension::Px(240.0))
            .with_height(Dimension::Px(64.0))
            .build();

        let nodes = label.render_to_layers(Point::new(120.0, 32.0)).render();
        assert_eq!(nodes.len(), 3, "background, icon, and text layers");

        let rendered: String = nodes.iter().map(|n| n.to_string()).collect();
        assert!(rendered.contains("data-layer=\"background\""));
        assert!(rendered.contains("data-layer=\"icon\""));
        assert!(rendered.contains("data-layer=\"text\""));
    }

    #[test]
    fn test_render_without_icon_or_text_has_background_only() {
        let label = InfoLabelBuilder::default()
            .with_width(Dimension::Px(100.0))
            .with_height(Dimension::Px(30.0))
            .build();

        let nodes = label.render_to_layers(Point::default()).render();
        assert_eq!(nodes.len(), 1);

        let rendered = nodes[0].to_string();
        assert!(rendered.contains("data-layer=\"background\""));
    }

    #[test]
    fn test_intrinsic_size_wraps_content_when_filling() {
        let label = InfoLabelBuilder::default()
            .with_width(Dimension::Fill)
            .with_height(Dimension::Fill)
            .with_text("Wrap me")
            .build();

        let size = label.size();
        // At least the padding shell around non-empty text
        assert!(size.width() > label.padding().horizontal_sum());
        assert!(size.height() > label.padding().vertical_sum());
    }
}
