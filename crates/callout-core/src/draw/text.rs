//! Text rendering definitions for label content.
//!
//! This module provides types for configuring text appearance and rendering
//! text elements in labels. Text is rendered as SVG `<text>` elements with
//! one `<tspan>` per line.
//!
//! # Overview
//!
//! - [`TextStyle`] - Reusable text style configuration
//! - [`Text`] - A renderable text element combining content with a [`TextStyle`]
//!
//! # Quick Start
//!
//! ```
//! # use callout_core::draw::{TextStyle, Text};
//! // Create a text style
//! let mut style = TextStyle::new();
//! style.set_font_family(Some("Helvetica".to_string()));
//! style.set_font_size(14.0);
//!
//! // Create a text element
//! let text = Text::new(&style, "Tap the compose button to start");
//! let size = text.calculate_size();
//! assert!(size.height() > 0.0);
//! ```

use std::sync::{Arc, Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Style, Weight};
use log::info;
use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
    style::{FontEmphasis, HorizontalAlign},
};

/// Font family used when no custom family is configured.
const DEFAULT_FONT_FAMILY: &str = "sans-serif";

/// Defines the visual style for label text.
///
/// `TextStyle` configures font properties, emphasis, color, and alignment for
/// text rendered inside a label. Multiple [`Text`] elements can share the
/// same style.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `None` (renders as `"sans-serif"`) |
/// | Font size | `16.0` px |
/// | Emphasis | [`FontEmphasis::Normal`] |
/// | Text color | `None` (SVG default, typically black) |
/// | Alignment | [`HorizontalAlign::Center`] |
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    font_family: Option<String>,
    font_size: f32,
    emphasis: FontEmphasis,
    color: Option<Color>,
    align: HorizontalAlign,
}

impl TextStyle {
    /// Creates a new text style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in pixels.
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    /// Sets the custom font family, or `None` to fall back to the default
    /// family.
    pub fn set_font_family(&mut self, family: Option<String>) {
        self.font_family = family;
    }

    /// Sets the font emphasis (weight and slant).
    pub fn set_emphasis(&mut self, emphasis: FontEmphasis) {
        self.emphasis = emphasis;
    }

    /// Sets the text color.
    ///
    /// When set to `None`, the SVG default fill (usually black) is used.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Sets the horizontal alignment of the text within its content area.
    pub fn set_align(&mut self, align: HorizontalAlign) {
        self.align = align;
    }

    /// Returns the font size in pixels.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Returns the configured custom font family, if any.
    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    /// Returns the font family used for rendering: the custom family if one
    /// was configured, the default family otherwise.
    pub fn resolved_font_family(&self) -> &str {
        self.font_family.as_deref().unwrap_or(DEFAULT_FONT_FAMILY)
    }

    /// Returns the font emphasis.
    pub fn emphasis(&self) -> FontEmphasis {
        self.emphasis
    }

    /// Returns the text color, if set.
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    /// Returns the horizontal alignment.
    pub fn align(&self) -> HorizontalAlign {
        self.align
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: None,
            font_size: 16.0,
            emphasis: FontEmphasis::default(),
            color: None,
            align: HorizontalAlign::default(),
        }
    }
}

/// A renderable text element combining content with styling.
///
/// `Text` pairs a string value with a [`TextStyle`] to produce a measurable
/// and renderable text element.
///
/// # Examples
///
/// ```
/// # use callout_core::draw::{TextStyle, Text};
/// let style = TextStyle::new();
/// let text = Text::new(&style, "Swipe up to dismiss");
///
/// let size = text.calculate_size();
/// assert!(size.height() > 0.0);
/// assert_eq!(text.content(), "Swipe up to dismiss");
/// ```
#[derive(Debug, Clone)]
pub struct Text<'a> {
    style: &'a TextStyle,
    content: &'a str,
}

impl<'a> Text<'a> {
    /// Creates a new text element with the given style and content.
    pub fn new(style: &'a TextStyle, content: &'a str) -> Self {
        Self { style, content }
    }

    /// Returns the text content of this element.
    pub fn content(&self) -> &str {
        self.content
    }

    /// Calculate the size required to display this text content.
    ///
    /// Empty content measures as zero.
    pub fn calculate_size(&self) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(self.content, self.style)
    }
}

impl<'a> Drawable for Text<'a> {
    /// Renders the text block at the given anchor point.
    ///
    /// The anchor's y-coordinate is the vertical center of the text block;
    /// its x-coordinate is interpreted according to the style's alignment
    /// (leading edge for start, center for center, trailing edge for end).
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let lines: Vec<&str> = self.content.lines().collect();

        // Uniform line height: total measured height divided by line count
        let text_size = self.calculate_size();
        let line_height = if lines.is_empty() {
            0.0
        } else {
            text_size.height() / lines.len() as f32
        };

        let y_offset = -(text_size.height() + line_height) / 2.0;

        let emphasis = self.style.emphasis();
        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y() + y_offset)
            .set("text-anchor", self.style.align().to_svg_anchor())
            .set("dominant-baseline", "central")
            .set("font-family", self.style.resolved_font_family())
            .set("font-size", self.style.font_size())
            .set("font-weight", emphasis.to_svg_weight())
            .set("font-style", emphasis.to_svg_style());

        // Set text color if specified
        if let Some(color) = self.style.color() {
            rendered_text = rendered_text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        for line in lines.into_iter() {
            let tspan = svg_element::TSpan::new("")
                .set("x", position.x())
                .set("dy", line_height)
                .add(SvgText::new(line));
            rendered_text = rendered_text.add(tspan);
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }

    fn size(&self) -> Size {
        self.calculate_size()
    }
}

/// TextManager handles text measurement and font operations
/// It maintains a reusable FontSystem instance to avoid expensive recreation
struct TextManager {
    font_system: Arc<Mutex<FontSystem>>,
}

impl TextManager {
    /// Create a new TextManager with a default FontSystem
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Arc::new(Mutex::new(FontSystem::new())),
        }
    }

    /// Calculate the actual size of text in pixels using cosmic-text.
    ///
    /// This provides a measurement based on real font metrics and shaping,
    /// honoring the style's family, size, and emphasis. When no usable font
    /// is available the size falls back to a width estimate derived from the
    /// character count.
    fn calculate_text_size(&self, text: &str, style: &TextStyle) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        // Lock the FontSystem for use
        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        let font_size_px = style.font_size();
        let line_height = font_size_px * 1.15;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let emphasis = style.emphasis();
        let family = match style.font_family() {
            Some(name) => Family::Name(name),
            None => Family::SansSerif,
        };
        let weight = if emphasis.is_bold() {
            Weight::BOLD
        } else {
            Weight::NORMAL
        };
        let font_style = if emphasis.is_italic() {
            Style::Italic
        } else {
            Style::Normal
        };
        let attrs = Attrs::new().family(family).weight(weight).style(font_style);

        // Unlimited buffer size so text flows naturally
        buffer.set_size(None, None);

        // Advanced shaping handles ligatures, kerning, etc.
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        // Calculate bounds by examining layout runs to determine actual
        // rendered size
        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        for last in layout_runs.iter().map(|run| run.glyphs.last()) {
            // Find rightmost glyph position
            if let Some(last) = last {
                let run_width = last.x + last.w;
                max_width = max_width.max(run_width);
            }
            total_height += metrics.line_height;
        }

        if layout_runs.is_empty() || max_width == 0.0 {
            // Estimate when shaping produced no glyphs (e.g. no fonts on the
            // system)
            let longest_line = text.lines().map(str::len).max().unwrap_or(0);
            max_width = longest_line as f32 * (font_size_px * 0.55);
            total_height = total_height.max(metrics.line_height * text.lines().count() as f32);
        }

        Size::new(max_width, total_height)
    }
}

// Create a global instance for use throughout the application
static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_text_style_defaults() {
        let style = TextStyle::new();
        assert_approx_eq!(f32, style.font_size(), 16.0);
        assert!(style.font_family().is_none());
        assert_eq!(style.resolved_font_family(), "sans-serif");
        assert_eq!(style.emphasis(), FontEmphasis::Normal);
        assert!(style.color().is_none());
        assert_eq!(style.align(), HorizontalAlign::Center);
    }

    #[test]
    fn test_text_style_set_font_family() {
        let mut style = TextStyle::new();

        style.set_font_family(Some("Helvetica".to_string()));
        assert_eq!(style.font_family(), Some("Helvetica"));
        assert_eq!(style.resolved_font_family(), "Helvetica");

        style.set_font_family(None);
        assert!(style.font_family().is_none());
        assert_eq!(style.resolved_font_family(), "sans-serif");
    }

    #[test]
    fn test_text_style_set_emphasis() {
        let mut style = TextStyle::new();
        style.set_emphasis(FontEmphasis::BoldItalic);
        assert_eq!(style.emphasis(), FontEmphasis::BoldItalic);
    }

    #[test]
    fn test_text_calculate_size_empty() {
        let style = TextStyle::new();
        let text = Text::new(&style, "");
        let size = text.calculate_size();
        assert_approx_eq!(f32, size.width(), 0.0);
        assert_approx_eq!(f32, size.height(), 0.0);
    }

    #[test]
    fn test_text_calculate_size_single_line() {
        let style = TextStyle::new();
        let text = Text::new(&style, "Tap here");
        let size = text.calculate_size();
        assert!(size.width() > 0.0, "Width should be positive");
        assert!(size.height() > 0.0, "Height should be positive");
    }

    #[test]
    fn test_text_calculate_size_multiline() {
        let style = TextStyle::new();
        let single = Text::new(&style, "Line 1");
        let multi = Text::new(&style, "Line 1\nLine 2\nLine 3");

        let single_size = single.calculate_size();
        let multi_size = multi.calculate_size();

        assert!(
            multi_size.height() > single_size.height(),
            "Multi-line text ({}) should be taller than single line ({})",
            multi_size.height(),
            single_size.height()
        );
    }

    #[test]
    fn test_text_calculate_size_larger_font() {
        let mut small_style = TextStyle::new();
        small_style.set_font_size(12.0);

        let mut large_style = TextStyle::new();
        large_style.set_font_size(24.0);

        let small_size = Text::new(&small_style, "Test").calculate_size();
        let large_size = Text::new(&large_style, "Test").calculate_size();

        assert!(
            large_size.height() > small_size.height(),
            "Larger font height ({}) should be greater than smaller font ({})",
            large_size.height(),
            small_size.height()
        );
    }

    #[test]
    fn test_text_render_to_layers_has_content() {
        let style = TextStyle::new();
        let text = Text::new(&style, "Hello");
        let output = text.render_to_layers(Point::new(100.0, 100.0));
        assert!(!output.is_empty());
    }

    #[test]
    fn test_text_render_one_tspan_per_line() {
        let style = TextStyle::new();
        let text = Text::new(&style, "First\nSecond\nThird");
        let output = text.render_to_layers(Point::new(0.0, 0.0));

        let rendered: String = output.render().iter().map(|n| n.to_string()).collect();
        assert_eq!(rendered.matches("<tspan").count(), 3);
    }

    #[test]
    fn test_text_render_emphasis_attributes() {
        let mut style = TextStyle::new();
        style.set_emphasis(FontEmphasis::BoldItalic);
        let text = Text::new(&style, "Emphasized");
        let output = text.render_to_layers(Point::new(0.0, 0.0));

        let rendered: String = output.render().iter().map(|n| n.to_string()).collect();
        assert!(rendered.contains("font-weight=\"bold\""));
        assert!(rendered.contains("font-style=\"italic\""));
    }

    #[test]
    fn test_text_render_custom_family() {
        let mut style = TextStyle::new();
        style.set_font_family(Some("Inter".to_string()));
        let text = Text::new(&style, "Custom");
        let output = text.render_to_layers(Point::new(0.0, 0.0));

        let rendered: String = output.render().iter().map(|n| n.to_string()).collect();
        assert!(rendered.contains("font-family=\"Inter\""));
    }

    #[test]
    fn test_text_render_color() {
        let mut style = TextStyle::new();
        style.set_color(Some(Color::new("white").unwrap()));
        let text = Text::new(&style, "Colored");
        let output = text.render_to_layers(Point::new(0.0, 0.0));

        let rendered: String = output.render().iter().map(|n| n.to_string()).collect();
        assert!(rendered.contains("fill=\"white\""));
    }

    #[test]
    fn test_text_content_accessor() {
        let style = TextStyle::new();
        let text = Text::new(&style, "My Content");
        assert_eq!(text.content(), "My Content");
    }
}
