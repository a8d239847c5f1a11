//! Configuration types for coach-mark labels.
//!
//! This module provides the external configuration object a label builder
//! can bulk-import style values from. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`CoachMarkConfig`] - Top-level coach-mark configuration root.
//! - [`InfoTextConfig`] - The info-text section controlling label styling.
//! - [`InsetsConfig`] - A four-sided inset, expressed in absolute pixels.
//! - [`IconConfig`] - An icon reference with its intrinsic size.
//!
//! Every field of [`InfoTextConfig`] is optional: fields left unset do not
//! participate in the import and keep whatever value the builder already
//! holds. Color fields are stored as CSS color strings and parsed on access.
//!
//! # Example
//!
//! ```
//! # use callout::config::CoachMarkConfig;
//! // Use default configuration (imports nothing)
//! let config = CoachMarkConfig::default();
//! assert!(config.info_text().background_color().unwrap().is_none());
//! ```

use serde::Deserialize;

use callout_core::{
    color::Color,
    draw::Icon,
    geometry::{Insets, Size},
    style::{FontEmphasis, Gravity},
};

use crate::error::CalloutError;

/// Top-level coach-mark configuration.
///
/// Groups the sections a coach mark is configured from. Only the info-text
/// section is consumed here; overlay anchoring and sequencing are handled
/// elsewhere.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoachMarkConfig {
    /// Info-text styling section.
    #[serde(default)]
    info_text: InfoTextConfig,
}

impl CoachMarkConfig {
    /// Creates a new [`CoachMarkConfig`] with the specified info-text section.
    pub fn new(info_text: InfoTextConfig) -> Self {
        Self { info_text }
    }

    /// Returns the info-text styling section.
    pub fn info_text(&self) -> &InfoTextConfig {
        &self.info_text
    }
}

/// Styling configuration for the info-text label of a coach mark.
///
/// Fields that are not set fall back to the builder's current values during
/// import.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InfoTextConfig {
    /// Background [`Color`] of the label, as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Text [`Color`] of the label, as a CSS color string.
    #[serde(default)]
    text_color: Option<String>,

    /// Text size in density-independent units.
    #[serde(default)]
    text_size: Option<f32>,

    /// Corner radius of the background rectangle, in pixels.
    #[serde(default)]
    corner_radius: Option<f32>,

    /// Edge of the screen the label gravitates to.
    #[serde(default)]
    gravity: Option<Gravity>,

    /// Icon decoration for the label.
    #[serde(default)]
    icon: Option<IconConfig>,

    /// Position of the icon relative to the text.
    #[serde(default)]
    icon_position: Option<Gravity>,

    /// Whether the label is attached to its highlight target.
    #[serde(default)]
    attached_to_target: Option<bool>,

    /// Outer margin in absolute pixels.
    #[serde(default)]
    margin: Option<InsetsConfig>,

    /// Inner padding in absolute pixels.
    #[serde(default)]
    padding: Option<InsetsConfig>,

    /// Font emphasis of the label text.
    #[serde(default)]
    font_emphasis: Option<FontEmphasis>,

    /// Custom font family for the label text.
    #[serde(default)]
    font_family: Option<String>,
}

impl InfoTextConfig {
    /// Creates an empty info-text configuration that imports nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the background color as a CSS color string.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Sets the text color as a CSS color string.
    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    /// Sets the text size in density-independent units.
    pub fn with_text_size(mut self, size: f32) -> Self {
        self.text_size = Some(size);
        self
    }

    /// Sets the corner radius in pixels.
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    /// Sets the label gravity.
    pub fn with_gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = Some(gravity);
        self
    }

    /// Sets the icon decoration.
    pub fn with_icon(mut self, icon: IconConfig) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Sets the icon position.
    pub fn with_icon_position(mut self, position: Gravity) -> Self {
        self.icon_position = Some(position);
        self
    }

    /// Sets whether the label attaches to its target.
    pub fn with_attached_to_target(mut self, attached: bool) -> Self {
        self.attached_to_target = Some(attached);
        self
    }

    /// Sets the outer margin in absolute pixels.
    pub fn with_margin(mut self, margin: InsetsConfig) -> Self {
        self.margin = Some(margin);
        self
    }

    /// Sets the inner padding in absolute pixels.
    pub fn with_padding(mut self, padding: InsetsConfig) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Sets the font emphasis.
    pub fn with_font_emphasis(mut self, emphasis: FontEmphasis) -> Self {
        self.font_emphasis = Some(emphasis);
        self
    }

    /// Sets the custom font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Returns the parsed background [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, CalloutError> {
        Self::parse_color(self.background_color.as_deref(), "background color")
    }

    /// Returns the parsed text [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn text_color(&self) -> Result<Option<Color>, CalloutError> {
        Self::parse_color(self.text_color.as_deref(), "text color")
    }

    /// Returns the text size in density-independent units, if configured.
    pub fn text_size(&self) -> Option<f32> {
        self.text_size
    }

    /// Returns the corner radius in pixels, if configured.
    pub fn corner_radius(&self) -> Option<f32> {
        self.corner_radius
    }

    /// Returns the label gravity, if configured.
    pub fn gravity(&self) -> Option<Gravity> {
        self.gravity
    }

    /// Returns the configured icon, if any.
    pub fn icon(&self) -> Option<Icon> {
        self.icon.as_ref().map(IconConfig::to_icon)
    }

    /// Returns the icon position, if configured.
    pub fn icon_position(&self) -> Option<Gravity> {
        self.icon_position
    }

    /// Returns the attach-to-target flag, if configured.
    pub fn attached_to_target(&self) -> Option<bool> {
        self.attached_to_target
    }

    /// Returns the outer margin in pixels, if configured.
    pub fn margin(&self) -> Option<Insets> {
        self.margin.map(InsetsConfig::to_insets)
    }

    /// Returns the inner padding in pixels, if configured.
    pub fn padding(&self) -> Option<Insets> {
        self.padding.map(InsetsConfig::to_insets)
    }

    /// Returns the font emphasis, if configured.
    pub fn font_emphasis(&self) -> Option<FontEmphasis> {
        self.font_emphasis
    }

    /// Returns the custom font family, if configured.
    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }

    fn parse_color(value: Option<&str>, field: &str) -> Result<Option<Color>, CalloutError> {
        value
            .map(Color::new)
            .transpose()
            .map_err(|err| CalloutError::Config(format!("invalid {field} in config: {err}")))
    }
}

/// A four-sided inset expressed in absolute pixels.
///
/// Config insets bypass density conversion and are stored by the builder
/// unchanged.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct InsetsConfig {
    #[serde(default)]
    left: f32,
    #[serde(default)]
    top: f32,
    #[serde(default)]
    right: f32,
    #[serde(default)]
    bottom: f32,
}

impl InsetsConfig {
    /// Creates insets from left, top, right, and bottom pixel values.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Converts to the geometry [`Insets`] type.
    pub fn to_insets(self) -> Insets {
        Insets::new(self.top, self.right, self.bottom, self.left)
    }
}

/// An icon reference with its intrinsic size in pixels.
#[derive(Debug, Clone, Deserialize)]
pub struct IconConfig {
    href: String,
    width: f32,
    height: f32,
}

impl IconConfig {
    /// Creates an icon config from an image reference and intrinsic size.
    pub fn new(href: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            href: href.into(),
            width,
            height,
        }
    }

    /// Converts to a drawable [`Icon`].
    pub fn to_icon(&self) -> Icon {
        Icon::new(self.href.clone(), Size::new(self.width, self.height))
    }
}
