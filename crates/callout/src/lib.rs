//! Callout - coach-mark info labels rendered to SVG.
//!
//! A coach mark is a transient tooltip highlighting part of a UI for
//! onboarding. This crate builds the info label of a coach mark - a styled
//! text bubble with a rounded-rectangle background, configurable
//! padding/margin, icon placement, typeface, and gravity - and renders it
//! to SVG.
//!
//! Labels are configured through [`InfoLabelBuilder`], either with chained
//! setters or by importing the info-text section of a [`CoachMarkConfig`],
//! and frozen into an immutable [`InfoLabel`] render target with
//! [`build`](InfoLabelBuilder::build).
//!
//! # Examples
//!
//! ```
//! use callout::{InfoLabelBuilder, config::CoachMarkConfig};
//! use callout::geometry::Size;
//! use callout::units::Density;
//!
//! // With chained setters
//! let label = InfoLabelBuilder::new(Density::MEDIUM)
//!     .with_text("Swipe left to archive a conversation")
//!     .with_corner_radius(10.0)
//!     .build();
//!
//! let svg = label.to_svg_document(Size::new(320.0, 56.0)).to_string();
//! assert!(svg.contains("<svg"));
//!
//! // Or from an external configuration
//! let config = CoachMarkConfig::default();
//! let label = InfoLabelBuilder::default()
//!     .apply_config(&config)
//!     .expect("default config has no invalid values")
//!     .build();
//! ```

pub mod config;

mod error;
mod label;

pub use callout_core::{color, draw, geometry, style, units};

pub use error::CalloutError;
pub use label::{InfoLabel, InfoLabelBuilder};
