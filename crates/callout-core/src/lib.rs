//! Callout Core Types and Drawing Primitives
//!
//! This crate provides the foundational types for rendering Callout
//! coach-mark labels. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Units**: Density-independent unit conversion ([`units`] module)
//! - **Style**: Closed style vocabularies for labels ([`style`] module)
//! - **Draw**: Visual definitions for label elements ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod style;
pub mod units;
