//! Error types for Callout operations.
//!
//! This module provides the main error type [`CalloutError`]. The label
//! render path itself never fails: misconfigured values propagate to the
//! rendered output unchanged, and absent optional features (icon, custom
//! font) are skipped silently. Errors arise only on the configuration
//! import surface and when writing rendered output.

use std::io;

use thiserror::Error;

/// The main error type for Callout operations.
#[derive(Debug, Error)]
pub enum CalloutError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
