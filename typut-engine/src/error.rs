//! Error types for typographic rendering

use crate::style::Style;

/// Errors raised by the transform engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypographyError {
    #[error("style '{style}' maps {ch:?} to U+{value:X}, which is not a scalar value")]
    InvalidCodePoint { style: Style, ch: char, value: u32 },

    #[error("unknown style: '{0}'")]
    UnknownStyle(String),
}

pub type Result<T> = std::result::Result<T, TypographyError>;
