//! Error types for parsing button inputs.
//!
//! Typed callers cannot construct an invalid variant, size or icon. These
//! errors only surface at string boundaries (query strings, config, CLI).

/// Errors that can occur while parsing button inputs from strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ButtonError {
    /// The variant name is not one of the known variants.
    #[error("unknown button variant: {0:?}")]
    UnknownVariant(String),

    /// The size name is not one of the known sizes.
    #[error("unknown button size: {0:?}")]
    UnknownSize(String),

    /// The icon name is not part of the shipped icon set.
    #[error("unknown icon: {0:?}")]
    UnknownIcon(String),
}
