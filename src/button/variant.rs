//! Button variants, sizes and tones.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ButtonError;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    /// Secondary action button.
    Secondary,
    /// Outline button.
    Outline,
    /// Subtle ghost button.
    Ghost,
    /// Link-style button.
    Link,
    /// Muted link-style button.
    #[serde(alias = "link-secondary")]
    LinkSecondary,
}

impl ButtonVariant {
    /// Every variant, in gallery order.
    pub const ALL: [Self; 6] = [
        Self::Primary,
        Self::Secondary,
        Self::Outline,
        Self::Ghost,
        Self::Link,
        Self::LinkSecondary,
    ];

    /// Wire name of this variant.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Link => "link",
            Self::LinkSecondary => "linkSecondary",
        }
    }

    /// Whether this variant renders as an inline link.
    ///
    /// Link variants ignore the requested size, carry no corner rounding
    /// and render their label without extra padding.
    #[must_use]
    pub fn is_link(self) -> bool {
        matches!(self, Self::Link | Self::LinkSecondary)
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonVariant {
    type Err = ButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            "outline" => Ok(Self::Outline),
            "ghost" => Ok(Self::Ghost),
            "link" => Ok(Self::Link),
            "linkSecondary" | "link-secondary" => Ok(Self::LinkSecondary),
            other => Err(ButtonError::UnknownVariant(other.to_string())),
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    /// Small button.
    #[serde(alias = "small")]
    Sm,
    /// Medium button (default).
    #[default]
    #[serde(alias = "medium")]
    Md,
}

impl ButtonSize {
    /// Every size, smallest first.
    pub const ALL: [Self; 2] = [Self::Sm, Self::Md];

    /// Wire name of this size.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonSize {
    type Err = ButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" | "small" => Ok(Self::Sm),
            "md" | "medium" => Ok(Self::Md),
            other => Err(ButtonError::UnknownSize(other.to_string())),
        }
    }
}

/// Coloring axis orthogonal to the variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Regular coloring.
    #[default]
    Normal,
    /// Coloring for destructive actions.
    Destructive,
}

impl Tone {
    /// Derive the tone from the `destructive` flag.
    #[must_use]
    pub fn from_destructive(destructive: bool) -> Self {
        if destructive {
            Self::Destructive
        } else {
            Self::Normal
        }
    }
}
