//! Inline SVG icons.
//!
//! Icons render as inline SVG using `currentColor`, so they follow the
//! button's text color in every variant and tone.

use std::fmt;
use std::str::FromStr;

use maud::{Markup, PreEscaped, html};
use serde::Serialize;

use crate::error::ButtonError;

/// Common icon size class.
const ICON_SIZE: &str = "h-4 w-4";

/// Icons shipped with the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    /// Arrow pointing right.
    ArrowRight,
    /// Arrow pointing left.
    ArrowLeft,
    /// Plus sign.
    Plus,
    /// Trash can.
    Trash,
    /// Check mark.
    Check,
    /// Close cross.
    X,
    /// Paper plane.
    Send,
}

impl IconName {
    /// Every icon, in catalog order.
    pub const ALL: [Self; 7] = [
        Self::ArrowRight,
        Self::ArrowLeft,
        Self::Plus,
        Self::Trash,
        Self::Check,
        Self::X,
        Self::Send,
    ];

    /// Wire name of this icon.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ArrowRight => "arrow-right",
            Self::ArrowLeft => "arrow-left",
            Self::Plus => "plus",
            Self::Trash => "trash",
            Self::Check => "check",
            Self::X => "x",
            Self::Send => "send",
        }
    }

    fn body(self) -> &'static str {
        match self {
            Self::ArrowRight => r#"<line x1="5" y1="12" x2="19" y2="12"/><polyline points="12 5 19 12 12 19"/>"#,
            Self::ArrowLeft => r#"<line x1="19" y1="12" x2="5" y2="12"/><polyline points="12 19 5 12 12 5"/>"#,
            Self::Plus => r#"<line x1="12" y1="5" x2="12" y2="19"/><line x1="5" y1="12" x2="19" y2="12"/>"#,
            Self::Trash => r#"<polyline points="3 6 5 6 21 6"/><path d="M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6"/><path d="M10 11v6"/><path d="M14 11v6"/><path d="M9 6V4a1 1 0 0 1 1-1h4a1 1 0 0 1 1 1v2"/>"#,
            Self::Check => r#"<polyline points="20 6 9 17 4 12"/>"#,
            Self::X => r#"<line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/>"#,
            Self::Send => r#"<line x1="22" y1="2" x2="11" y2="13"/><polygon points="22 2 15 22 11 13 2 9 22 2"/>"#,
        }
    }

    /// Render this icon.
    #[must_use]
    pub fn render(self) -> Markup {
        svg(ICON_SIZE, self.body())
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconName {
    type Err = ButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| ButtonError::UnknownIcon(s.to_string()))
    }
}

/// Loader/spinner icon.
#[must_use]
pub fn loader_icon() -> Markup {
    svg(
        &format!("{ICON_SIZE} animate-spin"),
        r#"<path d="M21 12a9 9 0 1 1-6.219-8.56"/>"#,
    )
}

fn svg(class: &str, body: &'static str) -> Markup {
    html! {
        svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=(class)
        {
            (PreEscaped(body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_names_parse() {
        for icon in IconName::ALL {
            assert_eq!(icon.as_str().parse::<IconName>(), Ok(icon));
        }
        assert_eq!(
            "star".parse::<IconName>(),
            Err(ButtonError::UnknownIcon("star".to_string()))
        );
    }

    #[test]
    fn test_loader_spins() {
        let html = loader_icon().into_string();
        assert!(html.starts_with("<svg"));
        assert!(html.contains(r#"class="h-4 w-4 animate-spin""#));
    }

    #[test]
    fn test_icons_are_decorative() {
        assert!(IconName::Trash.render().into_string().contains(r#"aria-hidden="true""#));
    }
}
