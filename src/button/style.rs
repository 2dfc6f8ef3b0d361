//! Style resolution for the button.
//!
//! [`resolve`] maps the button's input flags to a utility class string and
//! the accessibility attributes that go with it. It is pure: the same input
//! always yields the same [`Resolution`], so callers may cache by
//! [`StyleInput`].

use serde::{Deserialize, Serialize};

use super::variant::{ButtonSize, ButtonVariant, Tone};

/// Tokens present on every button.
pub const BASE_CLASSES: &str = "inline-flex items-center justify-center whitespace-nowrap \
                                font-semibold transition-colors focus-visible:outline-none \
                                focus-visible:ring-4 disabled:pointer-events-none \
                                disabled:cursor-not-allowed disabled:opacity-50";

/// Size tokens used by both link variants, whatever size was requested.
pub const LINK_SIZE_CLASSES: &str = "h-5 gap-1.5 p-0 text-sm";

/// Corner rounding for every non-link variant.
pub const ROUNDED_CLASS: &str = "rounded-lg";

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-9 gap-1 px-3 py-2 text-sm",
            Self::Md => "h-10 gap-1 px-3.5 py-2.5 text-sm",
        }
    }
}

impl ButtonVariant {
    /// Get CSS classes for this variant in the given tone.
    #[must_use]
    pub fn classes(self, tone: Tone) -> &'static str {
        match (self, tone) {
            (Self::Primary, Tone::Normal) => {
                "bg-brand-600 text-white shadow-xs hover:bg-brand-700 focus-visible:ring-brand-100"
            }
            (Self::Primary, Tone::Destructive) => {
                "bg-error-600 text-white shadow-xs hover:bg-error-700 focus-visible:ring-error-100"
            }
            (Self::Secondary, Tone::Normal) => {
                "border border-gray-300 bg-white text-gray-700 shadow-xs hover:bg-gray-50 \
                 hover:text-gray-800 focus-visible:ring-gray-100"
            }
            (Self::Secondary, Tone::Destructive) => {
                "border border-error-300 bg-white text-error-700 shadow-xs hover:bg-error-50 \
                 hover:text-error-800 focus-visible:ring-error-100"
            }
            (Self::Outline, Tone::Normal) => {
                "border border-brand-300 bg-transparent text-brand-700 hover:bg-brand-50 \
                 focus-visible:ring-brand-100"
            }
            (Self::Outline, Tone::Destructive) => {
                "border border-error-300 bg-transparent text-error-700 hover:bg-error-50 \
                 focus-visible:ring-error-100"
            }
            (Self::Ghost, Tone::Normal) => {
                "bg-transparent text-gray-600 hover:bg-gray-50 hover:text-gray-700 \
                 focus-visible:ring-gray-100"
            }
            (Self::Ghost, Tone::Destructive) => {
                "bg-transparent text-error-700 hover:bg-error-50 hover:text-error-800 \
                 focus-visible:ring-error-100"
            }
            (Self::Link, Tone::Normal) => {
                "text-brand-700 underline-offset-4 hover:text-brand-800 hover:underline"
            }
            (Self::Link, Tone::Destructive) => {
                "text-error-700 underline-offset-4 hover:text-error-800 hover:underline"
            }
            (Self::LinkSecondary, Tone::Normal) => {
                "text-gray-600 underline-offset-4 hover:text-gray-700 hover:underline"
            }
            (Self::LinkSecondary, Tone::Destructive) => {
                "text-error-600 underline-offset-4 hover:text-error-700 hover:underline"
            }
        }
    }

    /// Size tokens for this variant. Link variants always use the compact
    /// link size.
    #[must_use]
    pub fn size_classes(self, size: ButtonSize) -> &'static str {
        if self.is_link() {
            LINK_SIZE_CLASSES
        } else {
            size.classes()
        }
    }

    /// Shape token for this variant, if any.
    #[must_use]
    pub fn shape_class(self) -> Option<&'static str> {
        (!self.is_link()).then_some(ROUNDED_CLASS)
    }
}

/// The five flags that drive style resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleInput {
    /// Visual treatment family.
    pub variant: ButtonVariant,
    /// Height and padding.
    pub size: ButtonSize,
    /// Use the destructive tone.
    pub destructive: bool,
    /// Caller-set disabled flag.
    pub disabled: bool,
    /// Caller-set loading flag.
    pub loading: bool,
}

impl StyleInput {
    /// Tone derived from the destructive flag.
    #[must_use]
    pub fn tone(&self) -> Tone {
        Tone::from_destructive(self.destructive)
    }

    /// Whether the control accepts interaction.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        !(self.disabled || self.loading)
    }

    /// Compose the class string, with `extra` appended last so caller
    /// classes win by cascade order.
    #[must_use]
    pub fn class_string(&self, extra: &str) -> String {
        let groups = [
            BASE_CLASSES,
            self.variant.size_classes(self.size),
            self.variant.classes(self.tone()),
            self.variant.shape_class().unwrap_or_default(),
            extra,
        ];

        groups
            .iter()
            .flat_map(|group| group.split_whitespace())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Accessibility attributes derived for one render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AriaAttributes {
    /// `aria-label`, passed through from the caller.
    pub label: Option<String>,
    /// `aria-disabled`; always the inverse of interactivity.
    pub disabled: bool,
    /// `aria-busy`; always equal to the loading flag.
    pub busy: bool,
}

/// Output of [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Final class string.
    pub class: String,
    /// `false` when disabled or loading.
    pub interactive: bool,
    /// Derived accessibility attributes.
    pub aria: AriaAttributes,
}

/// Resolve the class string and accessibility attributes for a button.
///
/// # Example
///
/// ```
/// use design_button::button::{ButtonVariant, StyleInput, resolve};
///
/// let input = StyleInput {
///     variant: ButtonVariant::Link,
///     loading: true,
///     ..StyleInput::default()
/// };
/// let resolution = resolve(input, "ml-2", None);
///
/// assert!(resolution.class.ends_with("ml-2"));
/// assert!(!resolution.interactive);
/// assert!(resolution.aria.busy);
/// ```
#[must_use]
pub fn resolve(input: StyleInput, extra_class: &str, aria_label: Option<&str>) -> Resolution {
    let interactive = input.is_interactive();

    Resolution {
        class: input.class_string(extra_class),
        interactive,
        aria: AriaAttributes {
            label: aria_label.map(ToString::to_string),
            disabled: !interactive,
            busy: input.loading,
        },
    }
}
