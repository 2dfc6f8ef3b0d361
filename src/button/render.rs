//! Button rendering.
//!
//! [`Button::plan`] turns the caller's props into a [`RenderPlan`], a
//! framework-agnostic description of one render. [`RenderPlan::to_html`] is
//! the server-side adapter that turns the plan into a `<button>` element.

use maud::{Markup, PreEscaped, html};
use tracing::debug;

use super::icons::loader_icon;
use super::slots::{Slot, SlotLayout, select_slots};
use super::style::{AriaAttributes, StyleInput, resolve};
use super::variant::{ButtonSize, ButtonVariant};

/// Horizontal spacing around the label of non-link variants.
pub const LABEL_PADDING_CLASS: &str = "px-0.5";

/// Attributes the button derives itself. Passthrough values for these are
/// dropped.
const RESERVED_ATTRIBUTES: [&str; 6] = [
    "class",
    "type",
    "disabled",
    "aria-label",
    "aria-disabled",
    "aria-busy",
];

/// Start of the element `to_html` produces; passthrough attributes follow it.
const BUTTON_OPEN: &str = "<button";

/// Builder for one button render.
///
/// # Example
///
/// ```
/// use design_button::button::{Button, ButtonVariant, IconName};
/// use maud::html;
///
/// let html = Button::new()
///     .variant(ButtonVariant::Secondary)
///     .loading(true)
///     .right_icon(IconName::ArrowRight.render())
///     .child(html! { "Continue" })
///     .render()
///     .into_string();
///
/// assert!(html.contains(r#"aria-busy="true""#));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Button {
    style: StyleInput,
    class: String,
    aria_label: Option<String>,
    button_type: Option<String>,
    left_icon: Option<Markup>,
    right_icon: Option<Markup>,
    children: Option<Markup>,
    attributes: Vec<(String, String)>,
}

impl Button {
    /// Create a primary, medium, enabled button with no content.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a button from already-collected style flags.
    #[must_use]
    pub fn from_style(style: StyleInput) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Set the visual variant.
    #[must_use]
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.style.variant = variant;
        self
    }

    /// Set the size.
    #[must_use]
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.style.size = size;
        self
    }

    /// Use the destructive tone.
    #[must_use]
    pub fn destructive(mut self, destructive: bool) -> Self {
        self.style.destructive = destructive;
        self
    }

    /// Disable the button.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.style.disabled = disabled;
        self
    }

    /// Show the loading spinner and block interaction.
    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.style.loading = loading;
        self
    }

    /// Additional CSS classes, appended after the computed ones.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Set `aria-label`.
    #[must_use]
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// Button type attribute. Defaults to `button`.
    #[must_use]
    pub fn button_type(mut self, button_type: impl Into<String>) -> Self {
        self.button_type = Some(button_type.into());
        self
    }

    /// Icon rendered before the label.
    #[must_use]
    pub fn left_icon(mut self, icon: Markup) -> Self {
        self.left_icon = Some(icon);
        self
    }

    /// Icon rendered after the label.
    #[must_use]
    pub fn right_icon(mut self, icon: Markup) -> Self {
        self.right_icon = Some(icon);
        self
    }

    /// Button content.
    #[must_use]
    pub fn child(mut self, children: Markup) -> Self {
        self.children = Some(children);
        self
    }

    /// Native attribute passed through to the element, such as `name`,
    /// `form` or `hx-post`.
    ///
    /// Names outside the attribute-name grammar and names the button
    /// derives itself are dropped when the plan is built.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Style flags of this button.
    #[must_use]
    pub fn style(&self) -> StyleInput {
        self.style
    }

    /// Compute the render plan.
    #[must_use]
    pub fn plan(&self) -> RenderPlan<'_> {
        let resolution = resolve(self.style, &self.class, self.aria_label.as_deref());

        let attributes = self
            .attributes
            .iter()
            .filter_map(|(name, value)| passthrough_name(name).map(|name| (name, value.as_str())))
            .collect();

        let label = self.children.as_ref().map(|children| Label {
            content: children,
            padded: !self.style.variant.is_link(),
        });

        RenderPlan {
            button_type: self.button_type.as_deref().unwrap_or("button"),
            class: resolution.class,
            disabled: !resolution.interactive,
            aria: resolution.aria,
            attributes,
            slots: select_slots(
                self.style.loading,
                self.left_icon.as_ref(),
                self.right_icon.as_ref(),
            ),
            label,
        }
    }

    /// Render to HTML.
    #[must_use]
    pub fn render(&self) -> Markup {
        self.plan().to_html()
    }
}

/// Accept a passthrough attribute name, returning it trimmed.
fn passthrough_name(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    if !is_attribute_name(trimmed) {
        debug!(attribute = %name, "Ignoring malformed button attribute");
        return None;
    }
    if RESERVED_ATTRIBUTES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(trimmed))
    {
        debug!(attribute = %trimmed, "Ignoring reserved button attribute");
        return None;
    }
    Some(trimmed)
}

/// Attribute names: a letter, `_`, `:` or `@`, then letters, digits, `-`,
/// `_`, `:` or `.`. Covers `data-*`, `hx-*`, `x-on:click` and `@click.prevent`.
fn is_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '_' | ':' | '@'))
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}

/// Label placement within the plan.
#[derive(Debug, Clone, Copy)]
pub struct Label<'a> {
    /// Caller content.
    pub content: &'a Markup,
    /// Wrap with [`LABEL_PADDING_CLASS`].
    pub padded: bool,
}

/// Everything needed to produce one button element.
#[derive(Debug, Clone)]
pub struct RenderPlan<'a> {
    /// `type` attribute.
    pub button_type: &'a str,
    /// Resolved class string.
    pub class: String,
    /// Native disabled state; always equals `aria.disabled`.
    pub disabled: bool,
    /// Accessibility attributes.
    pub aria: AriaAttributes,
    /// Validated passthrough attributes in insertion order.
    pub attributes: Vec<(&'a str, &'a str)>,
    /// Icon slot contents.
    pub slots: SlotLayout<'a>,
    /// Label, if any.
    pub label: Option<Label<'a>>,
}

impl RenderPlan<'_> {
    /// Render the plan as a single `<button>` element.
    #[must_use]
    pub fn to_html(&self) -> Markup {
        let element = html! {
            button
                type=(self.button_type)
                class=(self.class)
                aria-label=[self.aria.label.as_deref()]
                aria-disabled=(flag(self.aria.disabled))
                aria-busy=(flag(self.aria.busy))
                disabled[self.disabled]
            {
                (slot(self.slots.left))
                @if let Some(label) = self.label {
                    @if label.padded {
                        span class=(LABEL_PADDING_CLASS) { (label.content) }
                    } @else {
                        (label.content)
                    }
                }
                (slot(self.slots.right))
            }
        };

        self.splice_attributes(element)
    }

    /// maud attribute names are fixed at compile time, so the validated
    /// passthrough attributes go in right after `<button`.
    fn splice_attributes(&self, element: Markup) -> Markup {
        if self.attributes.is_empty() {
            return element;
        }

        let mut extra = String::new();
        for (name, value) in &self.attributes {
            extra.push(' ');
            extra.push_str(name);
            extra.push_str("=\"");
            extra.push_str(&html! { (value) }.into_string());
            extra.push('"');
        }

        let mut html = element.into_string();
        html.insert_str(BUTTON_OPEN.len(), &extra);
        PreEscaped(html)
    }
}

fn flag(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn slot(slot: Slot<'_>) -> Markup {
    html! {
        @match slot {
            Slot::Empty => {},
            Slot::Icon(icon) => { (icon) },
            Slot::Spinner => { (loader_icon()) },
        }
    }
}
