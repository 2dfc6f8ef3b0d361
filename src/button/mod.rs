//! The design-system button.
//!
//! The button is a pure mapping from a handful of flags to a class string,
//! accessibility attributes and a markup tree:
//!
//! - [`resolve`]: variant, size, tone and interaction flags to classes and ARIA
//! - [`select_slots`]: where the loading spinner goes
//! - [`Button`]: builder producing a [`RenderPlan`] and its HTML
//! - [`icons`]: inline SVG icons, including the spinner

pub mod icons;
mod render;
mod slots;
mod style;
mod variant;

pub use icons::{IconName, loader_icon};
pub use maud::Markup;
pub use render::{Button, LABEL_PADDING_CLASS, Label, RenderPlan};
pub use slots::{Slot, SlotLayout, select_slots};
pub use style::{
    AriaAttributes, BASE_CLASSES, LINK_SIZE_CLASSES, ROUNDED_CLASS, Resolution, StyleInput,
    resolve,
};
pub use variant::{ButtonSize, ButtonVariant, Tone};
