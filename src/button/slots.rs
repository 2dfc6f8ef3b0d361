//! Icon slot selection.
//!
//! While loading, the spinner takes over the right slot if it holds an icon,
//! otherwise the left slot. The other slot is left untouched.

use maud::Markup;

/// What renders in one icon slot.
#[derive(Debug, Clone, Copy)]
pub enum Slot<'a> {
    /// Nothing renders.
    Empty,
    /// The caller's icon, verbatim.
    Icon(&'a Markup),
    /// The loading spinner.
    Spinner,
}

impl PartialEq for Slot<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Empty, Self::Empty) | (Self::Spinner, Self::Spinner) => true,
            (Self::Icon(a), Self::Icon(b)) => a.0 == b.0,
            _ => false,
        }
    }
}

impl Eq for Slot<'_> {}

impl<'a> Slot<'a> {
    fn from_icon(icon: Option<&'a Markup>) -> Self {
        icon.map_or(Self::Empty, Self::Icon)
    }

    /// Whether the spinner occupies this slot.
    #[must_use]
    pub fn is_spinner(&self) -> bool {
        matches!(self, Self::Spinner)
    }
}

/// Contents of both icon slots for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotLayout<'a> {
    /// Slot before the label.
    pub left: Slot<'a>,
    /// Slot after the label.
    pub right: Slot<'a>,
}

/// Decide what renders in each icon slot.
#[must_use]
pub fn select_slots<'a>(
    loading: bool,
    left: Option<&'a Markup>,
    right: Option<&'a Markup>,
) -> SlotLayout<'a> {
    match (loading, right) {
        (true, Some(_)) => SlotLayout {
            left: Slot::from_icon(left),
            right: Slot::Spinner,
        },
        (true, None) => SlotLayout {
            left: Slot::Spinner,
            right: Slot::Empty,
        },
        (false, _) => SlotLayout {
            left: Slot::from_icon(left),
            right: Slot::from_icon(right),
        },
    }
}
