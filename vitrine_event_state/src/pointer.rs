// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer identity and button types.

/// Identifier of a pointer (mouse, pen, or a single touch contact).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// Button that initiated a pointer press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    /// Main button: left mouse button, pen tip or touch contact.
    #[default]
    Primary,
    /// Secondary button, usually the right mouse button.
    Secondary,
    /// Auxiliary button, usually the wheel button.
    Auxiliary,
    /// Any other button, by its platform index.
    Other(u16),
}

impl PointerButton {
    /// Maps a DOM-style button index (`0` primary, `1` auxiliary, `2`
    /// secondary) onto a [`PointerButton`].
    #[must_use]
    pub fn from_index(index: u16) -> Self {
        match index {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            n => Self::Other(n),
        }
    }

    /// Returns `true` for the primary button.
    #[must_use]
    pub fn is_primary(self) -> bool {
        self == Self::Primary
    }
}
