// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single rating glyph: fill derivation, class composition, and pointer forwarding.
//!
//! Glyphs hold no state. The controller re-derives them on every render pass from the current
//! display value (see [`Rate::glyphs`](crate::Rate::glyphs)).

use alloc::string::String;

use crate::event::RateInput;

/// Visual fill level of a glyph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Fill {
    /// Not reached by the displayed value.
    Empty,
    /// The displayed value ends halfway through this glyph.
    Half,
    /// Fully covered by the displayed value.
    Full,
}

impl Fill {
    /// Fill level of glyph `index` for `value`.
    pub fn for_value(index: usize, value: f64, allow_half: bool) -> Self {
        let index = index as f64;
        if value >= index + 1.0 {
            Self::Full
        } else if allow_half && value >= index + 0.5 {
            Self::Half
        } else {
            Self::Empty
        }
    }
}

bitflags::bitflags! {
    /// Render flags shared by every glyph of a widget.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct GlyphFlags: u8 {
        /// Half steps are enabled.
        const ALLOW_HALF = 0b0000_0001;
        /// The widget has keyboard focus.
        const FOCUSED    = 0b0000_0010;
        /// The widget is disabled; pointer events are not forwarded.
        const DISABLED   = 0b0000_0100;
    }
}

/// Description of one glyph for a render pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Glyph<'a> {
    /// Position in the row, starting at 0. Doubles as the glyph's identity.
    pub index: usize,
    /// Display value the glyph is drawn against (hover value if any, else the rating).
    pub value: f64,
    /// Shared render flags.
    pub flags: GlyphFlags,
    /// Glyph content.
    pub character: &'a str,
    /// Class prefix of the owning widget.
    pub prefix: &'a str,
}

impl Glyph<'_> {
    /// Fill level for the current display value.
    pub fn fill(&self) -> Fill {
        Fill::for_value(
            self.index,
            self.value,
            self.flags.contains(GlyphFlags::ALLOW_HALF),
        )
    }

    /// Whether this glyph carries the focus ring.
    ///
    /// While focused, the ring sits on the glyph holding the last step of the value, or on the
    /// first glyph when the value is zero.
    pub fn is_focus_target(&self) -> bool {
        if !self.flags.contains(GlyphFlags::FOCUSED) {
            return false;
        }
        if self.value <= 0.0 {
            return self.index == 0;
        }
        match self.fill() {
            Fill::Half => true,
            Fill::Full => self.value < self.index as f64 + 1.5,
            Fill::Empty => false,
        }
    }

    /// Space-separated class list, e.g. `understory-rate-star understory-rate-star-full`.
    pub fn class_name(&self) -> String {
        let mut out = String::new();
        let mut push = |suffix: &str| {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(self.prefix);
            out.push_str(suffix);
        };
        push("-star");
        match self.fill() {
            Fill::Full => push("-star-full"),
            Fill::Half => {
                push("-star-half");
                push("-star-active");
            }
            Fill::Empty => push("-star-zero"),
        }
        if self.is_focus_target() {
            push("-star-focused");
        }
        out
    }

    /// Forward a pointer move at world `x`, unless disabled.
    pub fn pointer_move(&self, x: f64) -> Option<RateInput> {
        (!self.flags.contains(GlyphFlags::DISABLED)).then_some(RateInput::PointerMove {
            index: self.index,
            x,
        })
    }

    /// Forward a click at world `x`, unless disabled.
    pub fn click(&self, x: f64) -> Option<RateInput> {
        (!self.flags.contains(GlyphFlags::DISABLED)).then_some(RateInput::Click {
            index: self.index,
            x,
        })
    }
}
