// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rating controller.
//!
//! ## Overview
//!
//! [`Rate`] owns the committed value, the transient hover value, and the value most recently
//! cleared by a re-click. Hosts feed it [`RateInput`] events together with a [`GlyphGeometry`]
//! for the current render pass, and read back [`Rate::glyphs`] and [`Rate::container`] to draw.
//!
//! ## Transitions
//!
//! - Pointer move: resolve a candidate value; adopt it as the hover value unless it equals the
//!   just-cleared value. Always notify `on_hover_change`.
//! - Pointer leave: drop the hover and just-cleared values, notify `on_hover_change(None)`.
//! - Click: leave first, then commit the candidate, or zero when clear-on-reclick applies.
//! - Left/Right: step the value by 0.5 or 1 within `[0, count]` and suppress the key default.
//! - Focus/Blur: track focus and forward to the host.
//!
//! In controlled mode commits only notify; the host re-supplies the value through
//! [`Rate::set_config`] or [`Rate::set_controlled_value`], which overwrite it unconditionally.
//!
//! Disabled widgets ignore every input, matching a container that attaches no listeners.

use alloc::string::String;

use tracing::{debug, trace};

use crate::config::{RateConfig, ValueMode};
use crate::event::{Key, KeyEvent, RateHandlers, RateInput};
use crate::geometry::{GlyphGeometry, star_value};
use crate::glyph::{Glyph, GlyphFlags};

/// Host-side focus control for the widget's container.
pub trait FocusHandle {
    /// Move keyboard focus to the container.
    fn focus(&mut self);
    /// Release keyboard focus from the container.
    fn blur(&mut self);
}

/// What the host needs to render and wire up the container element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerProps {
    /// Effective tab index; `-1` when disabled.
    pub tab_index: i32,
    /// Space-separated class list.
    pub class_name: String,
    /// Whether focus, blur, key, and pointer-leave listeners should be attached.
    pub listening: bool,
}

/// Stateful rating controller.
///
/// ## Usage
///
/// - Build a [`RateConfig`] and optional [`RateHandlers`], then construct with [`Rate::new`].
/// - Call [`Rate::mount`] once the container exists to honor `auto_focus`.
/// - Each frame, render [`Rate::glyphs`] and record their bounds in a
///   [`GlyphRects`](crate::geometry::GlyphRects) (or use a [`RowLayout`](crate::geometry::RowLayout)).
/// - Route input through [`Rate::handle`].
pub struct Rate {
    config: RateConfig,
    handlers: RateHandlers,
    value: f64,
    hover_value: Option<f64>,
    cleared_value: Option<f64>,
    focused: bool,
}

impl core::fmt::Debug for Rate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Rate")
            .field("value", &self.value)
            .field("hover_value", &self.hover_value)
            .field("cleared_value", &self.cleared_value)
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}

impl Rate {
    /// Create a controller without callbacks.
    pub fn new(config: RateConfig) -> Self {
        Self::with_handlers(config, RateHandlers::default())
    }

    /// Create a controller with host callbacks.
    pub fn with_handlers(config: RateConfig, handlers: RateHandlers) -> Self {
        let value = config.resolved_value();
        debug_assert!(
            value.is_finite() && value >= 0.0 && value <= config.max_value(),
            "initial value {value} outside [0, {}]",
            config.count
        );
        Self {
            config,
            handlers,
            value,
            hover_value: None,
            cleared_value: None,
            focused: false,
        }
    }

    /// Replace the host callbacks.
    pub fn set_handlers(&mut self, handlers: RateHandlers) {
        self.handlers = handlers;
    }

    /// Current configuration.
    pub fn config(&self) -> &RateConfig {
        &self.config
    }

    /// Replace the configuration, as on a host re-render.
    ///
    /// In controlled mode the value is overwritten with the supplied value (or the default when
    /// none is supplied). In uncontrolled mode the value and any hover value are clamped to the
    /// new `count`. Disabling drops any active hover. No notifications fire.
    pub fn set_config(&mut self, config: RateConfig) {
        self.config = config;
        let max = self.config.max_value();
        if self.config.is_controlled() {
            self.mirror_controlled_value();
        } else if self.value > max {
            debug!(value = self.value, max, "rate value clamped");
            self.value = max;
        }
        if self.config.disabled {
            self.hover_value = None;
            self.cleared_value = None;
        } else {
            self.hover_value = self.hover_value.map(|v| v.min(max));
            self.cleared_value = self.cleared_value.filter(|&v| v <= max);
        }
    }

    /// Supply a new controlled value, switching to controlled mode if necessary.
    pub fn set_controlled_value(&mut self, value: Option<f64>) {
        self.config.mode = ValueMode::Controlled(value);
        self.mirror_controlled_value();
    }

    /// Committed rating value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value implied by the current pointer position, if hovering.
    pub fn hover_value(&self) -> Option<f64> {
        self.hover_value
    }

    /// Value most recently reset by clear-on-reclick, while its hover is suppressed.
    pub fn cleared_value(&self) -> Option<f64> {
        self.cleared_value
    }

    /// Value glyphs are drawn against: the hover value if present, else the committed value.
    pub fn display_value(&self) -> f64 {
        self.hover_value.unwrap_or(self.value)
    }

    /// Whether the widget has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the widget is disabled.
    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Glyphs for the current render pass, in index order.
    pub fn glyphs(&self) -> impl Iterator<Item = Glyph<'_>> {
        let value = self.display_value();
        let flags = self.glyph_flags();
        (0..self.config.count).map(move |index| Glyph {
            index,
            value,
            flags,
            character: &self.config.character,
            prefix: &self.config.prefix,
        })
    }

    /// Container rendering and wiring information.
    pub fn container(&self) -> ContainerProps {
        let prefix = &self.config.prefix;
        let mut class_name = prefix.clone();
        if self.config.disabled {
            class_name.push(' ');
            class_name.push_str(prefix);
            class_name.push_str("-disabled");
        }
        if let Some(extra) = &self.config.class_name {
            class_name.push(' ');
            class_name.push_str(extra);
        }
        ContainerProps {
            tab_index: self.config.effective_tab_index(),
            class_name,
            listening: !self.config.disabled,
        }
    }

    /// Run mount-time behavior: acquire focus when `auto_focus` is set and not disabled.
    pub fn mount<F: FocusHandle + ?Sized>(&self, handle: &mut F) {
        if self.config.auto_focus {
            self.focus(handle);
        }
    }

    /// Imperatively focus the container. No-op when disabled.
    pub fn focus<F: FocusHandle + ?Sized>(&self, handle: &mut F) {
        if !self.config.disabled {
            handle.focus();
        }
    }

    /// Imperatively blur the container. No-op when disabled.
    pub fn blur<F: FocusHandle + ?Sized>(&self, handle: &mut F) {
        if !self.config.disabled {
            handle.blur();
        }
    }

    /// Process one input event to completion.
    ///
    /// `geometry` supplies glyph bounds from the most recent render pass; it is consulted only
    /// for pointer events with half steps enabled.
    ///
    /// Returns `true` when the host should suppress the event's default action (arrow keys that
    /// changed the value). Disabled widgets ignore all input and return `false`.
    pub fn handle<G: GlyphGeometry + ?Sized>(&mut self, input: RateInput, geometry: &G) -> bool {
        if self.config.disabled {
            return false;
        }
        match input {
            RateInput::PointerMove { index, x } => {
                self.pointer_move(index, x, geometry);
                false
            }
            RateInput::PointerLeave => {
                self.pointer_leave();
                false
            }
            RateInput::Click { index, x } => {
                self.click(index, x, geometry);
                false
            }
            RateInput::KeyDown(key) => self.key_down(key),
            RateInput::Focus => {
                self.focused = true;
                trace!("rate focus");
                self.handlers.emit_focus();
                false
            }
            RateInput::Blur => {
                self.focused = false;
                trace!("rate blur");
                self.handlers.emit_blur();
                false
            }
        }
    }

    fn glyph_flags(&self) -> GlyphFlags {
        let mut flags = GlyphFlags::empty();
        flags.set(GlyphFlags::ALLOW_HALF, self.config.allow_half);
        flags.set(GlyphFlags::FOCUSED, self.focused);
        flags.set(GlyphFlags::DISABLED, self.config.disabled);
        flags
    }

    fn candidate<G: GlyphGeometry + ?Sized>(&self, index: usize, x: f64, geometry: &G) -> f64 {
        debug_assert!(
            index < self.config.count,
            "glyph index {index} out of range for count {}",
            self.config.count
        );
        star_value(index, x, self.config.allow_half, geometry)
    }

    fn pointer_move<G: GlyphGeometry + ?Sized>(&mut self, index: usize, x: f64, geometry: &G) {
        let candidate = self.candidate(index, x, geometry);
        if Some(candidate) != self.cleared_value {
            self.hover_value = Some(candidate);
            self.cleared_value = None;
        }
        trace!(index, candidate, "rate hover");
        self.handlers.emit_hover_change(Some(candidate));
    }

    fn pointer_leave(&mut self) {
        self.hover_value = None;
        self.cleared_value = None;
        trace!("rate leave");
        self.handlers.emit_hover_change(None);
    }

    fn click<G: GlyphGeometry + ?Sized>(&mut self, index: usize, x: f64, geometry: &G) {
        let candidate = self.candidate(index, x, geometry);
        let reset = self.config.allow_clear && candidate == self.value;
        trace!(index, candidate, reset, "rate click");
        self.pointer_leave();
        self.commit(if reset { 0.0 } else { candidate });
        self.cleared_value = reset.then_some(candidate);
    }

    fn key_down(&mut self, key: Key) -> bool {
        let mut event = KeyEvent::new(key);
        let step = self.config.step();
        match key {
            Key::Right if self.value < self.config.max_value() => {
                self.commit(self.value + step);
                event.prevent_default();
            }
            Key::Left if self.value > 0.0 => {
                self.commit(self.value - step);
                event.prevent_default();
            }
            _ => {}
        }
        trace!(?key, prevented = event.is_default_prevented(), "rate key");
        self.handlers.emit_key_down(&event);
        event.is_default_prevented()
    }

    fn commit(&mut self, value: f64) {
        if self.config.is_controlled() {
            debug!(value, "rate change (controlled)");
        } else {
            debug!(value, "rate change");
            self.value = value;
        }
        self.handlers.emit_change(value);
    }

    fn mirror_controlled_value(&mut self) {
        self.value = self.config.resolved_value();
        debug!(value = self.value, "rate controlled value");
    }
}
