// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inputs consumed by the controller and the host callbacks it notifies.

use alloc::boxed::Box;

/// Key code of the left arrow key.
pub const KEY_CODE_LEFT: u32 = 37;
/// Key code of the right arrow key.
pub const KEY_CODE_RIGHT: u32 = 39;

/// A key as seen by the controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left arrow: step the value down.
    Left,
    /// Right arrow: step the value up.
    Right,
    /// Any other key, carrying its raw key code. Forwarded untouched.
    Other(u32),
}

impl Key {
    /// Map a raw key code.
    pub fn from_key_code(code: u32) -> Self {
        match code {
            KEY_CODE_LEFT => Self::Left,
            KEY_CODE_RIGHT => Self::Right,
            other => Self::Other(other),
        }
    }
}

/// A key press as forwarded to [`RateHandlers::on_key_down`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// The pressed key.
    pub key: Key,
    default_prevented: bool,
}

impl KeyEvent {
    /// Wrap a key press.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            default_prevented: false,
        }
    }

    /// Suppress the host's default action for this key (for example scrolling).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether the default action was suppressed.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Raw input delivered to [`Rate::handle`](crate::Rate::handle).
///
/// Pointer moves and clicks usually come from [`Glyph::pointer_move`](crate::Glyph::pointer_move)
/// and [`Glyph::click`](crate::Glyph::click), which already drop events for disabled glyphs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RateInput {
    /// Pointer moved over glyph `index` at world x-coordinate `x`.
    PointerMove {
        /// Glyph index.
        index: usize,
        /// Pointer x in the same space as the glyph geometry.
        x: f64,
    },
    /// Pointer left the widget.
    PointerLeave,
    /// Pointer clicked glyph `index` at world x-coordinate `x`.
    Click {
        /// Glyph index.
        index: usize,
        /// Pointer x in the same space as the glyph geometry.
        x: f64,
    },
    /// A key was pressed while focused.
    KeyDown(Key),
    /// The widget gained keyboard focus.
    Focus,
    /// The widget lost keyboard focus.
    Blur,
}

/// Optional host callbacks.
///
/// Every callback is optional; absent callbacks are skipped.
#[derive(Default)]
pub struct RateHandlers {
    /// Called with the newly committed value on every commit.
    pub on_change: Option<Box<dyn FnMut(f64)>>,
    /// Called on every hover notification; `None` when hover ends.
    pub on_hover_change: Option<Box<dyn FnMut(Option<f64>)>>,
    /// Called when the widget gains focus.
    pub on_focus: Option<Box<dyn FnMut()>>,
    /// Called when the widget loses focus.
    pub on_blur: Option<Box<dyn FnMut()>>,
    /// Called for every key press after the controller processed it.
    pub on_key_down: Option<Box<dyn FnMut(&KeyEvent)>>,
}

impl core::fmt::Debug for RateHandlers {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RateHandlers")
            .field("on_change", &self.on_change.is_some())
            .field("on_hover_change", &self.on_hover_change.is_some())
            .field("on_focus", &self.on_focus.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .field("on_key_down", &self.on_key_down.is_some())
            .finish()
    }
}

impl RateHandlers {
    /// No callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the change callback.
    pub fn on_change(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Set the hover callback.
    pub fn on_hover_change(mut self, f: impl FnMut(Option<f64>) + 'static) -> Self {
        self.on_hover_change = Some(Box::new(f));
        self
    }

    /// Set the focus callback.
    pub fn on_focus(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_focus = Some(Box::new(f));
        self
    }

    /// Set the blur callback.
    pub fn on_blur(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_blur = Some(Box::new(f));
        self
    }

    /// Set the key-down callback.
    pub fn on_key_down(mut self, f: impl FnMut(&KeyEvent) + 'static) -> Self {
        self.on_key_down = Some(Box::new(f));
        self
    }

    pub(crate) fn emit_change(&mut self, value: f64) {
        if let Some(f) = self.on_change.as_mut() {
            f(value);
        }
    }

    pub(crate) fn emit_hover_change(&mut self, value: Option<f64>) {
        if let Some(f) = self.on_hover_change.as_mut() {
            f(value);
        }
    }

    pub(crate) fn emit_focus(&mut self) {
        if let Some(f) = self.on_focus.as_mut() {
            f();
        }
    }

    pub(crate) fn emit_blur(&mut self) {
        if let Some(f) = self.on_blur.as_mut() {
            f();
        }
    }

    pub(crate) fn emit_key_down(&mut self, event: &KeyEvent) {
        if let Some(f) = self.on_key_down.as_mut() {
            f(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn key_codes() {
        assert_eq!(Key::from_key_code(37), Key::Left);
        assert_eq!(Key::from_key_code(39), Key::Right);
        assert_eq!(Key::from_key_code(13), Key::Other(13));
    }

    #[test]
    fn prevent_default_sticks() {
        let mut ev = KeyEvent::new(Key::Right);
        assert!(!ev.is_default_prevented());
        ev.prevent_default();
        ev.prevent_default();
        assert!(ev.is_default_prevented());
    }

    #[test]
    fn absent_handlers_are_skipped() {
        let mut h = RateHandlers::new();
        h.emit_change(1.0);
        h.emit_hover_change(None);
        h.emit_focus();
        h.emit_blur();
        h.emit_key_down(&KeyEvent::new(Key::Left));
    }

    #[test]
    fn present_handlers_are_called() {
        let last = Rc::new(Cell::new(0.0));
        let sink = last.clone();
        let mut h = RateHandlers::new().on_change(move |v| sink.set(v));
        h.emit_change(3.5);
        assert_eq!(last.get(), 3.5);
    }
}
