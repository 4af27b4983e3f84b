// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-supplied configuration.

use alloc::string::String;

/// Default glyph content.
pub const DEFAULT_CHARACTER: &str = "\u{2605}";

/// Default class prefix for the container and its glyphs.
pub const DEFAULT_PREFIX: &str = "understory-rate";

/// Who owns the committed rating value.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum ValueMode {
    /// The controller owns the value; commits update it directly.
    #[default]
    Uncontrolled,
    /// The host owns the value and re-supplies it after every change notification.
    ///
    /// `None` means the host is in control but currently supplies no value, in which case the
    /// controller mirrors [`RateConfig::default_value`].
    Controlled(Option<f64>),
}

/// Configuration of a rating widget.
///
/// Preconditions, not checked at runtime: `default_value` and any controlled value are finite
/// and lie in `[0, count]`, and are multiples of the step (0.5 with half steps, else 1).
#[derive(Clone, Debug, PartialEq)]
pub struct RateConfig {
    /// Controlled or uncontrolled value ownership.
    pub mode: ValueMode,
    /// Initial value when uncontrolled, and fallback when controlled without a value.
    pub default_value: f64,
    /// Number of glyphs.
    pub count: usize,
    /// Enables 0.5 granularity.
    pub allow_half: bool,
    /// Clicking the glyph matching the current value resets it to zero.
    pub allow_clear: bool,
    /// Disables all interaction.
    pub disabled: bool,
    /// Glyph content.
    pub character: String,
    /// Keyboard focus order of the container.
    pub tab_index: i32,
    /// Acquire focus on mount unless disabled.
    pub auto_focus: bool,
    /// Class prefix for the container and glyph class lists.
    pub prefix: String,
    /// Extra class appended to the container class list.
    pub class_name: Option<String>,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            mode: ValueMode::Uncontrolled,
            default_value: 0.0,
            count: 5,
            allow_half: false,
            allow_clear: true,
            disabled: false,
            character: String::from(DEFAULT_CHARACTER),
            tab_index: 0,
            auto_focus: false,
            prefix: String::from(DEFAULT_PREFIX),
            class_name: None,
        }
    }
}

impl RateConfig {
    /// Put the host in control of the value.
    pub fn with_value(mut self, value: Option<f64>) -> Self {
        self.mode = ValueMode::Controlled(value);
        self
    }

    /// Set the initial/fallback value.
    pub fn with_default_value(mut self, value: f64) -> Self {
        self.default_value = value;
        self
    }

    /// Set the number of glyphs.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Enable or disable half steps.
    pub fn with_allow_half(mut self, allow_half: bool) -> Self {
        self.allow_half = allow_half;
        self
    }

    /// Enable or disable clear-on-reclick.
    pub fn with_allow_clear(mut self, allow_clear: bool) -> Self {
        self.allow_clear = allow_clear;
        self
    }

    /// Enable or disable interaction.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the glyph content.
    pub fn with_character(mut self, character: impl Into<String>) -> Self {
        self.character = character.into();
        self
    }

    /// Set the container's tab index.
    pub fn with_tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = tab_index;
        self
    }

    /// Acquire focus on mount.
    pub fn with_auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    /// Set the class prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Append an extra class to the container.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Whether the host owns the value.
    pub fn is_controlled(&self) -> bool {
        matches!(self.mode, ValueMode::Controlled(_))
    }

    /// The controlled value, or the default value when none is supplied.
    pub fn resolved_value(&self) -> f64 {
        match self.mode {
            ValueMode::Controlled(Some(v)) => v,
            ValueMode::Controlled(None) | ValueMode::Uncontrolled => self.default_value,
        }
    }

    /// Keyboard step size.
    pub fn step(&self) -> f64 {
        if self.allow_half { 0.5 } else { 1.0 }
    }

    /// Upper bound of the value.
    pub fn max_value(&self) -> f64 {
        self.count as f64
    }

    /// Tab index the container should expose; disabled widgets are not focusable.
    pub fn effective_tab_index(&self) -> i32 {
        if self.disabled { -1 } else { self.tab_index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = RateConfig::default();
        assert_eq!(c.mode, ValueMode::Uncontrolled);
        assert_eq!(c.count, 5);
        assert!(!c.allow_half);
        assert!(c.allow_clear);
        assert!(!c.disabled);
        assert_eq!(c.character, "\u{2605}");
        assert_eq!(c.tab_index, 0);
        assert_eq!(c.resolved_value(), 0.0);
        assert_eq!(c.step(), 1.0);
    }

    #[test]
    fn controlled_value_resolution() {
        let c = RateConfig::default().with_default_value(2.0);
        assert!(!c.is_controlled());
        assert_eq!(c.resolved_value(), 2.0);

        let c = c.with_value(Some(4.0));
        assert!(c.is_controlled());
        assert_eq!(c.resolved_value(), 4.0);

        // Controlled without a value falls back to the default.
        let c = c.with_value(None);
        assert!(c.is_controlled());
        assert_eq!(c.resolved_value(), 2.0);
    }

    #[test]
    fn disabled_is_not_tabbable() {
        let c = RateConfig::default().with_tab_index(3);
        assert_eq!(c.effective_tab_index(), 3);
        assert_eq!(c.with_disabled(true).effective_tab_index(), -1);
    }

    #[test]
    fn half_step_size() {
        let c = RateConfig::default().with_allow_half(true).with_count(10);
        assert_eq!(c.step(), 0.5);
        assert_eq!(c.max_value(), 10.0);
    }
}
