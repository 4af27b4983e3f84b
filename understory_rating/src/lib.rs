// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_rating --heading-base-level=0

//! Understory Rating: a deterministic, `no_std` controller for star-rating widgets.
//!
//! ## Overview
//!
//! A rating widget is a row of `count` glyphs that maps pointer and keyboard input to a value in
//! `[0, count]`, stepped by 1 or, with half steps, by 0.5.
//! This crate owns the state machine behind such a widget and leaves drawing to the host.
//!
//! - [`Rate`] owns the committed value, the hover value, and the clear-on-reclick bookkeeping.
//! - [`Glyph`] describes one glyph for a render pass: its [`Fill`], class list, and how it
//!   forwards pointer events.
//! - [`GlyphGeometry`] is the seam to the presentation layer: it maps a glyph index to the
//!   [`kurbo::Rect`] it was drawn in, so the controller can tell the left half from the right.
//!
//! ## Workflow
//!
//! 1) Render — iterate [`Rate::glyphs`], draw each one, and record its bounds in a
//!    [`GlyphRects`] (or describe a uniform row with [`RowLayout`]).
//! 2) Route — hit test the pointer to a glyph and ask that glyph for a [`RateInput`]
//!    ([`Glyph::pointer_move`], [`Glyph::click`]). Container-level events
//!    (pointer leave, keys, focus) are built directly.
//! 3) Handle — pass the input and the geometry to [`Rate::handle`]. Callbacks in
//!    [`RateHandlers`] fire synchronously before it returns.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Size};
//! use understory_rating::{Rate, RateConfig, RateHandlers, RowLayout};
//!
//! let committed = Rc::new(Cell::new(None));
//! let sink = committed.clone();
//! let mut rate = Rate::with_handlers(
//!     RateConfig::default().with_allow_half(true),
//!     RateHandlers::new().on_change(move |v| sink.set(Some(v))),
//! );
//!
//! // Five 24px glyphs starting at the origin.
//! let row = RowLayout::new(Point::ZERO, Size::new(24.0, 24.0), 0.0, 5);
//! let pointer = Point::new(80.0, 12.0);
//!
//! let index = row.index_at(pointer).unwrap();
//! let glyph = rate.glyphs().nth(index).unwrap();
//! let input = glyph.click(pointer.x).unwrap();
//! rate.handle(input, &row);
//!
//! // 80px lands in the left half of the fourth glyph.
//! assert_eq!(rate.value(), 3.5);
//! assert_eq!(committed.get(), Some(3.5));
//! ```
//!
//! ## Controlled mode
//!
//! With [`ValueMode::Controlled`] the host owns the value: commits only notify `on_change`, and
//! the host supplies the new value with [`Rate::set_controlled_value`] or [`Rate::set_config`].
//! Supplied values always overwrite internal state.
//!
//! ## Diagnostics
//!
//! Transitions are reported through [`tracing`] at `trace` level and commits at `debug` level.
//! The crate installs no subscriber.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod event;
pub mod geometry;
pub mod glyph;
pub mod rate;

pub use config::{DEFAULT_CHARACTER, DEFAULT_PREFIX, RateConfig, ValueMode};
pub use event::{Key, KeyEvent, RateHandlers, RateInput};
pub use geometry::{
    GlyphGeometry, GlyphRects, HalfStep, NoGeometry, RowLayout, resolve_half_step, star_value,
};
pub use glyph::{Fill, Glyph, GlyphFlags};
pub use rate::{ContainerProps, FocusHandle, Rate};
