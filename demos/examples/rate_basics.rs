// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rating basics.
//!
//! Hovers, clicks, re-clicks to clear, and steps with the arrow keys on an
//! uncontrolled five-glyph widget, printing a text rendering after each step.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_rating_demos --example rate_basics`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Size};
use tracing_subscriber::EnvFilter;
use understory_rating::{Fill, Key, Rate, RateConfig, RateHandlers, RateInput, RowLayout};

fn render(rate: &Rate) -> String {
    rate.glyphs()
        .map(|g| match g.fill() {
            Fill::Full => g.character,
            Fill::Half | Fill::Empty => "\u{2606}",
        })
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = changes.clone();
    let handlers = RateHandlers::new()
        .on_change(move |v| sink.borrow_mut().push(v))
        .on_hover_change(|v| println!("  hover -> {v:?}"));
    let mut rate = Rate::with_handlers(RateConfig::default(), handlers);

    let row = RowLayout::new(Point::new(10.0, 10.0), Size::new(24.0, 24.0), 4.0, 5);
    let pointer = |rate: &mut Rate, x: f64, click: bool| {
        let pt = Point::new(x, 20.0);
        let Some(index) = row.index_at(pt) else {
            return;
        };
        let glyph = rate.glyphs().nth(index);
        let input = glyph.and_then(|g| if click { g.click(x) } else { g.pointer_move(x) });
        if let Some(input) = input {
            rate.handle(input, &row);
        }
    };

    println!("== Hover the third glyph ==");
    pointer(&mut rate, 70.0, false);
    println!("  {}", render(&rate));

    println!("== Click it ==");
    pointer(&mut rate, 70.0, true);
    println!("  {}  value={}", render(&rate), rate.value());

    println!("== Click it again (clears) ==");
    pointer(&mut rate, 70.0, true);
    pointer(&mut rate, 71.0, false);
    println!("  {}  value={}", render(&rate), rate.value());

    println!("== Leave, then arrow right twice ==");
    rate.handle(RateInput::PointerLeave, &row);
    rate.handle(RateInput::KeyDown(Key::Right), &row);
    rate.handle(RateInput::KeyDown(Key::Right), &row);
    println!("  {}  value={}", render(&rate), rate.value());

    assert_eq!(*changes.borrow(), vec![3.0, 0.0, 1.0, 2.0]);
    assert_eq!(rate.value(), 2.0);
}
