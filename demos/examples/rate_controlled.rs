// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controlled mode.
//!
//! The host keeps the value and echoes each change back into the widget,
//! clamping it to at most three stars.
//!
//! Run:
//! - `cargo run -p understory_rating_demos --example rate_controlled`

use std::cell::Cell;
use std::rc::Rc;

use understory_rating::{Key, NoGeometry, Rate, RateConfig, RateHandlers, RateInput};

fn main() {
    tracing_subscriber::fmt::init();

    let requested = Rc::new(Cell::new(None));
    let sink = requested.clone();
    let mut host_value = 1.0_f64;
    let mut rate = Rate::with_handlers(
        RateConfig::default().with_value(Some(host_value)),
        RateHandlers::new().on_change(move |v| sink.set(Some(v))),
    );

    for _ in 0..4 {
        let prevented = rate.handle(RateInput::KeyDown(Key::Right), &NoGeometry);
        // The widget does not move on its own.
        assert_eq!(rate.value(), host_value);
        if let Some(v) = requested.take() {
            host_value = v.min(3.0);
            rate.set_controlled_value(Some(host_value));
        }
        println!("requested right (prevented={prevented}) -> value={}", rate.value());
    }

    assert_eq!(rate.value(), 3.0);

    // Dropping the host value falls back to the default.
    rate.set_controlled_value(None);
    assert_eq!(rate.value(), 0.0);
}
