// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Half steps with a per-frame bounds cache.
//!
//! Each frame lays glyphs out with uneven widths, records their bounds in a
//! `GlyphRects`, and routes pointer samples through the glyph under the pointer.
//!
//! Run:
//! - `cargo run -p understory_rating_demos --example rate_half_step`

use kurbo::{Point, Rect};
use understory_rating::{GlyphRects, Rate, RateConfig, RateInput};

fn main() {
    let mut rate = Rate::new(RateConfig::default().with_count(4).with_allow_half(true));
    let mut rects = GlyphRects::new();

    let widths = [20.0, 30.0, 20.0, 40.0];
    let samples = [5.0, 12.0, 31.0, 49.0, 60.0, 75.0, 100.0];

    for x in samples {
        // Rebuild the cache for this frame.
        rects.clear();
        let mut left = 0.0;
        for g in rate.glyphs() {
            let w = widths[g.index];
            rects.set(g.index, Rect::new(left, 0.0, left + w, 20.0));
            left += w;
        }

        let pt = Point::new(x, 10.0);
        if let Some(input) = rects
            .hit_test(pt)
            .and_then(|i| rate.glyphs().nth(i))
            .and_then(|g| g.pointer_move(x))
        {
            rate.handle(input, &rects);
        }
        let classes: Vec<String> = rate.glyphs().map(|g| g.class_name()).collect();
        println!("x={x:>5}: hover={:?}", rate.hover_value());
        for c in classes {
            println!("    {c}");
        }
    }

    // 100 sits in the right half of the last (40px wide) glyph.
    assert_eq!(rate.hover_value(), Some(4.0));

    rate.handle(RateInput::Click { index: 1, x: 25.0 }, &rects);
    assert_eq!(rate.value(), 1.5);
}
