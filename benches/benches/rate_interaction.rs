// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_rating::{Key, Rate, RateConfig, RateHandlers, RateInput, RowLayout};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_pointer_xs(count: usize, width: f64) -> Vec<f64> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count).map(|_| rng.next_f64() * width).collect()
}

fn row(count: usize) -> RowLayout {
    RowLayout::new(Point::ZERO, Size::new(24.0, 24.0), 4.0, count)
}

fn bench_hover(c: &mut Criterion) {
    let mut group = c.benchmark_group("rate_hover");
    for &count in &[5_usize, 10, 100] {
        let layout = row(count);
        let xs = gen_pointer_xs(1024, layout.bounds().width());
        let rects = layout.to_rects();
        group.throughput(Throughput::Elements(xs.len() as u64));

        group.bench_function(format!("row_layout_half_n{count}"), |b| {
            let mut rate = Rate::new(
                RateConfig::default()
                    .with_count(count)
                    .with_allow_half(true),
            );
            b.iter(|| {
                for &x in &xs {
                    if let Some(index) = layout.index_at(Point::new(x, 12.0)) {
                        rate.handle(RateInput::PointerMove { index, x }, &layout);
                    }
                }
                black_box(rate.display_value())
            });
        });

        group.bench_function(format!("glyph_rects_half_n{count}"), |b| {
            let mut rate = Rate::new(
                RateConfig::default()
                    .with_count(count)
                    .with_allow_half(true),
            );
            b.iter(|| {
                for &x in &xs {
                    if let Some(index) = rects.hit_test(Point::new(x, 12.0)) {
                        rate.handle(RateInput::PointerMove { index, x }, &rects);
                    }
                }
                black_box(rate.display_value())
            });
        });
    }
    group.finish();
}

fn bench_click_with_handlers(c: &mut Criterion) {
    let mut group = c.benchmark_group("rate_click");
    let layout = row(5);
    let xs = gen_pointer_xs(1024, layout.bounds().width());
    group.throughput(Throughput::Elements(xs.len() as u64));
    group.bench_function("click_notify", |b| {
        b.iter_batched(
            || {
                let handlers = RateHandlers::new()
                    .on_change(|v| {
                        black_box(v);
                    })
                    .on_hover_change(|v| {
                        black_box(v);
                    });
                Rate::with_handlers(RateConfig::default().with_allow_half(true), handlers)
            },
            |mut rate| {
                for &x in &xs {
                    if let Some(index) = layout.index_at(Point::new(x, 12.0)) {
                        rate.handle(RateInput::Click { index, x }, &layout);
                    }
                }
                rate
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("rate_keys");
    group.bench_function("sweep_right_left_n100", |b| {
        let mut rate = Rate::new(RateConfig::default().with_count(100).with_allow_half(true));
        b.iter(|| {
            for _ in 0..200 {
                rate.handle(RateInput::KeyDown(Key::Right), &understory_rating::NoGeometry);
            }
            for _ in 0..200 {
                rate.handle(RateInput::KeyDown(Key::Left), &understory_rating::NoGeometry);
            }
            black_box(rate.value())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_hover, bench_click_with_handlers, bench_keys);
criterion_main!(benches);
