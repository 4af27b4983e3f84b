// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph geometry: half-step resolution and glyph bounds lookup.
//!
//! ## Overview
//!
//! The controller never inspects a rendered tree. Instead the presentation layer supplies a
//! [`GlyphGeometry`] that maps a glyph index to its world-space bounds, and the controller
//! resolves pointer positions against those bounds with [`resolve_half_step`].
//!
//! Two ready-made providers are included:
//! - [`GlyphRects`]: an index-ordered cache of bounds, cleared and refilled each render pass.
//! - [`RowLayout`]: a uniform left-to-right row, useful when glyphs are laid out on a fixed pitch.
//!
//! ## Edge policy
//!
//! A pointer exactly at the horizontal midpoint of a glyph resolves to [`HalfStep::Upper`].
//! Zero-width, inverted, or non-finite bounds also resolve to [`HalfStep::Upper`], so a glyph
//! that has not been laid out yet behaves as if half steps were disabled.
//!
//! ```
//! use kurbo::Rect;
//! use understory_rating::geometry::{star_value, GlyphRects};
//!
//! let mut rects = GlyphRects::new();
//! rects.set(0, Rect::new(0.0, 0.0, 20.0, 20.0));
//! rects.set(1, Rect::new(20.0, 0.0, 40.0, 20.0));
//!
//! assert_eq!(star_value(1, 25.0, true, &rects), 1.5);
//! assert_eq!(star_value(1, 30.0, true, &rects), 2.0);
//! assert_eq!(star_value(1, 25.0, false, &rects), 2.0);
//! ```

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

/// Which half of a glyph the pointer targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HalfStep {
    /// Left half; the candidate rating is `index + 0.5`.
    Lower,
    /// Right half (or midpoint); the candidate rating is `index + 1`.
    Upper,
}

impl HalfStep {
    /// Rating contributed by the targeted glyph on top of its index.
    #[inline]
    pub const fn offset(self) -> f64 {
        match self {
            Self::Lower => 0.5,
            Self::Upper => 1.0,
        }
    }
}

/// Resolve which half of a glyph spanning `[left, left + width)` contains `x`.
///
/// Returns [`HalfStep::Lower`] only when `x - left < width / 2` and the width is positive.
/// Everything else, including degenerate geometry, resolves to [`HalfStep::Upper`].
#[inline]
pub fn resolve_half_step(left: f64, width: f64, x: f64) -> HalfStep {
    if width > 0.0 && x - left < width / 2.0 {
        HalfStep::Lower
    } else {
        HalfStep::Upper
    }
}

/// Lookup of rendered glyph bounds by index.
///
/// Implemented by the presentation layer. Bounds must be in the same coordinate space as the
/// pointer positions handed to the controller.
pub trait GlyphGeometry {
    /// Returns the bounds of the glyph at `index`, or `None` if it has not been laid out.
    fn glyph_bounds(&self, index: usize) -> Option<Rect>;
}

impl<G: GlyphGeometry + ?Sized> GlyphGeometry for &G {
    #[inline]
    fn glyph_bounds(&self, index: usize) -> Option<Rect> {
        (**self).glyph_bounds(index)
    }
}

impl GlyphGeometry for [Rect] {
    #[inline]
    fn glyph_bounds(&self, index: usize) -> Option<Rect> {
        self.get(index).copied()
    }
}

/// Geometry provider that never has bounds; every lookup degrades to whole steps.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoGeometry;

impl GlyphGeometry for NoGeometry {
    #[inline]
    fn glyph_bounds(&self, _index: usize) -> Option<Rect> {
        None
    }
}

/// Rating value for a pointer at `x` over the glyph at `index`.
///
/// Without half steps this is always `index + 1`. With half steps the glyph bounds are looked up
/// through `geometry`; a missing glyph yields `index + 1`.
pub fn star_value<G: GlyphGeometry + ?Sized>(
    index: usize,
    x: f64,
    allow_half: bool,
    geometry: &G,
) -> f64 {
    let base = index as f64;
    if !allow_half {
        return base + 1.0;
    }
    let step = geometry
        .glyph_bounds(index)
        .map_or(HalfStep::Upper, |r| resolve_half_step(r.x0, r.width(), x));
    base + step.offset()
}

/// Index-ordered cache of glyph bounds.
///
/// This is a non-owning view of the last render pass: call [`GlyphRects::clear`] at the start of
/// a pass and [`GlyphRects::set`] for each glyph as it is laid out. Slots that were never set
/// report `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlyphRects {
    rects: Vec<Option<Rect>>,
}

impl GlyphRects {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self { rects: Vec::new() }
    }

    /// Forget all recorded bounds, keeping the allocation.
    pub fn clear(&mut self) {
        self.rects.clear();
    }

    /// Record the bounds of the glyph at `index`.
    pub fn set(&mut self, index: usize, rect: Rect) {
        if index >= self.rects.len() {
            self.rects.resize(index + 1, None);
        }
        self.rects[index] = Some(rect);
    }

    /// Bounds of the glyph at `index`, if recorded.
    pub fn get(&self, index: usize) -> Option<Rect> {
        self.rects.get(index).copied().flatten()
    }

    /// Number of slots (one past the highest recorded index).
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Whether no bounds have been recorded.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Index of the first recorded glyph whose bounds contain `pt`.
    pub fn hit_test(&self, pt: Point) -> Option<usize> {
        self.rects
            .iter()
            .position(|r| r.is_some_and(|r| r.contains(pt)))
    }
}

impl FromIterator<Rect> for GlyphRects {
    fn from_iter<I: IntoIterator<Item = Rect>>(iter: I) -> Self {
        Self {
            rects: iter.into_iter().map(Some).collect(),
        }
    }
}

impl GlyphGeometry for GlyphRects {
    #[inline]
    fn glyph_bounds(&self, index: usize) -> Option<Rect> {
        self.get(index)
    }
}

/// A uniform left-to-right row of glyphs.
///
/// Glyph `i` occupies `origin + i * (glyph_size.width + gap)` horizontally.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowLayout {
    /// Top-left corner of the first glyph.
    pub origin: Point,
    /// Size of each glyph box.
    pub glyph_size: Size,
    /// Horizontal space between adjacent glyphs.
    pub gap: f64,
    /// Number of glyphs in the row.
    pub count: usize,
}

impl RowLayout {
    /// Create a row of `count` glyphs.
    pub fn new(origin: Point, glyph_size: Size, gap: f64, count: usize) -> Self {
        Self {
            origin,
            glyph_size,
            gap,
            count,
        }
    }

    /// Bounds of the glyph at `index`, or `None` past the end of the row.
    pub fn glyph_rect(&self, index: usize) -> Option<Rect> {
        if index >= self.count {
            return None;
        }
        let x0 = self.origin.x + index as f64 * (self.glyph_size.width + self.gap);
        Some(Rect::from_origin_size(
            Point::new(x0, self.origin.y),
            self.glyph_size,
        ))
    }

    /// Index of the glyph containing `pt`. Points in a gap hit nothing.
    pub fn index_at(&self, pt: Point) -> Option<usize> {
        (0..self.count).find(|&i| self.glyph_rect(i).is_some_and(|r| r.contains(pt)))
    }

    /// Overall bounds of the row.
    pub fn bounds(&self) -> Rect {
        match (self.glyph_rect(0), self.count.checked_sub(1)) {
            (Some(first), Some(last)) => first.union(self.glyph_rect(last).unwrap_or(first)),
            _ => Rect::from_origin_size(self.origin, Size::ZERO),
        }
    }

    /// Materialize the row into a bounds cache.
    pub fn to_rects(&self) -> GlyphRects {
        (0..self.count).filter_map(|i| self.glyph_rect(i)).collect()
    }
}

impl GlyphGeometry for RowLayout {
    #[inline]
    fn glyph_bounds(&self, index: usize) -> Option<Rect> {
        self.glyph_rect(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_half_is_lower() {
        assert_eq!(resolve_half_step(10.0, 20.0, 10.0), HalfStep::Lower);
        assert_eq!(resolve_half_step(10.0, 20.0, 19.9), HalfStep::Lower);
    }

    // Midpoint belongs to the right half.
    #[test]
    fn midpoint_is_upper() {
        assert_eq!(resolve_half_step(10.0, 20.0, 20.0), HalfStep::Upper);
        assert_eq!(resolve_half_step(10.0, 20.0, 29.0), HalfStep::Upper);
    }

    #[test]
    fn degenerate_width_is_upper() {
        assert_eq!(resolve_half_step(10.0, 0.0, 5.0), HalfStep::Upper);
        assert_eq!(resolve_half_step(10.0, -4.0, 5.0), HalfStep::Upper);
        assert_eq!(resolve_half_step(10.0, f64::NAN, 5.0), HalfStep::Upper);
    }

    #[test]
    fn whole_steps_ignore_geometry() {
        let rects = [Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(10.0, 0.0, 20.0, 10.0)];
        for x in [-5.0, 0.0, 4.0, 5.0, 12.0, 100.0] {
            assert_eq!(star_value(0, x, false, &rects[..]), 1.0);
            assert_eq!(star_value(1, x, false, &rects[..]), 2.0);
        }
    }

    #[test]
    fn half_steps_split_at_midpoint() {
        let rects = [Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(10.0, 0.0, 20.0, 10.0)];
        assert_eq!(star_value(0, 4.9, true, &rects[..]), 0.5);
        assert_eq!(star_value(0, 5.0, true, &rects[..]), 1.0);
        assert_eq!(star_value(1, 11.0, true, &rects[..]), 1.5);
        assert_eq!(star_value(1, 19.0, true, &rects[..]), 2.0);
    }

    #[test]
    fn missing_glyph_degrades_to_whole_step() {
        assert_eq!(star_value(3, 0.0, true, &NoGeometry), 4.0);
        let rects = GlyphRects::new();
        assert_eq!(star_value(0, 0.0, true, &rects), 1.0);
    }

    #[test]
    fn glyph_rects_sparse_slots() {
        let mut rects = GlyphRects::new();
        rects.set(2, Rect::new(40.0, 0.0, 60.0, 20.0));
        assert_eq!(rects.len(), 3);
        assert_eq!(rects.get(0), None);
        assert_eq!(rects.get(2), Some(Rect::new(40.0, 0.0, 60.0, 20.0)));
        assert_eq!(rects.hit_test(Point::new(45.0, 5.0)), Some(2));
        assert_eq!(rects.hit_test(Point::new(5.0, 5.0)), None);

        rects.clear();
        assert!(rects.is_empty());
        assert_eq!(rects.get(2), None);
    }

    #[test]
    fn row_layout_positions_and_hits() {
        let row = RowLayout::new(Point::new(100.0, 50.0), Size::new(20.0, 20.0), 4.0, 5);
        assert_eq!(row.glyph_rect(0), Some(Rect::new(100.0, 50.0, 120.0, 70.0)));
        assert_eq!(row.glyph_rect(2), Some(Rect::new(148.0, 50.0, 168.0, 70.0)));
        assert_eq!(row.glyph_rect(5), None);
        assert_eq!(row.bounds(), Rect::new(100.0, 50.0, 216.0, 70.0));

        assert_eq!(row.index_at(Point::new(150.0, 60.0)), Some(2));
        // In the gap between glyph 0 and 1.
        assert_eq!(row.index_at(Point::new(122.0, 60.0)), None);
        assert_eq!(row.index_at(Point::new(150.0, 10.0)), None);

        // Left half of glyph 2 is 2.5.
        assert_eq!(star_value(2, 150.0, true, &row), 2.5);
        assert_eq!(star_value(2, 160.0, true, &row), 3.0);
    }

    #[test]
    fn row_layout_materializes_rects() {
        let row = RowLayout::new(Point::ZERO, Size::new(10.0, 10.0), 0.0, 3);
        let rects = row.to_rects();
        assert_eq!(rects.len(), 3);
        for i in 0..3 {
            assert_eq!(rects.get(i), row.glyph_rect(i));
        }
    }

    #[test]
    fn empty_row_bounds() {
        let row = RowLayout::new(Point::new(3.0, 4.0), Size::new(10.0, 10.0), 2.0, 0);
        assert_eq!(row.bounds(), Rect::new(3.0, 4.0, 3.0, 4.0));
        assert!(row.to_rects().is_empty());
    }
}
