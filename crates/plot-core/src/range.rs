// File: crates/plot-core/src/range.rs
// Summary: Inclusive min/max ranges and the paired-series range finder.

use crate::series::SampleSeries;

/// Inclusive interval. The empty state is `(+inf, -inf)` so the first
/// expansion replaces both ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Default for Range {
    fn default() -> Self {
        Self::empty()
    }
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub const fn empty() -> Self {
        Self { min: f64::INFINITY, max: f64::NEG_INFINITY }
    }

    pub const fn point(v: f64) -> Self {
        Self { min: v, max: v }
    }

    /// True until the range has been expanded at least once.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Grow to include `v`. Returns whether either end moved.
    pub fn expand(&mut self, v: f64) -> bool {
        self.expand_range(&Range::point(v))
    }

    /// Grow to include `other`. Returns whether either end moved.
    pub fn expand_range(&mut self, other: &Range) -> bool {
        let mut changed = false;
        if self.min > other.min {
            self.min = other.min;
            changed = true;
        }
        if self.max < other.max {
            self.max = other.max;
            changed = true;
        }
        changed
    }

    pub fn union(mut self, other: &Range) -> Range {
        self.expand_range(other);
        self
    }

    pub fn delta(&self) -> f64 {
        self.max - self.min
    }

    /// Inclusive on both ends.
    pub fn inside(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Widen a zero-width range so it can be mapped onto pixels. The pad is
    /// one unit, or a millionth of the magnitude once one unit no longer
    /// moves the bound.
    pub fn widened_if_degenerate(self) -> Range {
        if !self.is_empty() && self.delta().abs() < 1e-9 {
            let pad = 1.0f64.max(self.min.abs() * 1e-6);
            Range::new(self.min, self.min + pad)
        } else {
            self
        }
    }
}

/// Ranges of a paired X/Y series over their common indices.
///
/// An index contributes to neither range unless both values are finite, so
/// the ranges only ever cover points that will actually be plotted. Either
/// series being empty leaves both ranges empty.
pub fn range_xy(x: &SampleSeries, y: &SampleSeries) -> (Range, Range) {
    let mut xr = Range::empty();
    let mut yr = Range::empty();
    for (xv, yv) in x.iter().zip(y.iter()) {
        if xv.is_finite() && yv.is_finite() {
            xr.expand(xv);
            yr.expand(yv);
        }
    }
    (xr, yr)
}
