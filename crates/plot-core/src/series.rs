// File: crates/plot-core/src/series.rs
// Summary: SampleSeries, the per-axis sample container, and its linear/log range builders.
// Notes:
// - A NaN sample (`NOPLOT`) means "no point here" and breaks line continuity.
// - Range builders never fail loudly; degenerate requests leave the series untouched.

use std::ops::Index;

/// Sentinel sample: any point with this value is not plotted.
pub const NOPLOT: f64 = f64::NAN;

/// Spans narrower than this are considered degenerate by the range builders.
const SPAN_EPSILON: f64 = f32::EPSILON as f64;

/// Divisions forced when a caller asks for fewer than two.
const FALLBACK_DIVISIONS: usize = 49;

/// Number of points in a generated range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Grain {
    ExtraFine,
    Fine,
    #[default]
    Medium,
    Coarse,
    Gross,
}

impl Grain {
    pub const fn points(self) -> usize {
        match self {
            Grain::ExtraFine => 901,
            Grain::Fine => 501,
            Grain::Medium => 301,
            Grain::Coarse => 201,
            Grain::Gross => 101,
        }
    }
}

/// Point spacing used by [`SampleSeries::plot_range`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Spacing {
    Linear,
    Log,
}

/// Ordered samples for one plotting axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleSeries {
    data: Vec<f64>,
}

impl SampleSeries {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { data: Vec::with_capacity(capacity) }
    }

    pub fn from_vec(data: Vec<f64>) -> Self {
        Self { data }
    }

    pub fn from_slice(values: &[f64]) -> Self {
        Self { data: values.to_vec() }
    }

    /// Evenly spaced samples over `[lo, hi]` using a [`Grain`] preset.
    pub fn with_grain(lo: f64, hi: f64, grain: Grain) -> Self {
        Self::linear_range(lo, hi, grain.points())
    }

    /// `count` evenly spaced samples from `lo` to `hi`, endpoints exact.
    pub fn linear_range(lo: f64, hi: f64, count: usize) -> Self {
        let mut s = Self::new();
        s.plot_range(lo, hi, count, Spacing::Linear);
        s
    }

    /// `count` geometrically spaced samples from `lo` to `hi`.
    /// Empty when the bounds straddle zero.
    pub fn log_range(lo: f64, hi: f64, count: usize) -> Self {
        let mut s = Self::new();
        s.plot_range(lo, hi, count, Spacing::Log);
        s
    }

    /// Replace the contents with a generated range.
    ///
    /// Leaves the series unchanged when the span is narrower than `f32`
    /// epsilon, or when a log range is requested across zero. Callers that
    /// care must check `len()` afterwards.
    pub fn plot_range(&mut self, lo: f64, hi: f64, count: usize, spacing: Spacing) {
        let divisions = match count.saturating_sub(1) {
            d if d < 2 => FALLBACK_DIVISIONS,
            d => d,
        };
        let (mut lo, mut hi) = if lo > hi { (hi, lo) } else { (lo, hi) };
        if !lo.is_finite() || !hi.is_finite() {
            return;
        }
        if spacing == Spacing::Log && lo < 0.0 && hi > 0.0 {
            return;
        }
        let span = hi - lo;
        if span < SPAN_EPSILON {
            return;
        }

        self.data.clear();
        self.data.reserve(divisions + 1);
        match spacing {
            Spacing::Linear => {
                let step = span / divisions as f64;
                self.data.extend((0..divisions).map(|i| lo + step * i as f64));
            }
            Spacing::Log => {
                // Zero has no logarithm; push the bounds off it. Crude, and
                // precision near zero is not guaranteed.
                if lo.abs() < SPAN_EPSILON {
                    let shift = if lo < 0.0 { -span / 1000.0 } else { span / 1000.0 };
                    while lo.abs() < SPAN_EPSILON {
                        lo += shift;
                    }
                }
                if hi.abs() < SPAN_EPSILON {
                    let shift = if hi > 0.0 { span / 1000.0 } else { -span / 1000.0 };
                    while hi.abs() < SPAN_EPSILON {
                        hi += shift;
                    }
                }
                let mult = (hi / lo).ln() / divisions as f64;
                self.data.push(lo);
                self.data.extend((1..divisions).map(|i| lo * (i as f64 * mult).exp()));
            }
        }
        self.data.push(hi);
    }

    pub fn push(&mut self, value: f64) {
        self.data.push(value);
    }

    pub fn extend_from_slice(&mut self, values: &[f64]) {
        self.data.extend_from_slice(values);
    }

    /// Concatenate another series onto this one.
    pub fn append_series(&mut self, other: &SampleSeries) {
        self.data.extend_from_slice(&other.data);
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, f64>> {
        self.data.iter().copied()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }
}

impl Index<usize> for SampleSeries {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl From<Vec<f64>> for SampleSeries {
    fn from(data: Vec<f64>) -> Self {
        Self { data }
    }
}

impl FromIterator<f64> for SampleSeries {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self { data: iter.into_iter().collect() }
    }
}

impl Extend<f64> for SampleSeries {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<'a> IntoIterator for &'a SampleSeries {
    type Item = f64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linear_range_hits_endpoints_exactly() {
        let s = SampleSeries::linear_range(-5.0, 2.0, 8);
        assert_eq!(s.len(), 8);
        assert_eq!(s[0], -5.0);
        assert_eq!(s[7], 2.0);
        assert_relative_eq!(s[1] - s[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn linear_range_swaps_reversed_bounds() {
        let s = SampleSeries::linear_range(10.0, 0.0, 11);
        assert_eq!(s[0], 0.0);
        assert_eq!(s[10], 10.0);
    }

    #[test]
    fn tiny_counts_fall_back_to_fifty_points() {
        assert_eq!(SampleSeries::linear_range(0.0, 1.0, 0).len(), 50);
        assert_eq!(SampleSeries::linear_range(0.0, 1.0, 2).len(), 50);
        assert_eq!(SampleSeries::linear_range(0.0, 1.0, 3).len(), 3);
    }

    #[test]
    fn degenerate_span_is_a_no_op() {
        let mut s = SampleSeries::from_slice(&[1.0, 2.0]);
        s.plot_range(3.0, 3.0, 10, Spacing::Linear);
        assert_eq!(s.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn log_range_is_geometric() {
        let s = SampleSeries::log_range(1.0, 1000.0, 4);
        assert_eq!(s.len(), 4);
        assert_eq!(s[0], 1.0);
        assert_eq!(s[3], 1000.0);
        assert_relative_eq!(s[1], 10.0, epsilon = 1e-9);
        assert_relative_eq!(s[2], 100.0, epsilon = 1e-9);
    }

    #[test]
    fn log_range_across_zero_leaves_series_untouched() {
        let s = SampleSeries::log_range(-1.0, 1.0, 10);
        assert!(s.is_empty());

        let mut kept = SampleSeries::from_slice(&[4.0]);
        kept.plot_range(-1.0, 1.0, 10, Spacing::Log);
        assert_eq!(kept.as_slice(), &[4.0]);
    }

    #[test]
    fn log_range_nudges_zero_bound() {
        let s = SampleSeries::log_range(0.0, 10.0, 11);
        assert_eq!(s.len(), 11);
        assert!(s[0] > 0.0);
        assert_eq!(s[10], 10.0);
        assert!(s.iter().all(f64::is_finite));
    }

    #[test]
    fn negative_log_range_stays_negative() {
        let s = SampleSeries::log_range(-100.0, -1.0, 3);
        assert_eq!(s[0], -100.0);
        assert_relative_eq!(s[1], -10.0, epsilon = 1e-9);
        assert_eq!(s[2], -1.0);
    }

    #[test]
    fn append_extend_clear() {
        let mut s = SampleSeries::new();
        s.push(1.0);
        s.extend_from_slice(&[2.0, NOPLOT]);
        s.append_series(&SampleSeries::from_slice(&[4.0]));
        assert_eq!(s.len(), 4);
        assert!(s[2].is_nan());
        assert_eq!(s.get(3), Some(4.0));
        assert_eq!(s.get(4), None);
        s.clear();
        assert!(s.is_empty());
    }

    #[test]
    fn grain_presets() {
        assert_eq!(SampleSeries::with_grain(0.0, 360.0, Grain::Gross).len(), 101);
        assert_eq!(SampleSeries::with_grain(0.0, 360.0, Grain::default()).len(), 301);
    }
}
