// File: crates/plot-core/src/divisions.rs
// Summary: Gridline division counts for the X and Y axes.
// Notes:
// - When zero lies inside the range it should usually sit on a gridline, so the
//   ratio of the two sides picks the count first.
// - Otherwise a preference list of divisors is tried against the two leading
//   digits of the span, with one pixel's worth of data as tolerance.

use tracing::trace;

use crate::round::float_round;

const X_UPGRADE_FROM_2: [i64; 5] = [12, 10, 6, 8, 4];
const X_UPGRADE_FROM_3: [i64; 3] = [12, 9, 6];
const X_FALLBACK: [i64; 8] = [12, 10, 7, 6, 5, 8, 3, 4];
const X_DEFAULT: u32 = 10;
const X_MAX_STRADDLE_DIVISIONS: u32 = 9;

const Y_UPGRADE_FROM_2: [i64; 2] = [6, 4];
const Y_UPGRADE_FROM_3: [i64; 1] = [6];
const Y_FALLBACK_CHAIN: [i64; 3] = [3, 4, 2];
const Y_DEFAULT: u32 = 5;
const Y_MAX_STRADDLE_RATIO: u32 = 5;

/// Shared inputs for the divisibility tests of one axis.
#[derive(Clone, Copy, Debug)]
struct Span {
    /// Two leading digits of `hi - lo`.
    int_rep: i64,
    /// Data units covered by one pixel.
    tolerance: f64,
}

impl Span {
    fn new(lo: f64, hi: f64, extent_px: i32) -> Self {
        let range = hi - lo;
        let tolerance = if extent_px > 0 { range / extent_px as f64 } else { 0.0 };
        Self { int_rep: float_round(range).int_rep, tolerance }
    }

    /// `divisor` splits the span evenly, within one pixel.
    fn divides(&self, divisor: i64) -> bool {
        ieee_remainder(self.int_rep as f64, divisor as f64).abs() < self.tolerance
    }

    fn first_dividing(&self, candidates: &[i64]) -> Option<u32> {
        candidates.iter().copied().find(|&d| self.divides(d)).map(|d| d as u32)
    }
}

/// IEEE 754 remainder: `a - b * n` with `n = a / b` rounded to nearest, ties even.
fn ieee_remainder(a: f64, b: f64) -> f64 {
    a - b * (a / b).round_ties_even()
}

/// Ratio of the larger side of zero to the smaller, rounded; `None` unless
/// the range strictly contains zero.
fn straddle_ratio(lo: f64, hi: f64) -> Option<u32> {
    if !(lo < 0.0 && hi > 0.0) {
        return None;
    }
    let (small, large) = if lo.abs() < hi { (lo.abs(), hi) } else { (hi, lo.abs()) };
    let ratio = (large / small).round();
    if ratio.is_finite() && ratio >= 0.0 && ratio <= u32::MAX as f64 {
        Some(ratio as u32)
    } else {
        None
    }
}

/// Number of vertical gridline intervals for an X range drawn `width_px` wide.
pub fn x_divisions(lo: f64, hi: f64, width_px: i32) -> u32 {
    let span = Span::new(lo, hi, width_px);

    if let Some(k) = straddle_ratio(lo, hi) {
        if (1..X_MAX_STRADDLE_DIVISIONS).contains(&k) {
            let tentative = k + 1;
            let divs = match tentative {
                2 => span.first_dividing(&X_UPGRADE_FROM_2).unwrap_or(2),
                3 => span.first_dividing(&X_UPGRADE_FROM_3).unwrap_or(3),
                n => n,
            };
            trace!(lo, hi, ratio = k, divs, "x divisions from zero straddle");
            return divs;
        }
    }

    let divs = span.first_dividing(&X_FALLBACK).unwrap_or(X_DEFAULT);
    trace!(lo, hi, divs, "x divisions from divisor list");
    divs
}

/// Number of horizontal gridline intervals for a Y range drawn `height_px` tall.
///
/// The non-straddling branch tests 5 and then, regardless of that result,
/// runs the 3 → 4 → 2 chain: 5 only survives when that whole chain falls
/// through to its default of 5. This differs from the X rules and is kept
/// as is.
pub fn y_divisions(lo: f64, hi: f64, height_px: i32) -> u32 {
    let span = Span::new(lo, hi, height_px);
    let ratio = straddle_ratio(lo, hi);

    if let Some(k) = ratio {
        if (1..=Y_MAX_STRADDLE_RATIO).contains(&k) {
            let tentative = k + 1;
            let divs = match tentative {
                2 => span.first_dividing(&Y_UPGRADE_FROM_2).unwrap_or(2),
                3 => span.first_dividing(&Y_UPGRADE_FROM_3).unwrap_or(3),
                n => n,
            };
            trace!(lo, hi, ratio = k, divs, "y divisions from zero straddle");
            return divs;
        }
    }

    if ratio == Some(1) {
        let divs = if span.divides(4) { 4 } else { 2 };
        trace!(lo, hi, divs, "y divisions from symmetric range");
        return divs;
    }

    // A 5 match is recorded but never short-circuits the chain.
    let five_divides = span.divides(5);
    let divs = span.first_dividing(&Y_FALLBACK_CHAIN).unwrap_or(Y_DEFAULT);
    trace!(lo, hi, five_divides, divs, "y divisions from divisor list");
    divs
}
