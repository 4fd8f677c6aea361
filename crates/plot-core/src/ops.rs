// File: crates/plot-core/src/ops.rs
// Summary: Elementwise combinators and math maps over SampleSeries.
// Notes:
// - Series/series operations stop at the shorter operand.
// - Non-finite results (0/0, ln of a negative) simply become breaks when plotted.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::series::{SampleSeries, NOPLOT};

/// Apply `f` to every sample.
pub fn map(s: &SampleSeries, f: impl Fn(f64) -> f64) -> SampleSeries {
    s.iter().map(f).collect()
}

/// Apply `f(sample, operand)` to every sample.
pub fn map_with(s: &SampleSeries, operand: f64, f: impl Fn(f64, f64) -> f64) -> SampleSeries {
    s.iter().map(|v| f(v, operand)).collect()
}

/// Combine two series pairwise; the result has the length of the shorter one.
pub fn zip_with(a: &SampleSeries, b: &SampleSeries, f: impl Fn(f64, f64) -> f64) -> SampleSeries {
    a.iter().zip(b.iter()).map(|(x, y)| f(x, y)).collect()
}

pub fn add(a: &SampleSeries, b: &SampleSeries) -> SampleSeries { zip_with(a, b, |x, y| x + y) }
pub fn sub(a: &SampleSeries, b: &SampleSeries) -> SampleSeries { zip_with(a, b, |x, y| x - y) }
pub fn mul(a: &SampleSeries, b: &SampleSeries) -> SampleSeries { zip_with(a, b, |x, y| x * y) }
pub fn div(a: &SampleSeries, b: &SampleSeries) -> SampleSeries { zip_with(a, b, |x, y| x / y) }

pub fn add_scalar(s: &SampleSeries, k: f64) -> SampleSeries { map(s, |v| v + k) }
/// `s - k`
pub fn sub_scalar(s: &SampleSeries, k: f64) -> SampleSeries { map(s, |v| v - k) }
/// `k - s`
pub fn scalar_sub(k: f64, s: &SampleSeries) -> SampleSeries { map(s, |v| k - v) }
pub fn mul_scalar(s: &SampleSeries, k: f64) -> SampleSeries { map(s, |v| v * k) }
/// `s / k`
pub fn div_scalar(s: &SampleSeries, k: f64) -> SampleSeries { map(s, |v| v / k) }
/// `k / s`
pub fn scalar_div(k: f64, s: &SampleSeries) -> SampleSeries { map(s, |v| k / v) }
pub fn neg(s: &SampleSeries) -> SampleSeries { map(s, |v| -v) }

pub fn sin(s: &SampleSeries) -> SampleSeries { map(s, f64::sin) }
pub fn cos(s: &SampleSeries) -> SampleSeries { map(s, f64::cos) }
pub fn tan(s: &SampleSeries) -> SampleSeries { map(s, f64::tan) }
pub fn asin(s: &SampleSeries) -> SampleSeries { map(s, f64::asin) }
pub fn acos(s: &SampleSeries) -> SampleSeries { map(s, f64::acos) }
pub fn atan(s: &SampleSeries) -> SampleSeries { map(s, f64::atan) }
pub fn sinh(s: &SampleSeries) -> SampleSeries { map(s, f64::sinh) }
pub fn cosh(s: &SampleSeries) -> SampleSeries { map(s, f64::cosh) }
pub fn tanh(s: &SampleSeries) -> SampleSeries { map(s, f64::tanh) }
pub fn sqrt(s: &SampleSeries) -> SampleSeries { map(s, f64::sqrt) }
pub fn abs(s: &SampleSeries) -> SampleSeries { map(s, f64::abs) }
pub fn ln(s: &SampleSeries) -> SampleSeries { map(s, f64::ln) }
pub fn log10(s: &SampleSeries) -> SampleSeries { map(s, f64::log10) }
pub fn exp(s: &SampleSeries) -> SampleSeries { map(s, f64::exp) }
pub fn powf(s: &SampleSeries, e: f64) -> SampleSeries { map_with(s, e, f64::powf) }

/// Append one `(x, y)` point to a pair of series.
pub fn point(x: &mut SampleSeries, y: &mut SampleSeries, xv: f64, yv: f64) {
    x.push(xv);
    y.push(yv);
}

/// End the current line so the next point starts a new one.
pub fn break_plot(x: &mut SampleSeries, y: &mut SampleSeries) {
    point(x, y, NOPLOT, NOPLOT);
}

macro_rules! series_binop {
    ($trait:ident, $method:ident, $series_fn:ident, $scalar_fn:ident, $rev_fn:ident) => {
        impl $trait<&SampleSeries> for &SampleSeries {
            type Output = SampleSeries;
            fn $method(self, rhs: &SampleSeries) -> SampleSeries {
                $series_fn(self, rhs)
            }
        }

        impl $trait<f64> for &SampleSeries {
            type Output = SampleSeries;
            fn $method(self, rhs: f64) -> SampleSeries {
                $scalar_fn(self, rhs)
            }
        }

        impl $trait<&SampleSeries> for f64 {
            type Output = SampleSeries;
            fn $method(self, rhs: &SampleSeries) -> SampleSeries {
                $rev_fn(self, rhs)
            }
        }
    };
}

fn scalar_add(k: f64, s: &SampleSeries) -> SampleSeries { add_scalar(s, k) }
fn scalar_mul(k: f64, s: &SampleSeries) -> SampleSeries { mul_scalar(s, k) }

series_binop!(Add, add, add, add_scalar, scalar_add);
series_binop!(Sub, sub, sub, sub_scalar, scalar_sub);
series_binop!(Mul, mul, mul, mul_scalar, scalar_mul);
series_binop!(Div, div, div, div_scalar, scalar_div);

impl Neg for &SampleSeries {
    type Output = SampleSeries;
    fn neg(self) -> SampleSeries {
        neg(self)
    }
}
