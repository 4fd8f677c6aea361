// File: crates/plot-core/src/round.rs
// Summary: Two-significant-digit rounding primitive and "nice" outward range rounding.

use crate::range::Range;

/// Significant digits kept by [`float_round`].
pub const SIG_DIGITS: i32 = 2;

/// Output of [`float_round`].
///
/// `sig_digits` doubles as a rough measure of how round a number is: values
/// whose integer part already has at least [`SIG_DIGITS`] digits are returned
/// untouched and report the integer digit count instead. `int_rep` is the
/// two leading digits as an integer (`0.0137` → `14`, `360.0` → `36`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rounded {
    pub value: f64,
    pub sig_digits: i32,
    pub int_rep: i64,
}

/// Round `value` to [`SIG_DIGITS`] significant digits.
pub fn float_round(value: f64) -> Rounded {
    if !value.is_finite() {
        return Rounded { value, sig_digits: 0, int_rep: 0 };
    }
    if value == 0.0 {
        return Rounded { value: 0.0, sig_digits: SIG_DIGITS, int_rep: 0 };
    }

    let (int_rep, dec_pos) = leading_digits(value.abs());
    if dec_pos >= SIG_DIGITS {
        return Rounded { value, sig_digits: dec_pos, int_rep };
    }

    let shift = dec_pos - SIG_DIGITS;
    let magnitude = if shift >= 0 {
        int_rep as f64 * 10f64.powi(shift)
    } else {
        // Dividing by an exact power of ten keeps 0.014 as 0.014.
        int_rep as f64 / 10f64.powi(-shift)
    };
    Rounded { value: magnitude.copysign(value), sig_digits: SIG_DIGITS, int_rep }
}

/// Leading digits of a positive finite number, correctly rounded, together
/// with the decimal point position (digits before the point; negative for
/// leading zeros after it).
fn leading_digits(abs: f64) -> (i64, i32) {
    let text = format!("{:.*e}", (SIG_DIGITS - 1) as usize, abs);
    let parsed = text.split_once('e').and_then(|(mantissa, exp)| {
        let digits = mantissa.replace('.', "").parse::<i64>().ok()?;
        let exp = exp.parse::<i32>().ok()?;
        Some((digits, exp + 1))
    });
    parsed.unwrap_or((0, 0))
}

/// Round a data range outward to visually round bounds.
///
/// Both ends are rounded once to measure how far rounding moves the span;
/// that error is then split over both ends, pushing them outward, and the
/// shifted ends are rounded again. The second rounding is to nearest, so
/// an end may land a hair inside the data when the first pass barely moved it.
pub fn nice_range(range: Range) -> Range {
    if range.is_empty() || !range.min.is_finite() || !range.max.is_finite() {
        return range;
    }
    let min = float_round(range.min).value;
    let max = float_round(range.max).value;
    let dif = ((max - min) - range.delta()).abs();

    Range::new(
        float_round(range.min - dif / 2.0).value,
        float_round(range.max + dif / 2.0).value,
    )
}
