// File: crates/plot-core/src/axis.rs
// Summary: Per-paint axis layout (rounded range, divisions, scale) and tick label values.

use tracing::debug;

use crate::divisions::{x_divisions, y_divisions};
use crate::geometry::RectI32;
use crate::mapper::{AxisId, CoordinateMapper, Rounding};
use crate::range::Range;
use crate::round::{float_round, nice_range};

/// Label values smaller than this fraction of the axis span print as 0.
const LABEL_ZERO_FRACTION: f64 = 0.0001;

/// Layout of one axis for a single paint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLayout {
    pub range: Range,
    pub divisions: u32,
    /// Data units per pixel; negative for Y.
    pub scale: f64,
    /// Left edge (X) or top edge (Y) of the plot area.
    pub origin_px: i32,
    pub extent_px: i32,
}

impl AxisLayout {
    /// Values printed at gridlines `0..=divisions`: X from the minimum
    /// rightwards, Y from the maximum downwards.
    pub fn tick_values(&self, axis: AxisId, mapper: &CoordinateMapper) -> Vec<f64> {
        let divs = self.divisions.max(1);
        let delta = self.range.delta();
        let step = float_round(delta / divs as f64).value;

        (0..=divs)
            .map(|i| {
                let raw = match axis {
                    AxisId::X => self.range.min + step * i as f64,
                    AxisId::Y => self.range.max - step * i as f64,
                };
                let v = tidy_label_value(float_round(raw).value, axis, mapper);
                if v.abs() < LABEL_ZERO_FRACTION * delta { 0.0 } else { v }
            })
            .collect()
    }
}

/// Pull a label onto a rounder number within one pixel, unless that would
/// print longer than the value it replaces.
fn tidy_label_value(value: f64, axis: AxisId, mapper: &CoordinateMapper) -> f64 {
    let (snapped, _) = mapper.nearest_pixel_round(value, axis, Rounding::Any);
    if snapped.is_finite() && format_label(snapped).len() <= format_label(value).len() {
        snapped
    } else {
        value
    }
}

/// Both axes of a paint plus the plot-area rectangle they share.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotLayout {
    pub viewport: RectI32,
    pub x: AxisLayout,
    pub y: AxisLayout,
}

impl PlotLayout {
    /// Rebuild the data/pixel transform for this layout.
    pub fn mapper(&self) -> Option<CoordinateMapper> {
        CoordinateMapper::new(self.x.range, self.y.range, self.viewport)
    }
}

/// Compute the layout for raw data ranges inside `viewport`.
///
/// Flat ranges are widened by one unit (more at large magnitudes). Y is always rounded outward to nice
/// bounds; X only when `nice_x` is set. Returns `None` when there is nothing
/// to plot or no room to plot it.
pub fn compute_layout(x: Range, y: Range, viewport: RectI32, nice_x: bool) -> Option<PlotLayout> {
    if x.is_empty() || y.is_empty() || viewport.is_empty() {
        debug!(?x, ?y, ?viewport, "no layout");
        return None;
    }

    let mut xr = x.widened_if_degenerate();
    if nice_x {
        xr = nice_range(xr).widened_if_degenerate();
    }
    let yr = nice_range(y.widened_if_degenerate()).widened_if_degenerate();

    let (width, height) = (viewport.width(), viewport.height());
    let layout = PlotLayout {
        viewport,
        x: AxisLayout {
            range: xr,
            divisions: x_divisions(xr.min, xr.max, width).max(1),
            scale: xr.delta() / width as f64,
            origin_px: viewport.left,
            extent_px: width,
        },
        y: AxisLayout {
            range: yr,
            divisions: y_divisions(yr.min, yr.max, height).max(1),
            scale: -yr.delta() / height as f64,
            origin_px: viewport.top,
            extent_px: height,
        },
    };
    debug!(
        x_min = xr.min,
        x_max = xr.max,
        x_divs = layout.x.divisions,
        y_min = yr.min,
        y_max = yr.max,
        y_divs = layout.y.divisions,
        "layout computed"
    );
    Some(layout)
}

/// Format a tick value like C's `%.3g`: three significant digits, trailing
/// zeros dropped, exponent form outside `1e-4 ..< 1e3`.
pub fn format_label(value: f64) -> String {
    const PRECISION: i32 = 3;

    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let sci = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= PRECISION {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (PRECISION - 1 - exp).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_owned()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
