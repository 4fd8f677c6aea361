// File: crates/plot-core/src/mapper.rs
// Summary: Affine data <-> pixel transform for one paint, plus nearest-pixel rounding.
// Notes:
// - Pixel Y grows downwards, so the Y scale is negative and maps `y.max` to the top edge.
// - Pixel conversions truncate toward zero.

use crate::geometry::RectI32;
use crate::range::Range;
use crate::round::float_round;

/// Which axis a mapper operation applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisId {
    X,
    Y,
}

/// Requested (and reported) direction of [`CoordinateMapper::nearest_pixel_round`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    Up,
    Down,
    Any,
}

/// Data/pixel transform built fresh on every paint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    x: Range,
    y: Range,
    viewport: RectI32,
    x_scale: f64,
    y_scale: f64,
}

impl CoordinateMapper {
    /// `None` when either range is empty or flat, or the viewport has no area.
    pub fn new(x: Range, y: Range, viewport: RectI32) -> Option<Self> {
        if x.is_empty() || y.is_empty() || viewport.is_empty() {
            return None;
        }
        let x_scale = x.delta() / viewport.width() as f64;
        let y_scale = -y.delta() / viewport.height() as f64;
        let usable = |s: f64| s.is_finite() && s != 0.0;
        if !usable(x_scale) || !usable(y_scale) {
            return None;
        }
        Some(Self { x, y, viewport, x_scale, y_scale })
    }

    pub fn x_range(&self) -> Range { self.x }
    pub fn y_range(&self) -> Range { self.y }
    pub fn viewport(&self) -> RectI32 { self.viewport }

    /// Data units per pixel along X.
    pub fn x_scale(&self) -> f64 { self.x_scale }
    /// Data units per pixel along Y; always negative.
    pub fn y_scale(&self) -> f64 { self.y_scale }

    pub fn scale(&self, axis: AxisId) -> f64 {
        match axis {
            AxisId::X => self.x_scale,
            AxisId::Y => self.y_scale,
        }
    }

    #[inline]
    pub fn to_pixel_x(&self, x: f64) -> i32 {
        ((x - self.x.min) / self.x_scale + self.viewport.left as f64) as i32
    }

    #[inline]
    pub fn to_pixel_y(&self, y: f64) -> i32 {
        ((y - self.y.max) / self.y_scale + self.viewport.top as f64) as i32
    }

    #[inline]
    pub fn to_data_x(&self, px: i32) -> f64 {
        (px - self.viewport.left) as f64 * self.x_scale + self.x.min
    }

    #[inline]
    pub fn to_data_y(&self, py: i32) -> f64 {
        (py - self.viewport.top) as f64 * self.y_scale + self.y.max
    }

    /// Both coordinates lie inside the mapped ranges (inclusive).
    pub fn is_in_range(&self, x: f64, y: f64) -> bool {
        self.x.inside(x) && self.y.inside(y)
    }

    /// Find the roundest number within one pixel of `value` on `axis`.
    ///
    /// `direction` limits which neighbour may be chosen. The returned
    /// [`Rounding`] tells the caller which way the value actually moved;
    /// `Any` means it stayed put (or was truncated onto an integer).
    pub fn nearest_pixel_round(&self, value: f64, axis: AxisId, direction: Rounding) -> (f64, Rounding) {
        let step = self.scale(axis).abs();
        let here = float_round(value);

        match direction {
            Rounding::Up => {
                let up = float_round(value + step);
                if here.value < 0.0 && up.value > 0.0 {
                    (0.0, Rounding::Up)
                } else if here.value.trunc().abs() < up.value.trunc().abs() {
                    (up.value.trunc(), Rounding::Up)
                } else if here.sig_digits > up.sig_digits {
                    (up.value, Rounding::Up)
                } else {
                    (value, Rounding::Any)
                }
            }
            Rounding::Down => {
                let down = float_round(value - step);
                if here.value > 0.0 && down.value < 0.0 {
                    (0.0, Rounding::Down)
                } else if here.value.trunc().abs() > down.value.trunc().abs() {
                    (here.value.trunc(), Rounding::Any)
                } else if here.sig_digits > down.sig_digits {
                    (down.value, Rounding::Down)
                } else {
                    (value, Rounding::Any)
                }
            }
            Rounding::Any => {
                let up = float_round(value + step);
                let down = float_round(value - step);
                if here.value < 0.0 && up.value > 0.0 {
                    return (0.0, Rounding::Up);
                }
                if here.value > 0.0 && down.value < 0.0 {
                    return (0.0, Rounding::Down);
                }
                if here.value.trunc().abs() < up.value.trunc().abs() {
                    return (up.value.trunc(), Rounding::Up);
                }
                if here.value.trunc().abs() > down.value.trunc().abs() {
                    return (here.value.trunc(), Rounding::Any);
                }

                let fewest = here.sig_digits.min(up.sig_digits).min(down.sig_digits);
                if fewest == here.sig_digits {
                    (here.value, Rounding::Any)
                } else if fewest == up.sig_digits {
                    (up.value, Rounding::Up)
                } else {
                    (down.value, Rounding::Down)
                }
            }
        }
    }
}
