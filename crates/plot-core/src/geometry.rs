// File: crates/plot-core/src/geometry.rs
// Summary: Integer pixel rectangles and grid-position helpers.

use crate::types::Insets;

/// Pixel rectangle; `right`/`bottom` are exclusive edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self { left: 0, top: 0, right: width, bottom: height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Shrink by `insets`; the result may be empty but never inverted.
    pub fn inset(&self, insets: &Insets) -> Self {
        let left = self.left + insets.left as i32;
        let top = self.top + insets.top as i32;
        let right = (self.right - insets.right as i32).max(left);
        let bottom = (self.bottom - insets.bottom as i32).max(top);
        Self { left, top, right, bottom }
    }

    pub const fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// X of gridline `i` out of `divs` across the width.
    pub fn grid_x(&self, i: u32, divs: u32) -> i32 {
        self.left + mul_div(self.width(), i as i32, divs as i32)
    }

    /// Y of gridline `i` out of `divs` down the height.
    pub fn grid_y(&self, i: u32, divs: u32) -> i32 {
        self.top + mul_div(self.height(), i as i32, divs as i32)
    }
}

/// `a * b / c` with a 64-bit intermediate, rounded half away from zero.
/// Returns 0 when `c` is 0.
pub fn mul_div(a: i32, b: i32, c: i32) -> i32 {
    if c == 0 {
        return 0;
    }
    let num = a as i64 * b as i64;
    let den = c as i64;
    let magnitude = (num.abs() + den.abs() / 2) / den.abs();
    let q = if (num < 0) != (den < 0) { -magnitude } else { magnitude };
    q as i32
}
