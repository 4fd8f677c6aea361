// File: crates/plot-core/src/skia_backend.rs
// Summary: DrawBackend over a Skia canvas (CPU raster or any other surface).

use skia_safe as skia;

use crate::backend::{Dash, DrawBackend, PenStyle, TextAlign};
use crate::color::{Rgb, BLACK};
use crate::text::TextShaper;

impl From<Rgb> for skia::Color {
    fn from(c: Rgb) -> Self {
        skia::Color::from_rgb(c.r, c.g, c.b)
    }
}

/// Strokes integer pixel coordinates onto `canvas` through pixel centres so
/// one-pixel lines stay crisp.
pub struct SkiaBackend<'c> {
    canvas: &'c skia::Canvas,
    text: &'c TextShaper,
    pens: Vec<PenStyle>,
    cursor: (i32, i32),
}

impl<'c> SkiaBackend<'c> {
    pub fn new(canvas: &'c skia::Canvas, text: &'c TextShaper) -> Self {
        Self { canvas, text, pens: Vec::new(), cursor: (0, 0) }
    }

    fn pen(&self) -> PenStyle {
        self.pens.last().copied().unwrap_or(PenStyle::solid(BLACK))
    }

    fn stroke_paint(&self) -> skia::Paint {
        let pen = self.pen();
        let mut paint = skia::Paint::default();
        paint.set_color(skia::Color::from(pen.color));
        paint.set_anti_alias(pen.width > 1.0);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(pen.width.max(1.0));
        if pen.dash == Dash::Dotted {
            paint.set_path_effect(skia::PathEffect::dash(&[1.0, 2.0], 0.0));
        }
        paint
    }
}

fn centre(x: i32, y: i32) -> skia::Point {
    skia::Point::new(x as f32 + 0.5, y as f32 + 0.5)
}

impl DrawBackend for SkiaBackend<'_> {
    fn push_pen(&mut self, pen: &PenStyle) {
        self.pens.push(*pen);
    }

    fn pop_pen(&mut self) {
        self.pens.pop();
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.cursor = (x, y);
    }

    fn line_to(&mut self, x: i32, y: i32) {
        let (x0, y0) = self.cursor;
        self.canvas.draw_line(centre(x0, y0), centre(x, y), &self.stroke_paint());
        self.cursor = (x, y);
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, align: TextAlign) {
        let color = skia::Color::from(self.pen().color);
        self.text.draw(self.canvas, text, x as f32, y as f32, color, align);
    }

    fn measure_text(&self, text: &str) -> (i32, i32) {
        self.text.measure(text)
    }

    fn clear(&mut self, color: Rgb) {
        self.canvas.clear(skia::Color::from(color));
    }
}
