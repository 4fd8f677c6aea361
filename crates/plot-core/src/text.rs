// File: crates/plot-core/src/text.rs
// Summary: Tick label shaping and drawing with Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::backend::TextAlign;

const LABEL_FAMILIES: [&str; 6] = ["Arial", "Helvetica", "Segoe UI", "Roboto", "DejaVu Sans", "sans-serif"];

/// Lays out single-line labels at a fixed font size.
pub struct TextShaper {
    fonts: FontCollection,
    size: f32,
}

impl TextShaper {
    pub fn new(size: f32) -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc, size: size.max(1.0) }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    fn layout(&self, text: &str, color: skia::Color) -> Paragraph {
        let mut ts = TextStyle::new();
        ts.set_font_size(self.size);
        ts.set_color(color);
        ts.set_font_families(&LABEL_FAMILIES);

        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&ts);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Width and height of `text`, rounded up to whole pixels.
    pub fn measure(&self, text: &str) -> (i32, i32) {
        let p = self.layout(text, skia::Color::TRANSPARENT);
        let height = if p.height() > 0.0 { p.height() } else { self.size };
        (p.longest_line().ceil() as i32, height.ceil() as i32)
    }

    /// Draw `text` with its box top at `y`, anchored horizontally at `x`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, color: skia::Color, align: TextAlign) {
        let mut p = self.layout(text, color);
        let w = p.longest_line();
        let left = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - w / 2.0,
            TextAlign::Right => x - w,
        };
        p.paint(canvas, (left, y));
    }
}
