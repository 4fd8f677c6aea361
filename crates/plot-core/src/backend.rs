// File: crates/plot-core/src/backend.rs
// Summary: Primitive drawing interface, scoped pen selection, and a command-recording backend.

use std::ops::{Deref, DerefMut};

use crate::color::Rgb;

/// Line pattern for a pen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Dash {
    #[default]
    Solid,
    Dotted,
}

/// Stroke settings selected for a run of drawing commands. Text drawn while
/// the pen is selected uses its colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PenStyle {
    pub color: Rgb,
    pub width: f32,
    pub dash: Dash,
}

impl PenStyle {
    pub const fn solid(color: Rgb) -> Self {
        Self { color, width: 1.0, dash: Dash::Solid }
    }

    pub const fn dotted(color: Rgb) -> Self {
        Self { color, width: 1.0, dash: Dash::Dotted }
    }

    pub const fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}

/// Horizontal anchor of a text run; `y` is always the top of the text box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Drawing primitives the plot needs from a surface.
///
/// Coordinates are integer pixels with the origin at the top-left corner.
/// `move_to`/`line_to` keep a current point like a plotter pen.
pub trait DrawBackend {
    /// Select `pen`; the previous pen is restored by the matching `pop_pen`.
    fn push_pen(&mut self, pen: &PenStyle);
    fn pop_pen(&mut self);
    fn move_to(&mut self, x: i32, y: i32);
    /// Stroke from the current point to `(x, y)` and make it current.
    fn line_to(&mut self, x: i32, y: i32);
    fn draw_text(&mut self, x: i32, y: i32, text: &str, align: TextAlign);
    /// Width and height of `text` in pixels.
    fn measure_text(&self, text: &str) -> (i32, i32);
    fn clear(&mut self, color: Rgb);
}

/// Keeps a pen selected for its lifetime and pops it on drop, so every exit
/// path (early return or unwind) restores the previous pen.
pub struct PenScope<'b, B: DrawBackend + ?Sized> {
    backend: &'b mut B,
}

impl<'b, B: DrawBackend + ?Sized> PenScope<'b, B> {
    pub fn new(backend: &'b mut B, pen: &PenStyle) -> Self {
        backend.push_pen(pen);
        Self { backend }
    }
}

impl<B: DrawBackend + ?Sized> Deref for PenScope<'_, B> {
    type Target = B;

    fn deref(&self) -> &B {
        self.backend
    }
}

impl<B: DrawBackend + ?Sized> DerefMut for PenScope<'_, B> {
    fn deref_mut(&mut self) -> &mut B {
        self.backend
    }
}

impl<B: DrawBackend + ?Sized> Drop for PenScope<'_, B> {
    fn drop(&mut self) {
        self.backend.pop_pen();
    }
}

/// One call made against a [`RecordingBackend`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    PushPen(PenStyle),
    PopPen,
    MoveTo(i32, i32),
    LineTo(i32, i32),
    Text { x: i32, y: i32, text: String, align: TextAlign },
    Clear(Rgb),
}

/// Backend that records every call. Text is measured with a fixed cell size.
#[derive(Clone, Debug)]
pub struct RecordingBackend {
    commands: Vec<DrawCommand>,
    pen_depth: usize,
    max_pen_depth: usize,
    char_size: (i32, i32),
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self { commands: Vec::new(), pen_depth: 0, max_pen_depth: 0, char_size: (8, 16) }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Pens pushed and not yet popped.
    pub fn pen_depth(&self) -> usize {
        self.pen_depth
    }

    pub fn max_pen_depth(&self) -> usize {
        self.max_pen_depth
    }

    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    pub fn line_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::LineTo(..)))
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawBackend for RecordingBackend {
    fn push_pen(&mut self, pen: &PenStyle) {
        self.pen_depth += 1;
        self.max_pen_depth = self.max_pen_depth.max(self.pen_depth);
        self.commands.push(DrawCommand::PushPen(*pen));
    }

    fn pop_pen(&mut self) {
        self.pen_depth = self.pen_depth.saturating_sub(1);
        self.commands.push(DrawCommand::PopPen);
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.commands.push(DrawCommand::MoveTo(x, y));
    }

    fn line_to(&mut self, x: i32, y: i32) {
        self.commands.push(DrawCommand::LineTo(x, y));
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, align: TextAlign) {
        self.commands.push(DrawCommand::Text { x, y, text: text.to_owned(), align });
    }

    fn measure_text(&self, text: &str) -> (i32, i32) {
        let (w, h) = self.char_size;
        (w * text.chars().count() as i32, h)
    }

    fn clear(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::Clear(color));
    }
}
