// File: crates/plot-core/src/trace.rs
// Summary: Paired X/Y traces and the pen-up/pen-down renderer that draws them.
// Notes:
// - A point is plotted only when both of its coordinates are finite; anything
//   else lifts the pen, so the next plotted point starts a new segment.
// - Rendering never fails. Traces that cannot be drawn report why and emit nothing.

use tracing::debug;

use crate::backend::{Dash, DrawBackend, PenScope, PenStyle};
use crate::color::{Rgb, BLUE};
use crate::mapper::CoordinateMapper;
use crate::range::{range_xy, Range};
use crate::series::SampleSeries;

/// How a trace is stroked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceStyle {
    pub color: Rgb,
    pub width: f32,
    pub dash: Dash,
    /// Draw the point glyph on every plotted sample as well as the line.
    pub show_points: bool,
}

impl Default for TraceStyle {
    fn default() -> Self {
        Self { color: BLUE, width: 1.0, dash: Dash::Solid, show_points: false }
    }
}

impl TraceStyle {
    pub fn colored(color: Rgb) -> Self {
        Self { color, ..Self::default() }
    }

    pub fn with_points(mut self, on: bool) -> Self {
        self.show_points = on;
        self
    }

    pub fn pen(&self) -> PenStyle {
        PenStyle { color: self.color, width: self.width, dash: self.dash }
    }
}

/// A single highlighted data point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
}

/// X and Y samples drawn as one curve. The series are borrowed for the
/// lifetime of the plot that owns the trace.
#[derive(Clone, Debug)]
pub struct Trace<'a> {
    pub x: &'a SampleSeries,
    pub y: &'a SampleSeries,
    pub style: TraceStyle,
    pub markers: Vec<Marker>,
}

impl<'a> Trace<'a> {
    pub fn new(x: &'a SampleSeries, y: &'a SampleSeries, style: TraceStyle) -> Self {
        Self { x, y, style, markers: Vec::new() }
    }

    pub fn add_marker(&mut self, x: f64, y: f64) {
        self.markers.push(Marker { x, y });
    }

    /// Why this trace cannot be drawn, if it cannot.
    pub fn skip_reason(&self) -> Option<SkipReason> {
        let (x_len, y_len) = (self.x.len(), self.y.len());
        if x_len < 2 {
            Some(SkipReason::TooFewPoints { len: x_len })
        } else if x_len > y_len {
            Some(SkipReason::LengthMismatch { x_len, y_len })
        } else {
            None
        }
    }

    /// Data ranges of the plottable points; `None` for traces that will be skipped.
    pub fn ranges(&self) -> Option<(Range, Range)> {
        if self.skip_reason().is_some() {
            return None;
        }
        Some(range_xy(self.x, self.y))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// A line needs at least two X samples.
    TooFewPoints { len: usize },
    /// More X samples than Y samples.
    LengthMismatch { x_len: usize, y_len: usize },
    /// No trace in the plot has a finite point, so there are no axes to map onto.
    NoLayout,
}

/// What [`render_trace`] did with a trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceOutcome {
    Skipped(SkipReason),
    /// `segments` counts connected runs of two or more points; `points`
    /// counts every plotted sample.
    Drawn { segments: usize, points: usize },
}

/// Draw `trace` with its own pen, then its markers.
pub fn render_trace(trace: &Trace<'_>, mapper: &CoordinateMapper, backend: &mut dyn DrawBackend) -> TraceOutcome {
    if let Some(reason) = trace.skip_reason() {
        debug!(?reason, "trace skipped");
        return TraceOutcome::Skipped(reason);
    }

    let mut pen = PenScope::new(backend, &trace.style.pen());
    let mut pen_down = false;
    let mut run = 0usize;
    let mut segments = 0usize;
    let mut points = 0usize;

    for (x, y) in trace.x.iter().zip(trace.y.iter()) {
        if !(x.is_finite() && y.is_finite()) {
            pen_down = false;
            continue;
        }
        let (px, py) = (mapper.to_pixel_x(x), mapper.to_pixel_y(y));
        if pen_down {
            pen.line_to(px, py);
            run += 1;
            if run == 2 {
                segments += 1;
            }
        } else {
            pen.move_to(px, py);
            pen_down = true;
            run = 1;
        }
        points += 1;
    }

    if trace.style.show_points {
        for (x, y) in trace.x.iter().zip(trace.y.iter()) {
            if x.is_finite() && y.is_finite() {
                point_glyph(&mut *pen, mapper.to_pixel_x(x), mapper.to_pixel_y(y));
            }
        }
    }
    for m in trace.markers.iter().filter(|m| m.x.is_finite() && m.y.is_finite()) {
        point_glyph(&mut *pen, mapper.to_pixel_x(m.x), mapper.to_pixel_y(m.y));
    }

    TraceOutcome::Drawn { segments, points }
}

/// Small hollow square around `(x, y)`, drawn as four unconnected strokes
/// with the current pen.
pub fn point_glyph<B: DrawBackend + ?Sized>(backend: &mut B, x: i32, y: i32) {
    backend.move_to(x - 1, y - 2);
    backend.line_to(x + 1, y - 2);
    backend.move_to(x - 1, y + 2);
    backend.line_to(x + 1, y + 2);
    backend.move_to(x - 2, y - 1);
    backend.line_to(x - 2, y + 1);
    backend.move_to(x + 2, y - 1);
    backend.line_to(x + 2, y + 1);
}
