// File: crates/plot-core/src/plot.rs
// Summary: Plot session (trace registry + options), the paint pass, and Skia raster export.

use skia_safe as skia;
use tracing::debug;

use crate::axis::{compute_layout, format_label, PlotLayout};
use crate::backend::{DrawBackend, PenScope, PenStyle, TextAlign};
use crate::color::{Rgb, Theme};
use crate::error::{PlotError, Result};
use crate::geometry::RectI32;
use crate::mapper::{AxisId, CoordinateMapper};
use crate::range::Range;
use crate::series::SampleSeries;
use crate::skia_backend::SkiaBackend;
use crate::text::TextShaper;
use crate::trace::{render_trace, SkipReason, Trace, TraceOutcome, TraceStyle};
use crate::types::{Insets, HEIGHT, MARK_LENGTH, WIDTH};

/// Surface and drawing settings for a plot.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub font_size: f32,
    pub draw_labels: bool,
    /// Round the X range outward as well as Y.
    pub nice_x: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            font_size: 14.0,
            draw_labels: true,
            nice_x: false,
        }
    }
}

/// Handle returned by [`Plot::add_trace`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TraceId(usize);

/// Result of one paint pass.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintReport {
    pub layout: Option<PlotLayout>,
    /// One entry per registered trace, in registration order.
    pub outcomes: Vec<TraceOutcome>,
}

/// A set of traces drawn onto shared axes.
///
/// Series are borrowed, so the plot cannot outlive its data. The coordinate
/// mapper is rebuilt on every paint and is `None` until a paint found
/// something to plot.
pub struct Plot<'a> {
    title: Option<String>,
    traces: Vec<Trace<'a>>,
    pub options: RenderOptions,
    mapper: Option<CoordinateMapper>,
}

impl<'a> Default for Plot<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Plot<'a> {
    pub fn new() -> Self {
        Self { title: None, traces: Vec::new(), options: RenderOptions::default(), mapper: None }
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options, ..Self::new() }
    }

    /// One-trace plot in the given colour.
    pub fn single(x: &'a SampleSeries, y: &'a SampleSeries, color: Rgb) -> Self {
        let mut plot = Self::new();
        plot.add_trace(x, y, TraceStyle::colored(color));
        plot
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn add_trace(&mut self, x: &'a SampleSeries, y: &'a SampleSeries, style: TraceStyle) -> TraceId {
        self.traces.push(Trace::new(x, y, style));
        TraceId(self.traces.len() - 1)
    }

    /// Highlight `(x, y)` on a trace. Returns false for an unknown id.
    pub fn add_marker(&mut self, id: TraceId, x: f64, y: f64) -> bool {
        match self.traces.get_mut(id.0) {
            Some(trace) => {
                trace.add_marker(x, y);
                true
            }
            None => false,
        }
    }

    pub fn traces(&self) -> &[Trace<'a>] {
        &self.traces
    }

    pub fn clear_traces(&mut self) {
        self.traces.clear();
        self.mapper = None;
    }

    /// Transform used by the last paint.
    pub fn mapper(&self) -> Option<&CoordinateMapper> {
        self.mapper.as_ref()
    }

    /// Plot area for a surface of the given size.
    pub fn viewport(&self, surface: (i32, i32)) -> RectI32 {
        RectI32::from_size(surface.0, surface.1).inset(&self.options.insets)
    }

    /// Union of the data ranges of every drawable trace.
    pub fn data_ranges(&self) -> (Range, Range) {
        let mut xr = Range::empty();
        let mut yr = Range::empty();
        for (tx, ty) in self.traces.iter().filter_map(Trace::ranges) {
            xr.expand_range(&tx);
            yr.expand_range(&ty);
        }
        (xr, yr)
    }

    /// Layout for the given plot area, or `None` with nothing to plot.
    pub fn layout(&self, viewport: RectI32) -> Option<PlotLayout> {
        let (xr, yr) = self.data_ranges();
        compute_layout(xr, yr, viewport, self.options.nice_x)
    }

    /// Draw the whole plot onto `backend` for a surface of `surface` pixels.
    pub fn paint(&mut self, backend: &mut dyn DrawBackend, surface: (i32, i32)) -> PaintReport {
        let theme = self.options.theme;
        backend.clear(theme.background);

        let viewport = self.viewport(surface);
        let layout = self.layout(viewport);
        self.mapper = layout.as_ref().and_then(PlotLayout::mapper);

        draw_frame(backend, viewport, theme.frame);

        let Some((layout, mapper)) = layout.zip(self.mapper) else {
            debug!(traces = self.traces.len(), "nothing to plot");
            let outcomes = self
                .traces
                .iter()
                .map(|t| TraceOutcome::Skipped(t.skip_reason().unwrap_or(SkipReason::NoLayout)))
                .collect();
            return PaintReport { layout: None, outcomes };
        };

        draw_grid(backend, &layout, &theme);
        if self.options.draw_labels {
            draw_labels(backend, &layout, &mapper, theme.label);
        }

        let outcomes = self.traces.iter().map(|t| render_trace(t, &mapper, backend)).collect();
        PaintReport { layout: Some(layout), outcomes }
    }

    fn paint_surface(&mut self) -> Result<(skia::Surface, PaintReport)> {
        let (w, h) = (self.options.width, self.options.height);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(PlotError::Surface { width: w, height: h })?;
        let shaper = TextShaper::new(self.options.font_size);
        let report = {
            let mut backend = SkiaBackend::new(surface.canvas(), &shaper);
            self.paint(&mut backend, (w, h))
        };
        Ok((surface, report))
    }

    /// Render into a tightly packed, unpremultiplied RGBA buffer.
    /// Returns `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&mut self) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (mut surface, _) = self.paint_surface()?;
        let (w, h) = (self.options.width, self.options.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(PlotError::ReadPixels);
        }
        Ok((pixels, w, h, row_bytes))
    }

    /// Render and encode as PNG.
    pub fn render_to_png_bytes(&mut self) -> Result<(Vec<u8>, PaintReport)> {
        let (mut surface, report) = self.paint_surface()?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image.encode_to_data(skia::EncodedImageFormat::PNG).ok_or(PlotError::Encode)?;
        Ok((data.as_bytes().to_vec(), report))
    }

    /// Render to a PNG file, creating parent directories as needed.
    pub fn render_to_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<PaintReport> {
        let (bytes, report) = self.render_to_png_bytes()?;
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        debug!(path = %path.display(), "wrote png");
        Ok(report)
    }
}

/// Outline drawn one pixel outside the plot area.
fn draw_frame(backend: &mut dyn DrawBackend, vp: RectI32, color: Rgb) {
    let mut pen = PenScope::new(backend, &PenStyle::solid(color));
    pen.move_to(vp.left - 1, vp.top - 1);
    pen.line_to(vp.right, vp.top - 1);
    pen.line_to(vp.right, vp.bottom);
    pen.line_to(vp.left - 1, vp.bottom);
    pen.line_to(vp.left - 1, vp.top - 1);
}

/// Dotted interior gridlines, then tick marks on all four sides.
fn draw_grid(backend: &mut dyn DrawBackend, layout: &PlotLayout, theme: &Theme) {
    let vp = layout.viewport;
    let (xdivs, ydivs) = (layout.x.divisions, layout.y.divisions);
    {
        let mut pen = PenScope::new(&mut *backend, &PenStyle::dotted(theme.grid));
        for i in (1..ydivs).rev() {
            let y = vp.grid_y(i, ydivs);
            pen.move_to(vp.left, y);
            pen.line_to(vp.right, y);
        }
        for i in (1..xdivs).rev() {
            let x = vp.grid_x(i, xdivs);
            pen.move_to(x, vp.top);
            pen.line_to(x, vp.bottom);
        }
    }

    let mut pen = PenScope::new(backend, &PenStyle::solid(theme.tick));
    for i in (1..ydivs).rev() {
        let y = vp.grid_y(i, ydivs);
        pen.move_to(vp.left, y);
        pen.line_to(vp.left + MARK_LENGTH, y);
        pen.move_to(vp.right - MARK_LENGTH, y);
        pen.line_to(vp.right, y);
    }
    for i in (1..xdivs).rev() {
        let x = vp.grid_x(i, xdivs);
        pen.move_to(x, vp.bottom - MARK_LENGTH);
        pen.line_to(x, vp.bottom);
        pen.move_to(x, vp.top);
        pen.line_to(x, vp.top + MARK_LENGTH);
    }
}

/// Y values right-aligned left of the frame, X values centred beneath it.
fn draw_labels(backend: &mut dyn DrawBackend, layout: &PlotLayout, mapper: &CoordinateMapper, color: Rgb) {
    let vp = layout.viewport;
    let mut pen = PenScope::new(backend, &PenStyle::solid(color));
    let (cw, ch) = pen.measure_text("0");

    let ydivs = layout.y.divisions;
    for (i, v) in (0u32..).zip(layout.y.tick_values(AxisId::Y, mapper)) {
        let y = vp.grid_y(i, ydivs) - ch / 2;
        pen.draw_text(vp.left - cw, y, &format_label(v), TextAlign::Right);
    }

    let xdivs = layout.x.divisions;
    for (i, v) in (0u32..).zip(layout.x.tick_values(AxisId::X, mapper)) {
        let x = vp.grid_x(i, xdivs);
        pen.draw_text(x, vp.bottom + ch / 4, &format_label(v), TextAlign::Center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{DrawCommand, RecordingBackend};
    use crate::color::{CRIMSON, DODGERBLUE};
    use crate::series::NOPLOT;

    #[test]
    fn layout_unions_every_drawable_trace() {
        let x1 = SampleSeries::from_slice(&[0.0, 1.0]);
        let y1 = SampleSeries::from_slice(&[0.0, 1.0]);
        let bad_x = SampleSeries::from_slice(&[5.0]);
        let bad_y = SampleSeries::from_slice(&[100.0]);
        let x2 = SampleSeries::from_slice(&[-4.0, 2.0]);
        let y2 = SampleSeries::from_slice(&[-3.0, NOPLOT]);

        let mut plot = Plot::new();
        plot.add_trace(&x1, &y1, TraceStyle::colored(CRIMSON));
        plot.add_trace(&bad_x, &bad_y, TraceStyle::default());
        plot.add_trace(&x2, &y2, TraceStyle::colored(DODGERBLUE));

        let (xr, yr) = plot.data_ranges();
        assert_eq!(xr, Range::new(-4.0, 1.0));
        assert_eq!(yr, Range::new(-3.0, 1.0));
    }

    #[test]
    fn paint_reports_each_trace_and_balances_pens() {
        let x = SampleSeries::linear_range(-5.0, 2.0, 8);
        let y: SampleSeries = x.iter().map(|v| v * v + 3.0 * v + 3.0).collect();
        let short = SampleSeries::from_slice(&[1.0, 2.0]);

        let mut plot = Plot::new();
        plot.add_trace(&x, &y, TraceStyle::default());
        plot.add_trace(&x, &short, TraceStyle::default());
        let mut rec = RecordingBackend::new();

        let report = plot.paint(&mut rec, (640, 480));

        assert!(report.layout.is_some());
        assert_eq!(report.outcomes[0], TraceOutcome::Drawn { segments: 1, points: 8 });
        assert_eq!(
            report.outcomes[1],
            TraceOutcome::Skipped(SkipReason::LengthMismatch { x_len: 8, y_len: 2 })
        );
        assert_eq!(rec.pen_depth(), 0);
        assert!(plot.mapper().is_some());
        assert_eq!(rec.commands()[0], DrawCommand::Clear(Theme::paper().background));
    }

    #[test]
    fn labels_follow_the_divisions() {
        let x = SampleSeries::from_slice(&[-10.0, 40.0]);
        let y = SampleSeries::from_slice(&[-1.0, 1.0]);
        let mut plot = Plot::new();
        plot.options.insets = Insets::new(0, 0, 0, 0);
        plot.add_trace(&x, &y, TraceStyle::default());
        let mut rec = RecordingBackend::new();

        plot.paint(&mut rec, (500, 400));

        assert_eq!(
            rec.texts(),
            vec!["1", "0.5", "0", "-0.5", "-1", "-10", "0", "10", "20", "30", "40"]
        );
    }

    #[test]
    fn labels_can_be_turned_off() {
        let x = SampleSeries::from_slice(&[0.0, 1.0]);
        let mut plot = Plot::single(&x, &x, CRIMSON);
        plot.options.draw_labels = false;
        let mut rec = RecordingBackend::new();
        plot.paint(&mut rec, (640, 480));
        assert!(rec.texts().is_empty());
    }

    #[test]
    fn empty_plot_draws_only_the_frame() {
        let x = SampleSeries::from_slice(&[NOPLOT, NOPLOT]);
        let mut plot = Plot::new();
        plot.add_trace(&x, &x, TraceStyle::default());
        let mut rec = RecordingBackend::new();

        let report = plot.paint(&mut rec, (640, 480));

        assert!(report.layout.is_none());
        assert_eq!(report.outcomes, vec![TraceOutcome::Skipped(SkipReason::NoLayout)]);
        assert!(plot.mapper().is_none());
        assert_eq!(rec.line_count(), 4);
    }

    #[test]
    fn grid_and_ticks_use_integer_positions() {
        let x = SampleSeries::from_slice(&[0.0, 360.0]);
        let y = SampleSeries::from_slice(&[0.0, 15.0]);
        let mut plot = Plot::new();
        plot.options.draw_labels = false;
        plot.options.insets = Insets::new(70, 20, 20, 40);
        plot.add_trace(&x, &y, TraceStyle::default());
        let mut rec = RecordingBackend::new();

        let report = plot.paint(&mut rec, (640, 480));
        let layout = report.layout.expect("layout");

        assert_eq!(layout.viewport, RectI32::from_ltrb(70, 20, 620, 440));
        assert_eq!(layout.x.divisions, 12);
        assert_eq!(layout.y.divisions, 3);
        // Frame 4, grid (11 + 2), ticks 2 per gridline, trace 1.
        assert_eq!(rec.line_count(), 4 + 13 + 26 + 1);
        assert!(rec.commands().contains(&DrawCommand::MoveTo(70, 160)));
        assert!(rec.commands().contains(&DrawCommand::LineTo(620, 160)));
    }

    #[test]
    fn markers_are_attached_by_id() {
        let x = SampleSeries::from_slice(&[0.0, 1.0]);
        let mut plot = Plot::new();
        let id = plot.add_trace(&x, &x, TraceStyle::default());
        assert!(plot.add_marker(id, 0.5, 0.5));
        assert!(!plot.add_marker(TraceId(7), 0.5, 0.5));
        assert_eq!(plot.traces()[0].markers.len(), 1);
    }
}
