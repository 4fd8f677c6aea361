// File: crates/demo/src/lib.rs
// Summary: Built-in gallery figures and data loaders shared by the PNG and window demos.

use std::f64::consts::PI;
use std::path::Path;

use anyhow::{bail, Context, Result};
use plot_core::color::{self, Rgb};
use plot_core::{ops, Grain, Plot, RenderOptions, SampleSeries, TraceStyle, NOPLOT};
use tracing::{debug, warn};

const DEG_TO_RAD: f64 = PI / 180.0;

/// Owned data for one plot window/image.
pub struct Figure {
    pub name: &'static str,
    pub title: String,
    pub traces: Vec<FigureTrace>,
}

pub struct FigureTrace {
    pub x: SampleSeries,
    pub y: SampleSeries,
    pub style: TraceStyle,
    pub markers: Vec<(f64, f64)>,
}

impl FigureTrace {
    pub fn new(x: SampleSeries, y: SampleSeries, color: Rgb) -> Self {
        Self { x, y, style: TraceStyle::colored(color), markers: Vec::new() }
    }
}

impl Figure {
    pub fn new(name: &'static str, title: impl Into<String>) -> Self {
        Self { name, title: title.into(), traces: Vec::new() }
    }

    pub fn with_trace(mut self, trace: FigureTrace) -> Self {
        self.traces.push(trace);
        self
    }

    /// Borrowing plot over this figure's data.
    pub fn plot(&self, options: RenderOptions) -> Plot<'_> {
        let mut plot = Plot::with_options(options);
        plot.set_title(self.title.clone());
        for t in &self.traces {
            let id = plot.add_trace(&t.x, &t.y, t.style);
            for &(mx, my) in &t.markers {
                plot.add_marker(id, mx, my);
            }
        }
        plot
    }
}

/// `sin(pi x) / (pi x)`, 1 at the origin.
pub fn sinc(x: f64) -> f64 {
    if x.abs() < 0.0001 {
        1.0
    } else {
        (PI * x).sin() / (PI * x)
    }
}

/// `tan` of an angle in degrees, or a break where it exceeds `max` in magnitude.
pub fn tan_less_than(deg: f64, max: f64) -> f64 {
    let y = (deg * DEG_TO_RAD).tan();
    if y.abs() > max {
        NOPLOT
    } else {
        y
    }
}

/// The demonstration plots, in display order.
pub fn gallery() -> Vec<Figure> {
    let mut figures = Vec::new();

    let x = SampleSeries::with_grain(-5.0, 2.0, Grain::default());
    let y = &(&(&x * &x) + &(3.0 * &x)) + 3.0;
    figures.push(Figure::new("parabola", "x^2 + 3x + 3").with_trace(FigureTrace::new(x, y, color::BLUE)));

    let (mut x, mut y) = (SampleSeries::new(), SampleSeries::new());
    for i in -180..=180 {
        let deg = f64::from(i);
        ops::point(&mut x, &mut y, deg, deg / 180.0 + (deg * DEG_TO_RAD).cos());
    }
    figures.push(
        Figure::new("point_by_point", "x/180 + cos(x), entered point by point")
            .with_trace(FigureTrace::new(x, y, color::BLUE)),
    );

    let x = SampleSeries::with_grain(0.0, 360.0, Grain::default());
    let y = ops::sin(&(&x * DEG_TO_RAD));
    let mut sine = FigureTrace::new(x, y, color::CRIMSON);
    sine.markers.push((90.0, 1.0));
    sine.markers.push((270.0, -1.0));
    figures.push(Figure::new("sine", "sin(x)").with_trace(sine));

    let x = SampleSeries::with_grain(-6.0, 6.0, Grain::Fine);
    let y = ops::map(&x, sinc);
    figures.push(Figure::new("sinc", "sinc(x)").with_trace(FigureTrace::new(x, y, color::BLUE)));

    let x = SampleSeries::with_grain(-270.0, 270.0, Grain::ExtraFine);
    let y = ops::map_with(&x, 20.0, tan_less_than);
    figures.push(Figure::new("tangent", "tan(x)").with_trace(FigureTrace::new(x, y, color::REDRED)));

    let x = SampleSeries::with_grain(-80.0, 255.0, Grain::default());
    let tan = ops::map_with(&x, 3.0, tan_less_than);
    let cos2 = 2.0 * &ops::cos(&(&x * (2.0 * DEG_TO_RAD)));
    figures.push(
        Figure::new("tan_and_cos", "tan(x) and 2cos(2x)")
            .with_trace(FigureTrace::new(x.clone(), tan, color::BLUE))
            .with_trace(FigureTrace::new(x, cos2, color::BLUEBLUE)),
    );

    let x = SampleSeries::with_grain(-315.0, 45.0, Grain::default());
    let rad = &x * DEG_TO_RAD;
    let shifted = &(&x - 45.0) * (2.0 * DEG_TO_RAD);
    figures.push(
        Figure::new("four_trig", "sin(x) green, cos(x) red, sin(2x - 90) orange, cos(2x) blue")
            .with_trace(FigureTrace::new(x.clone(), ops::sin(&rad), Rgb::new(0, 160, 0)))
            .with_trace(FigureTrace::new(x.clone(), ops::cos(&rad), color::CRIMSON))
            .with_trace(FigureTrace::new(x.clone(), ops::sin(&shifted), color::DARKORANGE))
            .with_trace(FigureTrace::new(x, ops::cos(&(&rad * 2.0)), color::BLUEBLUE)),
    );

    let x = SampleSeries::log_range(1.0, 1000.0, 41);
    let y = ops::log10(&x);
    let mut log = FigureTrace::new(x, y, color::DARKGREEN);
    log.style = log.style.with_points(true);
    figures.push(Figure::new("log_spacing", "log10(x) on log-spaced samples").with_trace(log));

    figures
}

/// Load X/Y columns from a CSV file. Rows whose cells do not parse become
/// breaks in the line rather than being dropped.
pub fn load_xy_csv(path: &Path, x_col: usize, y_col: usize, has_headers: bool) -> Result<(SampleSeries, SampleSeries)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    if has_headers {
        let headers = rdr.headers()?.iter().map(str::to_owned).collect::<Vec<_>>();
        debug!(?headers, "csv headers");
    }

    let (mut x, mut y) = (SampleSeries::new(), SampleSeries::new());
    let mut unparsed = 0usize;
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading row {row} of {}", path.display()))?;
        let cell = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok());
        match (cell(x_col), cell(y_col)) {
            (Some(xv), Some(yv)) => ops::point(&mut x, &mut y, xv, yv),
            _ => {
                unparsed += 1;
                ops::break_plot(&mut x, &mut y);
            }
        }
    }
    if unparsed > 0 {
        warn!(unparsed, "rows without numeric x/y became line breaks");
    }
    if x.len() < 2 {
        bail!("{} has fewer than two rows of data", path.display());
    }
    Ok((x, y))
}
