// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports the public API for building and rendering plots.

pub mod axis;
pub mod backend;
pub mod color;
pub mod divisions;
pub mod error;
pub mod geometry;
pub mod mapper;
pub mod ops;
pub mod plot;
pub mod range;
pub mod round;
pub mod series;
pub mod skia_backend;
pub mod text;
pub mod textio;
pub mod trace;
pub mod types;

pub use axis::{compute_layout, format_label, AxisLayout, PlotLayout};
pub use backend::{Dash, DrawBackend, DrawCommand, PenScope, PenStyle, RecordingBackend, TextAlign};
pub use color::{Rgb, Theme};
pub use divisions::{x_divisions, y_divisions};
pub use error::{PlotError, Result};
pub use geometry::RectI32;
pub use mapper::{AxisId, CoordinateMapper, Rounding};
pub use plot::{PaintReport, Plot, RenderOptions, TraceId};
pub use range::{range_xy, Range};
pub use round::{float_round, nice_range, Rounded};
pub use series::{Grain, SampleSeries, Spacing, NOPLOT};
pub use skia_backend::SkiaBackend;
pub use text::TextShaper;
pub use textio::{read_series, write_series};
pub use trace::{render_trace, Marker, SkipReason, Trace, TraceOutcome, TraceStyle};
pub use types::Insets;
