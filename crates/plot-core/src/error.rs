// File: crates/plot-core/src/error.rs
// Summary: Error type for the fallible edges of the library (series text I/O, raster output).

use thiserror::Error;

/// Errors raised at I/O and raster boundaries.
///
/// Numeric degeneracies (empty ranges, log ranges crossing zero, traces too
/// short to draw) are not errors; they degrade to no-ops.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed series text at token {index}: {reason}")]
    Parse { index: usize, reason: String },

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("encode PNG failed")]
    Encode,

    #[error("reading back surface pixels failed")]
    ReadPixels,
}

pub type Result<T> = std::result::Result<T, PlotError>;
