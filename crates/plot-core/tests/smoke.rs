// File: crates/plot-core/tests/smoke.rs
// Purpose: End-to-end render smoke test writing a PNG.

use plot_core::color::CRIMSON;
use plot_core::{ops, Plot, SampleSeries};

#[test]
fn render_smoke_png() {
    let x = SampleSeries::linear_range(-5.0, 2.0, 301);
    let y = ops::map(&x, |v| v * v + 3.0 * v + 3.0);
    let mut plot = Plot::single(&x, &y, CRIMSON);

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    let report = plot.render_to_png(&out).expect("render should succeed");
    assert!(report.layout.is_some());
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let (bytes, _) = plot.render_to_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_without_data_still_produces_png() {
    let mut plot = Plot::new();
    let (bytes, report) = plot.render_to_png_bytes().expect("render bytes");
    assert!(report.layout.is_none());
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
