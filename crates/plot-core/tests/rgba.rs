// File: crates/plot-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use plot_core::color::{BLUEBLUE, WHITE};
use plot_core::{Insets, Plot, SampleSeries, TraceStyle};

#[test]
fn render_rgba8_buffer() {
    let x = SampleSeries::from_slice(&[0.0, 4.0]);
    let y = SampleSeries::from_slice(&[0.0, 4.0]);
    let mut plot = Plot::single(&x, &y, BLUEBLUE);
    plot.options.draw_labels = false; // avoid font variance

    let (px, w, h, stride) = plot.render_to_rgba8().expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left corner is outside the plot area: opaque background.
    assert_eq!(&px[0..4], &[WHITE.r, WHITE.g, WHITE.b, 255]);
}

#[test]
fn horizontal_trace_lands_on_expected_row() {
    // y = 0.5 on a 0..1 axis is the middle row of the plot area.
    let x = SampleSeries::from_slice(&[0.0, 1.0]);
    let y = SampleSeries::from_slice(&[0.0, 1.0]);
    let flat_x = SampleSeries::from_slice(&[0.0, 1.0]);
    let flat_y = SampleSeries::from_slice(&[0.5, 0.5]);

    let mut plot = Plot::new();
    plot.options.width = 200;
    plot.options.height = 120;
    plot.options.insets = Insets::new(10, 10, 10, 10);
    plot.options.draw_labels = false;
    plot.add_trace(&x, &y, TraceStyle::colored(WHITE));
    plot.add_trace(&flat_x, &flat_y, TraceStyle::colored(BLUEBLUE));

    let (px, w, _, stride) = plot.render_to_rgba8().expect("rgba render");
    let mapper = plot.mapper().expect("configured after paint");
    let row = mapper.to_pixel_y(0.5) as usize;
    let col = (w / 2) as usize;
    let at = row * stride + col * 4;
    assert_eq!(&px[at..at + 4], &[BLUEBLUE.r, BLUEBLUE.g, BLUEBLUE.b, 255]);
}
