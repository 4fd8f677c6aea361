// File: crates/plot-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small plot (labels off) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for an exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use plot_core::color::{CRIMSON, DARKGREEN};
use plot_core::series::NOPLOT;
use plot_core::{Plot, RenderOptions, SampleSeries, TraceStyle};

fn render_bytes() -> Vec<u8> {
    let x = SampleSeries::from_slice(&[0.0, 1.0, 2.0, 3.0, 4.0]);
    let y = SampleSeries::from_slice(&[0.0, 1.0, NOPLOT, 1.5, 1.0]);
    let x2 = SampleSeries::linear_range(0.0, 4.0, 9);
    let y2: SampleSeries = x2.iter().map(|v| 0.25 * v).collect();

    let mut plot = Plot::with_options(RenderOptions {
        width: 320,
        height: 240,
        draw_labels: false, // avoid text nondeterminism across platforms
        ..RenderOptions::default()
    });
    let id = plot.add_trace(&x, &y, TraceStyle::colored(CRIMSON));
    plot.add_marker(id, 3.0, 1.5);
    plot.add_trace(&x2, &y2, TraceStyle::colored(DARKGREEN).with_points(true));

    let (bytes, _) = plot.render_to_png_bytes().expect("render png");
    bytes
}

#[test]
fn golden_basic_plot() {
    let bytes = render_bytes();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("basic_plot.png");

    let update = std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.dimensions(), want_img.dimensions());
        assert_eq!(
            got_img.as_raw(),
            want_img.as_raw(),
            "rendered pixels differ from golden snapshot: {}",
            snap_path.display()
        );
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn rendering_is_deterministic() {
    assert_eq!(render_bytes(), render_bytes());
}
