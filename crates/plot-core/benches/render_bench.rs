use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plot_core::{Plot, SampleSeries, TraceStyle};

fn build_series(n: usize) -> (SampleSeries, SampleSeries) {
    let x = SampleSeries::linear_range(0.0, (n - 1) as f64, n);
    let y = x.iter().map(|v| (v * 0.01).sin() * 10.0 + v * 0.0001).collect();
    (x, y)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[10_000usize, 50_000usize] {
        let (x, y) = build_series(n);
        group.bench_function(format!("xy_{n}"), |b| {
            let mut plot = Plot::new();
            plot.options.width = 800;
            plot.options.height = 500;
            plot.options.draw_labels = false;
            plot.add_trace(&x, &y, TraceStyle::default());
            b.iter(|| {
                let (bytes, _) = plot.render_to_png_bytes().expect("render");
                black_box(bytes);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
