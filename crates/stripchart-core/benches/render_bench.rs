// File: crates/stripchart-core/benches/render_bench.rs
// Summary: Full repaint cost of a 1920x1080 three-channel chart at different window fills.

use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stripchart_core::{ChartEngine, Sample};

fn build_chart(samples: usize) -> Result<ChartEngine<3>> {
    let mut ch: ChartEngine<3> = ChartEngine::new()?;
    ch.set_window_size(1920, 1080)?;
    ch.set_axis_title(0, "position");
    ch.set_axis_title(1, "force");
    ch.set_axis_title(2, "velocity");
    let dt = 2.0 / samples as f64;
    for i in 0..samples {
        let t = i as f64 * dt;
        ch.push(Sample::new(t, [(4.0 * t).sin(), 0.5 * (3.0 * t).sin(), 0.8 * (1.6 * t).sin()]));
    }
    Ok(ch)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_dirty");
    for &n in &[1_000usize, 5_000usize] {
        group.bench_function(format!("samples_{n}"), |b| {
            let mut ch = build_chart(n).expect("chart");
            let mut t = 2.0;
            b.iter(|| -> Result<()> {
                // One push per frame keeps the canvas dirty, as in a live feed.
                t += 1e-4;
                ch.push(Sample::new(t, [0.0, 0.0, 0.0]));
                black_box(ch.draw()?);
                Ok(())
            });
        });
    }
    group.bench_function("draw_clean", |b| {
        let mut ch = build_chart(5_000).expect("chart");
        b.iter(|| -> Result<()> {
            black_box(ch.draw()?);
            Ok(())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
