// File: crates/stripchart-core/benches/push_bench.rs
// Summary: Append + eviction throughput of the time-window buffer.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stripchart_core::{Sample, TimeWindowBuffer};

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_append");
    for &(label, dt) in &[("dense_window", 1e-4f64), ("sparse_window", 0.05f64)] {
        group.bench_function(label, |b| {
            let mut buffer = TimeWindowBuffer::<3>::new(2.0);
            let mut t = 0.0;
            b.iter(|| {
                t += dt;
                buffer.append(black_box(Sample::new(t, [t, -t, 0.5 * t])));
            });
            black_box(buffer.len());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_push);
criterion_main!(benches);
