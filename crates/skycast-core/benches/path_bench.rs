use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use skycast_core::path::graph_path;
use skycast_core::sample::{Sample, Series};
use skycast_core::types::Extent;

fn gen_series(n: usize) -> Series {
    let mut samples = Vec::with_capacity(n);
    for i in 0..n {
        // simple waveform with drift
        let v = (i as f64 * 0.05).sin() * 12.0 + 60.0 + i as f64 * 0.001;
        samples.push(Sample::new(format!("{i}h"), v));
    }
    Series::new(samples)
}

fn bench_graph_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_path");
    let extent = Extent::new(1024.0, 320.0);
    for &n in &[24usize, 1_000usize, 10_000usize] {
        let series = gen_series(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &series, |b, s| {
            b.iter(|| {
                let _ = black_box(graph_path(s, extent));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_graph_path);
criterion_main!(benches);
