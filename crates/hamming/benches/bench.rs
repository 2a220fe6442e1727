use core::hint::black_box;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tokio::runtime::Builder;

/// Benchmarks a full network run: wiring, seeding, producing `count`
/// values, and cooperative teardown. Throughput is values delivered to the
/// sink callback per second.
fn bench_run(c: &mut Criterion) {
    let rt = Builder::new_multi_thread()
        .build()
        .expect("failed to build tokio runtime");

    let mut group = c.benchmark_group("network/run");
    for count in [100_usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.to_async(&rt).iter(|| async move {
                hamming::run(count, |value| {
                    black_box(value);
                })
                .await
                .expect("network run failed");
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_run);
criterion_main!(benches);
