use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use parbench::fetch::{build_client, fetch_multiple_single, fetch_multiple_threaded};
use parbench::slow_api::{SlowApiConfig, SlowApiServer};
use std::time::Duration;

/// Benchmark sequential vs threaded requests against a local delayed endpoint
fn bench_sequential_vs_threaded(c: &mut Criterion) {
    let server = SlowApiServer::spawn(
        "127.0.0.1:0".parse().unwrap(),
        SlowApiConfig {
            delay: Duration::from_millis(5),
            ..Default::default()
        },
    )
    .unwrap();
    let url = server.url();
    let client = build_client().unwrap();

    let mut group = c.benchmark_group("sequential_vs_threaded");
    group.sample_size(10);

    for requests in [4usize, 16].iter() {
        group.bench_with_input(
            BenchmarkId::new("sequential", requests),
            requests,
            |b, &n| {
                b.iter(|| black_box(fetch_multiple_single(&client, &url, n)));
            },
        );

        group.bench_with_input(BenchmarkId::new("threaded", requests), requests, |b, &n| {
            b.iter(|| black_box(fetch_multiple_threaded(&client, &url, n, 4).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sequential_vs_threaded);
criterion_main!(benches);
