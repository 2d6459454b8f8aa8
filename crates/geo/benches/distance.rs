//! Benchmarks for distance, nearby placement and polyline decoding.

use catmap_geo::{decode_polyline, distance_meters, encode_polyline, GeoPosition, NearbyGenerator};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn create_route(len: usize) -> Vec<GeoPosition> {
    (0..len)
        .map(|i| {
            // Zig-zag walk north-east from Tianzifang
            let lat = 31.2079 + i as f64 * 0.00012;
            let lng = 121.4737 + (i % 7) as f64 * 0.00009;
            GeoPosition::new(lat, lng)
        })
        .collect()
}

fn bench_single_distance(c: &mut Criterion) {
    c.bench_function("haversine_single", |b| {
        b.iter(|| {
            distance_meters(
                black_box(31.2079),
                black_box(121.4737),
                black_box(31.2304),
                black_box(121.4737),
            )
        })
    });
}

fn bench_generate_nearby(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_nearby");
    let generator = NearbyGenerator::default();
    let center = GeoPosition::new(31.2079, 121.4737);

    for count in [8, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("cats", count), count, |b, &count| {
            let mut rng = SmallRng::seed_from_u64(1);
            b.iter(|| generator.generate(black_box(center), count, 2000.0, &mut rng))
        });
    }

    group.finish();
}

fn bench_decode_polyline(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_polyline");

    for len in [10, 100, 1000].iter() {
        let encoded = encode_polyline(&create_route(*len));
        group.bench_with_input(BenchmarkId::new("points", len), len, |b, _| {
            b.iter(|| decode_polyline(black_box(&encoded)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_distance,
    bench_generate_nearby,
    bench_decode_polyline
);
criterion_main!(benches);
