//! Benchmarks for radius queries

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vector_space::{Coordinates, PointIndex};

fn create_random_points(n: usize, dim: usize) -> Vec<Coordinates> {
    (0..n)
        .map(|_| {
            let data: Vec<f64> = (0..dim).map(|_| rand::random::<f64>()).collect();
            Coordinates::new(data)
        })
        .collect()
}

fn build_index(n: usize, dim: usize) -> PointIndex<usize> {
    create_random_points(n, dim)
        .into_iter()
        .enumerate()
        .map(|(i, c)| (c, i))
        .collect()
}

fn benchmark_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    for size in [100, 1_000, 10_000].iter() {
        let index = build_index(*size, 16);
        let center = vec![0.5; 16];

        group.bench_with_input(BenchmarkId::new("lazy", size), size, |b, _| {
            b.iter(|| index.query(black_box(&center), black_box(0.8)).count());
        });

        group.bench_with_input(BenchmarkId::new("first_match", size), size, |b, _| {
            b.iter(|| index.query(black_box(&center), black_box(0.8)).next());
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), size, |b, _| {
            b.iter(|| index.par_query(black_box(&center), black_box(0.8)).len());
        });
    }

    group.finish();
}

fn benchmark_add_remove(c: &mut Criterion) {
    let points = create_random_points(1_000, 16);

    c.bench_function("add_then_remove_1000", |b| {
        b.iter(|| {
            let mut index = PointIndex::new();
            for (i, p) in points.iter().enumerate() {
                index.add(p.clone(), i);
            }
            for p in &points {
                black_box(index.remove(p));
            }
        });
    });
}

criterion_group!(benches, benchmark_query, benchmark_add_remove);
criterion_main!(benches);
