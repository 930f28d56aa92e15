use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use geo::Point;
use mths::compute::minimum_enclosing_circle;
use mths::{Config, Mths, PointIndex, PointSet};

/// Scattered background events with a handful of dense clusters.
fn synthetic_points(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            if i % 4 == 0 {
                let cluster = (i / 4) % 5;
                let angle = i as f64 * 0.37;
                let cx = 2_000.0 + cluster as f64 * 6_000.0;
                (cx + 300.0 * angle.cos(), 4_000.0 + 300.0 * angle.sin())
            } else {
                let x = ((i * 7_919) % 30_011) as f64;
                let y = ((i * 104_729) % 20_011) as f64;
                (x, y)
            }
        })
        .collect()
}

fn benchmark_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("process");

    for &n in &[100usize, 250, 500] {
        let points = synthetic_points(n);

        group.bench_with_input(BenchmarkId::new("non_overlapping", n), &points, |b, points| {
            let mut mths = Mths::from_coordinates(points.clone(), Config::default()).unwrap();
            b.iter(|| black_box(mths.process().len()))
        });

        group.bench_with_input(BenchmarkId::new("keep_overlapping", n), &points, |b, points| {
            let config = Config::default().with_keep_overlapping(true);
            let mut mths = Mths::from_coordinates(points.clone(), config).unwrap();
            b.iter(|| black_box(mths.process().len()))
        });
    }

    group.finish();
}

fn benchmark_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");

    let points = PointSet::from_coordinates(synthetic_points(2_000)).unwrap();
    let index = PointIndex::build(&points);
    let disc = mths::compute::circle_polygon(Point::new(2_000.0, 4_000.0), 1_320.0, 16);

    group.bench_function("index_build_2000", |b| {
        b.iter(|| PointIndex::build(black_box(&points)))
    });

    group.bench_function("query_contains", |b| {
        b.iter(|| index.query_contains(black_box(&disc)))
    });

    let members = points.select(&index.query_contains(&disc));
    group.bench_function("minimum_enclosing_circle", |b| {
        b.iter(|| minimum_enclosing_circle(black_box(&members)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_process, benchmark_primitives);
criterion_main!(benches);
