use criterion::{black_box, criterion_group, criterion_main, Criterion};
use segdist::{DistanceCalculator, Point3D};

fn p(x: f64, y: f64, z: f64) -> Point3D {
    Point3D::new(x, y, z)
}

fn bench_relations(c: &mut Criterion) {
    let cases = [
        (
            "shared_endpoint",
            [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 2.0, 2.0)],
        ),
        (
            "parallel",
            [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 1.0), p(1.0, 1.0, 1.0)],
        ),
        (
            "skew_crossing",
            [p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(1.0, -1.0, 1.0), p(1.0, 1.0, 1.0)],
        ),
        (
            "skew_disjoint",
            [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(3.0, -1.0, 1.0), p(3.0, 1.0, 1.0)],
        ),
    ];

    let mut group = c.benchmark_group("segment_distance");
    for (name, [p1, p2, p3, p4]) in cases {
        group.bench_function(name, |b| {
            b.iter(|| {
                DistanceCalculator::new(black_box(p1), black_box(p2), black_box(p3), black_box(p4))
                    .calculate()
            })
        });
    }
    group.finish();
}

fn bench_point_to_segment(c: &mut Criterion) {
    let a = p(0.0, 0.0, 0.0);
    let b = p(1.0, 0.0, 0.0);
    let point = p(0.5, 1.0, 0.0);

    c.bench_function("point_to_segment", |bench| {
        bench.iter(|| black_box(point).distance_to_segment(black_box(&a), black_box(&b)))
    });
}

criterion_group!(benches, bench_relations, bench_point_to_segment);
criterion_main!(benches);
