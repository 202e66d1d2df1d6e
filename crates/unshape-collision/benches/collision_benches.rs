//! Benchmarks for per-frame selection queries.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::Vec2;
use unshape_collision::{
    Boundary, CollidableShape, EllipseCollidable, PolygonCollidable, SelectionConfig,
    SetOfCollidables, SetOfPoints, check_collidables_intersection, check_intersection,
    hit_test, marquee_select,
};

/// Outline-only ellipse: a filled outer ellipse with an inner hole.
struct OutlinedEllipse {
    center: Vec2,
    radius: Vec2,
    thickness: f32,
}

impl SetOfCollidables for OutlinedEllipse {
    fn collidables(&self) -> Vec<CollidableShape> {
        vec![EllipseCollidable::new(self.center, self.radius.x, self.radius.y, 0.3).into()]
    }

    fn negative_collidables(&self) -> Vec<CollidableShape> {
        let inner = self.radius - Vec2::splat(self.thickness);
        vec![EllipseCollidable::new(self.center, inner.x, inner.y, 0.3).into()]
    }

    fn boundary(&self) -> Boundary {
        Boundary::new(self.center - self.radius, self.center + self.radius)
    }
}

fn zigzag(n: usize) -> Vec<Vec2> {
    (0..n)
        .map(|i| Vec2::new(i as f32 * 5.0, if i % 2 == 0 { 0.0 } else { 20.0 }))
        .collect()
}

// ============================================================================
// Single-shape Benchmarks
// ============================================================================

fn bench_rectangle_sat(c: &mut Criterion) {
    let rect = PolygonCollidable::create_rectangle(Vec2::ZERO, Vec2::splat(100.0));
    let probe = PolygonCollidable::create_rectangle(Vec2::splat(90.0), Vec2::splat(150.0));

    c.bench_function("sat_rectangle_vs_marquee", |b| {
        b.iter(|| black_box(check_intersection(black_box(&rect), black_box(&probe))))
    });
}

fn bench_outlined_ellipse_cursor(c: &mut Criterion) {
    let shape = OutlinedEllipse {
        center: Vec2::new(50.0, 50.0),
        radius: Vec2::new(40.0, 25.0),
        thickness: 3.0,
    };
    let in_hole = PolygonCollidable::create_cursor(Vec2::new(50.0, 50.0));
    let on_outline = PolygonCollidable::create_cursor(Vec2::new(89.0, 50.0));

    c.bench_function("outlined_ellipse_cursor_in_hole", |b| {
        b.iter(|| black_box(check_collidables_intersection(&shape, black_box(&in_hole))))
    });
    c.bench_function("outlined_ellipse_cursor_on_outline", |b| {
        b.iter(|| black_box(check_collidables_intersection(&shape, black_box(&on_outline))))
    });
}

fn bench_stroke_cursor(c: &mut Criterion) {
    let points = zigzag(200);
    let stroke = SetOfPoints::new(&points, 2.0);
    // Near the last segment so every piece is tested
    let probe = PolygonCollidable::create_cursor(Vec2::new(995.0, 10.0));

    c.bench_function("stroke_200_points_cursor", |b| {
        b.iter(|| black_box(check_collidables_intersection(&stroke, black_box(&probe))))
    });
}

// ============================================================================
// Canvas Benchmarks
// ============================================================================

fn bench_canvas_queries(c: &mut Criterion) {
    let polylines: Vec<Vec<Vec2>> = (0..1000)
        .map(|i| {
            let origin = Vec2::new((i % 40) as f32 * 25.0, (i / 40) as f32 * 25.0);
            zigzag(8).into_iter().map(|p| origin + p * 0.5).collect()
        })
        .collect();
    let shapes: Vec<SetOfPoints<'_>> = polylines
        .iter()
        .map(|points| SetOfPoints::new(points, 1.5))
        .collect();
    let config = SelectionConfig::default();

    c.bench_function("hit_test_1000_strokes", |b| {
        b.iter(|| black_box(hit_test(&shapes, black_box(Vec2::new(510.0, 305.0)), &config)))
    });

    c.bench_function("marquee_select_1000_strokes", |b| {
        b.iter(|| {
            black_box(marquee_select(
                &shapes,
                black_box(Vec2::new(100.0, 100.0)),
                black_box(Vec2::new(400.0, 300.0)),
                &config,
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_rectangle_sat,
    bench_outlined_ellipse_cursor,
    bench_stroke_cursor,
    bench_canvas_queries,
);

criterion_main!(benches);
