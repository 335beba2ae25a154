use paintcanvas_designer::geometry::{
    bounds_of, center_of, hit_test, intersects_rect, make_ellipse, make_rectangle, make_square,
    make_triangle, path_of, Bounds,
};
use paintcanvas_designer::{Point, ShapeKind, ShapeStyle};
use proptest::prelude::*;
use std::f64::consts::PI;

const EPS: f64 = 1e-3;

fn assert_bounds_close(actual: Bounds, expected: Bounds) {
    assert!(
        (actual.min_x - expected.min_x).abs() < EPS
            && (actual.min_y - expected.min_y).abs() < EPS
            && (actual.max_x - expected.max_x).abs() < EPS
            && (actual.max_y - expected.max_y).abs() < EPS,
        "{:?} != {:?}",
        actual,
        expected
    );
}

#[test]
fn test_rectangle_example() {
    let rect = make_rectangle(
        Point::new(10.0, 10.0),
        Point::new(50.0, 40.0),
        ShapeStyle::default(),
    );
    assert_eq!(rect.kind(), ShapeKind::Rectangle);
    assert_eq!(
        rect.points(),
        vec![Point::new(10.0, 10.0), Point::new(50.0, 40.0)]
    );
    assert!(hit_test(&rect, Point::new(30.0, 25.0)));
    assert!(!hit_test(&rect, Point::new(5.0, 5.0)));
}

#[test]
fn test_rectangle_normalizes_corners() {
    let rect = make_rectangle(
        Point::new(50.0, 40.0),
        Point::new(10.0, 10.0),
        ShapeStyle::default(),
    );
    assert_eq!(
        rect.points(),
        vec![Point::new(10.0, 10.0), Point::new(50.0, 40.0)]
    );
}

#[test]
fn test_square_side_is_half_distance() {
    let square = make_square(
        Point::new(100.0, 100.0),
        Point::new(140.0, 100.0),
        ShapeStyle::default(),
    );
    assert_eq!(square.kind(), ShapeKind::Square);
    assert_bounds_close(bounds_of(&square), Bounds::new(90.0, 90.0, 110.0, 110.0));
    assert_eq!(center_of(&square), Point::new(100.0, 100.0));
}

#[test]
fn test_ellipse_radius_is_distance() {
    let circle = make_ellipse(
        Point::new(0.0, 0.0),
        Point::new(3.0, 4.0),
        ShapeStyle::default(),
    );
    assert_eq!(circle.kind(), ShapeKind::Ellipse);
    let b = bounds_of(&circle);
    assert!((b.width() - 10.0).abs() < 0.01);
    assert!((b.height() - 10.0).abs() < 0.01);
    assert!(hit_test(&circle, Point::new(0.0, 4.9)));
    assert!(!hit_test(&circle, Point::new(4.0, 4.0)));
}

#[test]
fn test_triangle_center_is_centroid() {
    let tri = make_triangle(
        [
            Point::new(0.0, 0.0),
            Point::new(6.0, 0.0),
            Point::new(0.0, 9.0),
        ],
        ShapeStyle::default(),
    );
    assert_eq!(center_of(&tri), Point::new(2.0, 3.0));
    assert!(hit_test(&tri, Point::new(2.0, 3.0)));
    assert!(!hit_test(&tri, Point::new(5.0, 8.0)));
}

#[test]
fn test_rotation_applies_about_center() {
    let rect = make_rectangle(
        Point::new(0.0, 0.0),
        Point::new(40.0, 10.0),
        ShapeStyle::default(),
    )
    .with_rotation(PI / 2.0);

    assert_eq!(
        rect.points(),
        vec![Point::new(0.0, 0.0), Point::new(40.0, 10.0)]
    );
    assert_bounds_close(bounds_of(&rect), Bounds::new(15.0, -15.0, 25.0, 25.0));
    assert!(hit_test(&rect, Point::new(20.0, -12.0)));
    assert!(!hit_test(&rect, Point::new(2.0, 5.0)));
}

#[test]
fn test_intersects_rect_partial_overlap() {
    let rect = make_rectangle(
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        ShapeStyle::default(),
    );
    assert!(intersects_rect(&rect, &Bounds::new(5.0, 5.0, 20.0, 20.0)));
    assert!(intersects_rect(&rect, &Bounds::new(-5.0, -5.0, 20.0, 20.0)));
    assert!(intersects_rect(&rect, &Bounds::new(2.0, 2.0, 3.0, 3.0)));
    assert!(!intersects_rect(&rect, &Bounds::new(11.0, 11.0, 20.0, 20.0)));
}

#[test]
fn test_intersects_rect_uses_filled_shape() {
    // Bounding boxes overlap but the circle does not reach the corner.
    let circle = make_ellipse(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        ShapeStyle::default(),
    );
    assert!(!intersects_rect(&circle, &Bounds::new(8.0, 8.0, 12.0, 12.0)));
    assert!(intersects_rect(&circle, &Bounds::new(6.0, 6.0, 12.0, 12.0)));
}

#[test]
fn test_intersects_rect_crossing_edges() {
    // Thin rectangle crossing a thin bar with no vertex inside either.
    let bar = make_rectangle(
        Point::new(0.0, 4.0),
        Point::new(20.0, 6.0),
        ShapeStyle::default(),
    );
    assert!(intersects_rect(&bar, &Bounds::new(9.0, -5.0, 11.0, 15.0)));
}

#[test]
fn test_path_is_closed() {
    let rect = make_rectangle(
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        ShapeStyle::default(),
    );
    let closed = path_of(&rect)
        .iter()
        .any(|e| matches!(e, lyon::path::Event::End { close: true, .. }));
    assert!(closed);
}

fn altitude(a: Point, b: Point, c: Point) -> f64 {
    let area2 = ((b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)).abs();
    area2 / a.distance_to(&b)
}

proptest! {
    #[test]
    fn prop_centroid_inside_triangle(
        ax in -500.0f64..500.0, ay in -500.0f64..500.0,
        bx in -500.0f64..500.0, by in -500.0f64..500.0,
        cx in -500.0f64..500.0, cy in -500.0f64..500.0,
        rotation in -10.0f64..10.0,
    ) {
        let (a, b, c) = (Point::new(ax, ay), Point::new(bx, by), Point::new(cx, cy));
        prop_assume!(a.distance_to(&b) > 1.0 && b.distance_to(&c) > 1.0 && c.distance_to(&a) > 1.0);
        prop_assume!(altitude(a, b, c) > 3.0 && altitude(b, c, a) > 3.0 && altitude(c, a, b) > 3.0);

        let tri = make_triangle([a, b, c], ShapeStyle::default()).with_rotation(rotation);
        prop_assert!(hit_test(&tri, center_of(&tri)));
    }

    #[test]
    fn prop_rotation_composes(
        theta1 in -PI..PI,
        theta2 in -PI..PI,
        w in 1.0f64..200.0,
        h in 1.0f64..200.0,
    ) {
        let base = make_rectangle(
            Point::new(10.0, 20.0),
            Point::new(10.0 + w, 20.0 + h),
            ShapeStyle::default(),
        );

        let mut twice = base.clone();
        twice.rotate_by(theta1);
        twice.rotate_by(theta2);
        let once = base.with_rotation(theta1 + theta2);

        let (a, b) = (bounds_of(&twice), bounds_of(&once));
        prop_assert!((a.min_x - b.min_x).abs() < 0.01);
        prop_assert!((a.min_y - b.min_y).abs() < 0.01);
        prop_assert!((a.max_x - b.max_x).abs() < 0.01);
        prop_assert!((a.max_y - b.max_y).abs() < 0.01);
    }
}
