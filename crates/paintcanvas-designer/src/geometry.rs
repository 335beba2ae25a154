//! Geometry kernel: paths, centers, bounds, hit-testing and area
//! intersection for canvas shapes, plus the shape constructors used by the
//! creation tools.
//!
//! Everything here is a pure function of its inputs. Rotation is never
//! baked into a shape's points; [`path_of`] applies it about
//! [`center_of`] every time a path is needed.

use std::f64::consts::{PI, TAU};

use lyon::algorithms::aabb::bounding_box;
use lyon::algorithms::hit_test::hit_test_path;
use lyon::math::{point, vector, Angle, Transform};
use lyon::path::iterator::PathIterator;
use lyon::path::{FillRule, Path};

use crate::model::{BoxGeometry, Point, Shape, ShapeGeometry, ShapeStyle, TriangleGeometry};

/// Curve flattening tolerance for hit-testing and area intersection.
pub const FLATTEN_TOLERANCE: f32 = 0.01;

/// Axis-aligned rectangle with `min <= max` on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x: min_x.min(max_x),
            min_y: min_y.min(max_y),
            max_x: min_x.max(max_x),
            max_y: min_y.max(max_y),
        }
    }

    /// Rectangle spanned by two arbitrary corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }

    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    /// Corners in outline order starting at the top-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x, self.min_y),
            Point::new(self.max_x, self.min_y),
            Point::new(self.max_x, self.max_y),
            Point::new(self.min_x, self.max_y),
        ]
    }
}

/// Triangle centroid, or the center of the box for the other kinds.
pub fn center_of(shape: &Shape) -> Point {
    shape.geometry().center()
}

fn rotation_about(center: Point, rotation: f64) -> Transform {
    Transform::translation(-center.x as f32, -center.y as f32)
        .then_rotate(Angle::radians(rotation as f32))
        .then_translate(vector(center.x as f32, center.y as f32))
}

/// Closed outline of the shape with its rotation applied.
pub fn path_of(shape: &Shape) -> Path {
    let outline = shape.geometry().outline();
    if shape.rotation() == 0.0 {
        return outline;
    }
    outline.transformed(&rotation_about(center_of(shape), shape.rotation()))
}

/// Axis-aligned bounds of the rotated outline.
pub fn bounds_of(shape: &Shape) -> Bounds {
    let path = path_of(shape);
    let bb = bounding_box(path.iter());
    Bounds::new(
        bb.min.x as f64,
        bb.min.y as f64,
        bb.max.x as f64,
        bb.max.y as f64,
    )
}

fn path_contains(path: &Path, p: Point) -> bool {
    hit_test_path(
        &point(p.x as f32, p.y as f32),
        path.iter(),
        FillRule::NonZero,
        FLATTEN_TOLERANCE,
    )
}

/// Whether `p` lies in the filled interior of the shape. The shape's fill
/// toggle does not matter.
pub fn hit_test(shape: &Shape, p: Point) -> bool {
    path_contains(&path_of(shape), p)
}

fn flatten(path: &Path) -> Vec<Point> {
    let mut polygon = Vec::new();
    for event in path.iter().flattened(FLATTEN_TOLERANCE) {
        match event {
            lyon::path::Event::Begin { at } => polygon.push(at.into()),
            lyon::path::Event::Line { to, .. } => polygon.push(to.into()),
            _ => {}
        }
    }
    polygon
}

fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

fn on_segment(a: Point, b: Point, p: Point) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

fn segments_intersect(p1: Point, p2: Point, q1: Point, q2: Point) -> bool {
    let d1 = cross(q1, q2, p1);
    let d2 = cross(q1, q2, p2);
    let d3 = cross(p1, p2, q1);
    let d4 = cross(p1, p2, q2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(q1, q2, p1))
        || (d2 == 0.0 && on_segment(q1, q2, p2))
        || (d3 == 0.0 && on_segment(p1, p2, q1))
        || (d4 == 0.0 && on_segment(p1, p2, q2))
}

fn edges(polygon: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    polygon
        .iter()
        .zip(polygon.iter().cycle().skip(1))
        .map(|(a, b)| (*a, *b))
}

/// Whether the filled shape touches `rect`, or `rect` encloses the shape's
/// bounds entirely.
pub fn intersects_rect(shape: &Shape, rect: &Bounds) -> bool {
    let bounds = bounds_of(shape);
    if !bounds.intersects(rect) {
        return false;
    }
    if rect.contains_bounds(&bounds) {
        return true;
    }

    let path = path_of(shape);
    let polygon = flatten(&path);
    if polygon.iter().any(|p| rect.contains_point(*p)) {
        return true;
    }

    let corners = rect.corners();
    if corners.iter().any(|c| path_contains(&path, *c)) {
        return true;
    }

    let crosses =
        edges(&polygon).any(|(a, b)| edges(&corners).any(|(c, d)| segments_intersect(a, b, c, d)));
    crosses
}

/// Rectangle with normalized corners.
pub fn make_rectangle(a: Point, b: Point, style: ShapeStyle) -> Shape {
    Shape::new(
        ShapeGeometry::Rectangle(BoxGeometry::normalized(a, b)),
        style,
    )
}

/// Square centered on `center` whose side is half the distance to `cursor`.
pub fn make_square(center: Point, cursor: Point, style: ShapeStyle) -> Shape {
    let half = center.distance_to(&cursor) / 4.0;
    Shape::new(
        ShapeGeometry::Square(BoxGeometry::new(
            center.offset(-half, -half),
            center.offset(half, half),
        )),
        style,
    )
}

/// Circle centered on `center` whose radius is the distance to `cursor`.
pub fn make_ellipse(center: Point, cursor: Point, style: ShapeStyle) -> Shape {
    let radius = center.distance_to(&cursor);
    Shape::new(
        ShapeGeometry::Ellipse(BoxGeometry::new(
            center.offset(-radius, -radius),
            center.offset(radius, radius),
        )),
        style,
    )
}

pub fn make_triangle(vertices: [Point; 3], style: ShapeStyle) -> Shape {
    Shape::new(
        ShapeGeometry::Triangle(TriangleGeometry::new(vertices)),
        style,
    )
}

/// Mean of the centers of `shapes`, or `None` when there are none.
pub fn group_pivot<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> Option<Point> {
    let (sum, count) = shapes
        .into_iter()
        .fold((Point::default(), 0usize), |(sum, count), shape| {
            let c = center_of(shape);
            (Point::new(sum.x + c.x, sum.y + c.y), count + 1)
        });
    (count > 0).then(|| Point::new(sum.x / count as f64, sum.y / count as f64))
}

/// Signed angle in radians, within (-π, π], that turns the ray
/// `pivot -> from` onto the ray `pivot -> to`.
pub fn rotation_delta(pivot: Point, from: Point, to: Point) -> f64 {
    if pivot.distance_to(&from) < f64::EPSILON || pivot.distance_to(&to) < f64::EPSILON {
        return 0.0;
    }
    let start = (from.y - pivot.y).atan2(from.x - pivot.x);
    let end = (to.y - pivot.y).atan2(to.x - pivot.x);
    let mut delta = end - start;
    if delta > PI {
        delta -= TAU;
    } else if delta <= -PI {
        delta += TAU;
    }
    delta
}
