use lyon::math::{point, vector, Angle, Box2D};
use lyon::path::{Path, Winding};

use super::Point;

/// Two opposite corners of an axis-aligned box, as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxGeometry {
    corners: [Point; 2],
}

impl BoxGeometry {
    pub fn new(a: Point, b: Point) -> Self {
        Self { corners: [a, b] }
    }

    /// Box with corners reordered to (min, max).
    pub fn normalized(a: Point, b: Point) -> Self {
        Self::new(
            Point::new(a.x.min(b.x), a.y.min(b.y)),
            Point::new(a.x.max(b.x), a.y.max(b.y)),
        )
    }

    pub fn corners(&self) -> [Point; 2] {
        self.corners
    }

    pub fn min(&self) -> Point {
        let [a, b] = self.corners;
        Point::new(a.x.min(b.x), a.y.min(b.y))
    }

    pub fn max(&self) -> Point {
        let [a, b] = self.corners;
        Point::new(a.x.max(b.x), a.y.max(b.y))
    }

    pub fn width(&self) -> f64 {
        self.max().x - self.min().x
    }

    pub fn height(&self) -> f64 {
        self.max().y - self.min().y
    }

    pub fn center(&self) -> Point {
        let [a, b] = self.corners;
        Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        for corner in &mut self.corners {
            *corner = corner.offset(dx, dy);
        }
    }

    fn lyon_box(&self) -> Box2D {
        let (min, max) = (self.min(), self.max());
        Box2D::new(
            point(min.x as f32, min.y as f32),
            point(max.x as f32, max.y as f32),
        )
    }

    pub fn rect_path(&self) -> Path {
        let mut builder = Path::builder();
        builder.add_rectangle(&self.lyon_box(), Winding::Positive);
        builder.build()
    }

    /// Ellipse inscribed in the box.
    pub fn ellipse_path(&self) -> Path {
        let center = self.center();
        let mut builder = Path::builder();
        builder.add_ellipse(
            point(center.x as f32, center.y as f32),
            vector((self.width() / 2.0) as f32, (self.height() / 2.0) as f32),
            Angle::radians(0.0),
            Winding::Positive,
        );
        builder.build()
    }
}
