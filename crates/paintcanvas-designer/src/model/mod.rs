//! Shape model: kinds, kind-specific geometry and per-shape style.
//!
//! A shape's kind and the number of points it carries are fixed by its
//! [`ShapeGeometry`] variant. After creation only the points (by
//! translation), the rotation and the selection flag change.

mod box_geometry;
mod triangle;

pub use box_geometry::BoxGeometry;
pub use triangle::TriangleGeometry;

use lyon::path::Path;
use paintcanvas_core::{Color, DrawingSettings, MIN_PEN_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl From<Point> for lyon::math::Point {
    fn from(p: Point) -> Self {
        lyon::math::point(p.x as f32, p.y as f32)
    }
}

impl From<lyon::math::Point> for Point {
    fn from(p: lyon::math::Point) -> Self {
        Point::new(p.x as f64, p.y as f64)
    }
}

/// Shape kinds. The integer tags are the persisted `type` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    Rectangle,
    Triangle,
    Ellipse,
}

impl ShapeKind {
    pub fn tag(self) -> i64 {
        match self {
            Self::Square => 1,
            Self::Rectangle => 2,
            Self::Triangle => 3,
            Self::Ellipse => 4,
        }
    }

    pub fn from_tag(tag: i64) -> Option<Self> {
        match tag {
            1 => Some(Self::Square),
            2 => Some(Self::Rectangle),
            3 => Some(Self::Triangle),
            4 => Some(Self::Ellipse),
            _ => None,
        }
    }

    /// Number of points a shape of this kind carries.
    pub fn arity(self) -> usize {
        match self {
            Self::Triangle => 3,
            _ => 2,
        }
    }
}

/// Kind-tagged geometry. Box kinds hold two opposite corners, triangles
/// hold three vertices.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeGeometry {
    Rectangle(BoxGeometry),
    Square(BoxGeometry),
    Ellipse(BoxGeometry),
    Triangle(TriangleGeometry),
}

impl ShapeGeometry {
    /// Build geometry from a point list, or `None` when the count does not
    /// match the kind's arity.
    pub fn from_points(kind: ShapeKind, points: &[Point]) -> Option<Self> {
        match (kind, points) {
            (ShapeKind::Rectangle, &[a, b]) => Some(Self::Rectangle(BoxGeometry::new(a, b))),
            (ShapeKind::Square, &[a, b]) => Some(Self::Square(BoxGeometry::new(a, b))),
            (ShapeKind::Ellipse, &[a, b]) => Some(Self::Ellipse(BoxGeometry::new(a, b))),
            (ShapeKind::Triangle, &[a, b, c]) => {
                Some(Self::Triangle(TriangleGeometry::new([a, b, c])))
            }
            _ => None,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Square(_) => ShapeKind::Square,
            Self::Ellipse(_) => ShapeKind::Ellipse,
            Self::Triangle(_) => ShapeKind::Triangle,
        }
    }

    pub fn points(&self) -> Vec<Point> {
        match self {
            Self::Rectangle(b) | Self::Square(b) | Self::Ellipse(b) => b.corners().to_vec(),
            Self::Triangle(t) => t.vertices().to_vec(),
        }
    }

    /// Triangle centroid, or the center of the box.
    pub fn center(&self) -> Point {
        match self {
            Self::Rectangle(b) | Self::Square(b) | Self::Ellipse(b) => b.center(),
            Self::Triangle(t) => t.centroid(),
        }
    }

    /// Closed outline before rotation.
    pub fn outline(&self) -> Path {
        match self {
            Self::Rectangle(b) | Self::Square(b) => b.rect_path(),
            Self::Ellipse(b) => b.ellipse_path(),
            Self::Triangle(t) => t.outline(),
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Self::Rectangle(b) | Self::Square(b) | Self::Ellipse(b) => b.translate(dx, dy),
            Self::Triangle(t) => t.translate(dx, dy),
        }
    }
}

/// Pen and fill captured when a shape is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeStyle {
    pub stroke_color: Color,
    pub fill_color: Color,
    pub stroke_width: u32,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        ShapeStyle::from(&DrawingSettings::default())
    }
}

impl From<&DrawingSettings> for ShapeStyle {
    fn from(settings: &DrawingSettings) -> Self {
        Self {
            stroke_color: settings.pen_color,
            fill_color: settings.fill_color,
            stroke_width: settings.pen_width.max(MIN_PEN_WIDTH),
        }
    }
}

/// A shape on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    geometry: ShapeGeometry,
    style: ShapeStyle,
    rotation: f64,
    pub selected: bool,
}

impl Shape {
    pub fn new(geometry: ShapeGeometry, style: ShapeStyle) -> Self {
        Self {
            geometry,
            style: ShapeStyle {
                stroke_width: style.stroke_width.max(MIN_PEN_WIDTH),
                ..style
            },
            rotation: 0.0,
            selected: false,
        }
    }

    /// Same shape with the given rotation in radians.
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn geometry(&self) -> &ShapeGeometry {
        &self.geometry
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    pub fn points(&self) -> Vec<Point> {
        self.geometry.points()
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    pub fn stroke_color(&self) -> Color {
        self.style.stroke_color
    }

    pub fn fill_color(&self) -> Color {
        self.style.fill_color
    }

    pub fn stroke_width(&self) -> u32 {
        self.style.stroke_width
    }

    /// Accumulated rotation in radians, applied about the shape's center.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.geometry.translate(dx, dy);
    }

    pub fn rotate_by(&mut self, delta: f64) {
        self.rotation += delta;
    }
}
