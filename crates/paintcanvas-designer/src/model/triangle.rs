use lyon::path::Path;

use super::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleGeometry {
    vertices: [Point; 3],
}

impl TriangleGeometry {
    pub fn new(vertices: [Point; 3]) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> [Point; 3] {
        self.vertices
    }

    pub fn centroid(&self) -> Point {
        let [a, b, c] = self.vertices;
        Point::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
    }

    pub fn outline(&self) -> Path {
        let [a, b, c] = self.vertices;
        let mut builder = Path::builder();
        builder.begin(a.into());
        builder.line_to(b.into());
        builder.line_to(c.into());
        builder.close();
        builder.build()
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        for vertex in &mut self.vertices {
            *vertex = vertex.offset(dx, dy);
        }
    }
}
