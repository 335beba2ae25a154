//! Ordered shape storage.
//!
//! Insertion order is z-order: later shapes are drawn on top and win
//! hit-tests. Selection lives on the shapes themselves (`Shape::selected`);
//! the store provides the bulk operations the interaction engine needs.

use std::ops::Range;

use crate::geometry::{self, Bounds};
use crate::model::{Point, Shape};

#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
    last_clone_batch: Option<Range<usize>>,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a shape on top of all others and returns its index.
    pub fn append(&mut self, shape: Shape) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// Shapes bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn selected(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|s| s.selected)
    }

    pub fn selected_count(&self) -> usize {
        self.selected().count()
    }

    pub fn any_selected(&self) -> bool {
        self.shapes.iter().any(|s| s.selected)
    }

    /// Removes every shape and forgets the last clone batch.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.last_clone_batch = None;
    }

    /// Removes every shape matching `predicate`, keeping the relative order
    /// of the rest. Returns how many were removed.
    pub fn remove_where(&mut self, predicate: impl Fn(&Shape) -> bool) -> usize {
        let before = self.shapes.len();
        self.shapes.retain(|s| !predicate(s));
        let removed = before - self.shapes.len();
        if removed > 0 {
            self.last_clone_batch = None;
        }
        removed
    }

    pub fn delete_selected(&mut self) -> usize {
        self.remove_where(|s| s.selected)
    }

    /// Index of the topmost shape whose interior contains `point`.
    pub fn top_hit(&self, point: Point) -> Option<usize> {
        self.shapes
            .iter()
            .rposition(|shape| geometry::hit_test(shape, point))
    }

    pub fn clear_selection(&mut self) {
        for shape in &mut self.shapes {
            shape.selected = false;
        }
    }

    /// Selects the shape at `index`. Without `additive` the rest of the
    /// selection is cleared first.
    pub fn select(&mut self, index: usize, additive: bool) {
        if !additive {
            self.clear_selection();
        }
        if let Some(shape) = self.shapes.get_mut(index) {
            shape.selected = true;
        }
    }

    /// Selects every shape intersecting `rect`. Without `additive` shapes
    /// outside the rectangle are deselected. Returns the number selected
    /// afterwards.
    pub fn select_in_rect(&mut self, rect: &Bounds, additive: bool) -> usize {
        for shape in &mut self.shapes {
            let inside = geometry::intersects_rect(shape, rect);
            shape.selected = inside || (additive && shape.selected);
        }
        self.selected_count()
    }

    pub fn translate_selected(&mut self, dx: f64, dy: f64) {
        for shape in self.shapes.iter_mut().filter(|s| s.selected) {
            shape.translate(dx, dy);
        }
    }

    /// Adds `delta` radians to every selected shape's rotation.
    pub fn rotate_selected(&mut self, delta: f64) {
        for shape in self.shapes.iter_mut().filter(|s| s.selected) {
            shape.rotate_by(delta);
        }
    }

    /// Mean center of the selected shapes.
    pub fn selection_pivot(&self) -> Option<Point> {
        geometry::group_pivot(self.selected())
    }

    /// Appends a copy of every selected shape. The copies become the
    /// selection and the originals are deselected. Returns the number of
    /// copies made.
    pub fn clone_selected(&mut self) -> usize {
        let copies: Vec<Shape> = self.selected().cloned().collect();
        if copies.is_empty() {
            return 0;
        }

        self.clear_selection();
        let start = self.shapes.len();
        self.shapes.extend(copies);
        self.last_clone_batch = Some(start..self.shapes.len());
        self.shapes.len() - start
    }

    /// Shapes created by the most recent clone, while they are still intact.
    pub fn last_clone_batch(&self) -> &[Shape] {
        match &self.last_clone_batch {
            Some(range) => &self.shapes[range.clone()],
            None => &[],
        }
    }
}
