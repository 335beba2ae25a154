//! Pointer and keyboard handling: creation tools and the Modify gestures.

use super::{Canvas, Gesture, Modifiers, PendingTriangle, PointerButton, PointerButtons, Tool};
use crate::geometry::{self, Bounds};
use crate::model::{Point, Shape};

impl Canvas {
    /// Handles a button press at `pos`. Presses are ignored while another
    /// gesture is in progress.
    pub fn pointer_press(&mut self, pos: Point, button: PointerButton, modifiers: Modifiers) {
        self.cursor = pos;
        if !self.gesture.is_idle() {
            tracing::debug!("Ignoring {:?} press during {:?}", button, self.gesture);
            return;
        }

        match self.tool {
            Tool::Modify => self.modify_press(pos, button, modifiers),
            Tool::Triangle => {
                if button == PointerButton::Left {
                    self.add_triangle_vertex(pos);
                }
            }
            Tool::Rectangle | Tool::Square | Tool::Ellipse => {
                if button == PointerButton::Left {
                    self.gesture = Gesture::Drawing { anchor: pos };
                }
            }
        }
    }

    /// Handles pointer motion. The current gesture only advances while its
    /// button is held.
    pub fn pointer_move(&mut self, pos: Point, buttons: PointerButtons) {
        self.cursor = pos;
        let Some(button) = self.gesture.button() else {
            return;
        };
        if !buttons.contains(button) {
            return;
        }

        match &mut self.gesture {
            Gesture::Idle | Gesture::Drawing { .. } => {}
            Gesture::Moving { last } => {
                self.shape_store.translate_selected(pos.x - last.x, pos.y - last.y);
                *last = pos;
            }
            Gesture::RubberBanding { current, .. } => {
                *current = pos;
            }
            Gesture::Rotating { anchor } => {
                if let Some(pivot) = self.shape_store.selection_pivot() {
                    let delta = geometry::rotation_delta(pivot, *anchor, pos);
                    self.shape_store.rotate_selected(delta);
                }
                *anchor = pos;
            }
            Gesture::Cloning {
                last,
                clones_created,
            } => {
                if !*clones_created {
                    let count = self.shape_store.clone_selected();
                    tracing::debug!("Cloned {} shapes", count);
                    *clones_created = true;
                }
                self.shape_store.translate_selected(pos.x - last.x, pos.y - last.y);
                *last = pos;
            }
        }
    }

    /// Handles a button release. Only the button that started the current
    /// gesture ends it.
    pub fn pointer_release(&mut self, pos: Point, button: PointerButton, modifiers: Modifiers) {
        self.cursor = pos;
        if self.gesture.button() != Some(button) {
            return;
        }

        match std::mem::take(&mut self.gesture) {
            Gesture::Drawing { anchor } => {
                if let Some(shape) = self.box_shape(anchor, pos) {
                    let index = self.shape_store.append(shape);
                    tracing::debug!("Created {:?} at index {}", self.tool, index);
                }
            }
            Gesture::RubberBanding { origin, .. } => {
                let rect = Bounds::from_corners(origin, pos);
                let selected = self.shape_store.select_in_rect(&rect, modifiers.ctrl);
                tracing::debug!("Rubber band selected {} shapes", selected);
            }
            _ => {}
        }
    }

    /// Handles a key press. `D` deletes the selection whatever gesture is
    /// in progress.
    pub fn key_press(&mut self, key: char) {
        if key.eq_ignore_ascii_case(&'d') {
            let removed = self.shape_store.delete_selected();
            if removed > 0 {
                tracing::debug!("Deleted {} shapes", removed);
            }
        }
    }

    /// The shape the current box tool would create for a drag from
    /// `anchor` to `cursor`.
    pub fn box_shape(&self, anchor: Point, cursor: Point) -> Option<Shape> {
        let style = self.current_style();
        match self.tool {
            Tool::Rectangle => Some(geometry::make_rectangle(anchor, cursor, style)),
            Tool::Square => Some(geometry::make_square(anchor, cursor, style)),
            Tool::Ellipse => Some(geometry::make_ellipse(anchor, cursor, style)),
            Tool::Modify | Tool::Triangle => None,
        }
    }

    fn add_triangle_vertex(&mut self, pos: Point) {
        self.pending_triangle = match self.pending_triangle.take() {
            None => Some(PendingTriangle::One(pos)),
            Some(PendingTriangle::One(a)) => Some(PendingTriangle::Two(a, pos)),
            Some(PendingTriangle::Two(a, b)) => {
                let shape = geometry::make_triangle([a, b, pos], self.current_style());
                let index = self.shape_store.append(shape);
                tracing::debug!("Created triangle at index {}", index);
                None
            }
        };
    }

    /// Selection rule for a press on shape `index`: a selected shape keeps
    /// the group unless the modifier is held; otherwise the modifier adds
    /// and its absence replaces.
    fn select_for_press(&mut self, index: usize, modifiers: Modifiers) {
        let already_selected = self
            .shape_store
            .get(index)
            .is_some_and(|shape| shape.selected);
        if already_selected && !modifiers.ctrl {
            return;
        }
        self.shape_store.select(index, modifiers.ctrl);
    }

    fn modify_press(&mut self, pos: Point, button: PointerButton, modifiers: Modifiers) {
        let had_selection = self.shape_store.any_selected();
        let hit = self.shape_store.top_hit(pos);
        if let Some(index) = hit {
            self.select_for_press(index, modifiers);
        }

        self.gesture = match (button, hit) {
            (PointerButton::Left, Some(_)) => Gesture::Moving { last: pos },
            (PointerButton::Left, None) => {
                if !modifiers.ctrl {
                    self.shape_store.clear_selection();
                }
                Gesture::RubberBanding {
                    origin: pos,
                    current: pos,
                }
            }
            (PointerButton::Right, _) if hit.is_some() || had_selection => {
                Gesture::Rotating { anchor: pos }
            }
            (PointerButton::Middle, _) if hit.is_some() || had_selection => Gesture::Cloning {
                last: pos,
                clones_created: false,
            },
            _ => Gesture::Idle,
        };

        if !self.gesture.is_idle() {
            tracing::debug!("Gesture started: {:?}", self.gesture);
        }
    }
}
