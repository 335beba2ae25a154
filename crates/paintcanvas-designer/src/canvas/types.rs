//! Canvas type definitions: Tool, pointer input, Gesture, PendingTriangle, Preview.

use crate::geometry::Bounds;
use crate::model::Point;

/// Active tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Modify,
    Rectangle,
    Square,
    Triangle,
    Ellipse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// Buttons held during a pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerButtons {
    pub left: bool,
    pub right: bool,
    pub middle: bool,
}

impl PointerButtons {
    pub const NONE: PointerButtons = PointerButtons {
        left: false,
        right: false,
        middle: false,
    };

    pub fn only(button: PointerButton) -> Self {
        let mut buttons = Self::NONE;
        match button {
            PointerButton::Left => buttons.left = true,
            PointerButton::Right => buttons.right = true,
            PointerButton::Middle => buttons.middle = true,
        }
        buttons
    }

    pub fn contains(&self, button: PointerButton) -> bool {
        match button {
            PointerButton::Left => self.left,
            PointerButton::Right => self.right,
            PointerButton::Middle => self.middle,
        }
    }
}

/// Keyboard modifiers. `ctrl` makes selection additive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { ctrl: false };
    pub const CTRL: Modifiers = Modifiers { ctrl: true };
}

/// The one pointer gesture in progress.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Box-tool drag; nothing is in the store until release.
    Drawing { anchor: Point },
    /// Left drag translating the selection.
    Moving { last: Point },
    /// Left drag on empty space sweeping a selection rectangle.
    RubberBanding { origin: Point, current: Point },
    /// Right drag rotating the selection about its mean center.
    Rotating { anchor: Point },
    /// Middle drag duplicating the selection once, then moving the copies.
    Cloning { last: Point, clones_created: bool },
}

impl Gesture {
    /// The button whose release ends this gesture.
    pub fn button(&self) -> Option<PointerButton> {
        match self {
            Self::Idle => None,
            Self::Drawing { .. } | Self::Moving { .. } | Self::RubberBanding { .. } => {
                Some(PointerButton::Left)
            }
            Self::Rotating { .. } => Some(PointerButton::Right),
            Self::Cloning { .. } => Some(PointerButton::Middle),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Triangle vertices placed so far; the third press completes the shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PendingTriangle {
    One(Point),
    Two(Point, Point),
}

impl PendingTriangle {
    pub fn points(&self) -> Vec<Point> {
        match *self {
            Self::One(a) => vec![a],
            Self::Two(a, b) => vec![a, b],
        }
    }
}

/// Live overlay drawn above the shapes in the view render.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    RubberBand(Bounds),
    Box { tool: Tool, anchor: Point, cursor: Point },
    Triangle { pending: PendingTriangle, cursor: Point },
}
