//! Global drawing settings captured by newly created shapes.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Smallest pen width a shape can carry.
pub const MIN_PEN_WIDTH: u32 = 1;

/// Largest pen width offered to users.
pub const MAX_PEN_WIDTH: u32 = 15;

/// Pen and fill parameters for future shapes.
///
/// Changing these never touches existing shapes, except `fill_enabled`,
/// which is a global render toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSettings {
    /// Stroke width in pixels
    pub pen_width: u32,
    /// Stroke color
    pub pen_color: Color,
    /// Fill color
    pub fill_color: Color,
    /// Whether shape interiors are painted
    pub fill_enabled: bool,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self {
            pen_width: 3,
            pen_color: Color::BLACK,
            fill_color: Color::GRAY,
            fill_enabled: false,
        }
    }
}

impl DrawingSettings {
    /// Set the pen width, clamped to at least [`MIN_PEN_WIDTH`].
    pub fn set_pen_width(&mut self, width: u32) {
        self.pen_width = width.max(MIN_PEN_WIDTH);
    }
}
