//! Canvas state: shapes, drawing settings, the active tool and the
//! interaction session (current gesture, pending triangle, cursor).

mod operations;
mod types;

pub use types::{Gesture, Modifiers, PendingTriangle, PointerButton, PointerButtons, Preview, Tool};

use crate::backdrop::Backdrop;
use crate::geometry::Bounds;
use crate::model::{Point, Shape, ShapeStyle};
use crate::serialization;
use crate::shape_store::ShapeStore;
use image::RgbaImage;
use paintcanvas_core::{Color, DrawingSettings};

/// Default viewport width in pixels.
pub const DEFAULT_WIDTH: u32 = 800;
/// Default viewport height in pixels.
pub const DEFAULT_HEIGHT: u32 = 600;

/// Canvas state managing shapes and the interaction session.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub shape_store: ShapeStore,
    settings: DrawingSettings,
    tool: Tool,
    gesture: Gesture,
    pending_triangle: Option<PendingTriangle>,
    cursor: Point,
    viewport: (u32, u32),
    backdrop: Backdrop,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Creates a canvas with the default viewport.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Creates a canvas with the given viewport size.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            shape_store: ShapeStore::new(),
            settings: DrawingSettings::default(),
            tool: Tool::Modify,
            gesture: Gesture::Idle,
            pending_triangle: None,
            cursor: Point::default(),
            viewport: (width, height),
            backdrop: Backdrop::new(width, height),
        }
    }

    /// Sets how far past the viewport the backdrop grows when resized.
    pub fn set_growth_margin(&mut self, margin: u32) {
        self.backdrop.set_growth_margin(margin);
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switches tools, discarding any creation or gesture in progress.
    /// The selection is kept.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool != self.tool {
            tracing::debug!("Tool changed: {:?} -> {:?}", self.tool, tool);
        }
        self.tool = tool;
        self.gesture = Gesture::Idle;
        self.pending_triangle = None;
    }

    pub fn settings(&self) -> &DrawingSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: DrawingSettings) {
        self.settings = settings;
        self.settings.set_pen_width(settings.pen_width);
    }

    pub fn set_pen_width(&mut self, width: u32) {
        self.settings.set_pen_width(width);
    }

    pub fn set_pen_color(&mut self, color: Color) {
        self.settings.pen_color = color;
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.settings.fill_color = color;
    }

    pub fn set_fill_enabled(&mut self, enabled: bool) {
        self.settings.fill_enabled = enabled;
    }

    /// Style a shape created now would capture.
    pub fn current_style(&self) -> ShapeStyle {
        ShapeStyle::from(&self.settings)
    }

    /// Shapes bottom to top.
    pub fn shapes(&self) -> impl DoubleEndedIterator<Item = &Shape> {
        self.shape_store.iter()
    }

    pub fn shape_count(&self) -> usize {
        self.shape_store.len()
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn pending_triangle(&self) -> Option<PendingTriangle> {
        self.pending_triangle
    }

    pub fn viewport_size(&self) -> (u32, u32) {
        self.viewport
    }

    /// Records a new viewport size and grows the backdrop if it no longer
    /// covers it.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        if self.backdrop.grow_to(width, height) {
            tracing::debug!(
                "Backdrop grown to {}x{}",
                self.backdrop.width(),
                self.backdrop.height()
            );
        }
    }

    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    /// Replaces the backdrop raster, growing it to cover the viewport.
    pub fn set_backdrop_image(&mut self, image: RgbaImage) {
        self.backdrop.replace(image);
        self.backdrop.grow_to(self.viewport.0, self.viewport.1);
    }

    /// White backdrop covering the viewport.
    pub fn reset_backdrop(&mut self) {
        self.set_backdrop_image(RgbaImage::from_pixel(
            self.viewport.0,
            self.viewport.1,
            image::Rgba([255, 255, 255, 255]),
        ));
    }

    /// Live overlay for the view render, if any.
    pub fn preview(&self) -> Option<Preview> {
        match &self.gesture {
            Gesture::RubberBanding { origin, current } => {
                Some(Preview::RubberBand(Bounds::from_corners(*origin, *current)))
            }
            Gesture::Drawing { anchor } => Some(Preview::Box {
                tool: self.tool,
                anchor: *anchor,
                cursor: self.cursor,
            }),
            _ => self.pending_triangle.map(|pending| Preview::Triangle {
                pending,
                cursor: self.cursor,
            }),
        }
    }

    /// Drops the gesture and pending triangle vertices.
    pub fn reset_session(&mut self) {
        self.gesture = Gesture::Idle;
        self.pending_triangle = None;
    }

    /// Removes every shape and resets the session in one step.
    pub fn clear_all(&mut self) {
        self.shape_store.clear();
        self.reset_session();
        tracing::debug!("Canvas cleared");
    }

    /// Serializes the shapes and drawing settings into the text record.
    pub fn to_record(&self) -> paintcanvas_core::Result<String> {
        serialization::encode(&self.shape_store, &self.settings)
    }

    /// Replaces the shapes with those decoded from `record`. Settings present
    /// in the record are applied; malformed input leaves an empty canvas.
    /// Returns the number of shapes loaded.
    pub fn load_record(&mut self, record: &str) -> usize {
        self.clear_all();
        let shapes = serialization::decode(record, &mut self.settings);
        let count = shapes.len();
        for shape in shapes {
            self.shape_store.append(shape);
        }
        count
    }
}
