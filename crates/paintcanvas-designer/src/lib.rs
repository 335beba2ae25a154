//! # PaintCanvas Designer
//!
//! The drawing surface behind PaintCanvas: rectangles, squares, ellipses
//! and triangles placed over a raster backdrop, with selection, move,
//! rotate, clone and delete gestures, and persistence of the shape list
//! inside a PNG.
//!
//! ## Architecture
//!
//! ```text
//! pointer/key events
//!   └── Canvas (tool + gesture state machine)
//!         ├── ShapeStore (z-ordered shapes)
//!         │     └── geometry (paths, bounds, hit-testing)
//!         ├── serialization (JSON text record)
//!         └── renderer (tiny-skia -> RgbaImage)
//!
//! EditorState (current document, PNG load/save)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use paintcanvas_designer::{Canvas, Modifiers, Point, PointerButton, Tool};
//!
//! let mut canvas = Canvas::new();
//! canvas.set_tool(Tool::Rectangle);
//! canvas.pointer_press(Point::new(10.0, 10.0), PointerButton::Left, Modifiers::NONE);
//! canvas.pointer_release(Point::new(50.0, 40.0), PointerButton::Left, Modifiers::NONE);
//! assert_eq!(canvas.shape_count(), 1);
//! ```

pub mod backdrop;
pub mod canvas;
pub mod document;
pub mod editor_state;
pub mod geometry;
pub mod model;
pub mod renderer;
pub mod serialization;
pub mod shape_store;

pub use backdrop::Backdrop;
pub use canvas::{
    Canvas, Gesture, Modifiers, PendingTriangle, PointerButton, PointerButtons, Preview, Tool,
};
pub use document::{LoadedDocument, SHAPES_KEY};
pub use editor_state::EditorState;
pub use geometry::Bounds;
pub use model::{Point, Shape, ShapeGeometry, ShapeKind, ShapeStyle};
pub use renderer::{render_export, render_view};
pub use shape_store::ShapeStore;
