//! # PaintCanvas
//!
//! A vector-drawing canvas core: shapes are created and edited through
//! pointer gestures, persisted as a JSON record embedded in PNG metadata and
//! rendered into RGBA pixel buffers.
//!
//! ## Architecture
//!
//! PaintCanvas is organized as a workspace with multiple crates:
//!
//! 1. **paintcanvas-core** - Colors, drawing settings, shared error types
//! 2. **paintcanvas-designer** - Geometry, shape store, interaction engine,
//!    serializer, renderer and document I/O
//! 3. **paintcanvas-settings** - Configuration files and the default document path
//! 4. **paintcanvas** - This facade, with logging setup and editor bootstrap

pub use paintcanvas_core::{
    Color, ColorError, DocumentError, DrawingSettings, Error, Result, MAX_PEN_WIDTH,
    MIN_PEN_WIDTH,
};

pub use paintcanvas_designer as designer;
pub use paintcanvas_designer::{
    render_export, render_view, Backdrop, Bounds, Canvas, EditorState, Gesture, Modifiers,
    PendingTriangle, Point, PointerButton, PointerButtons, Preview, Shape, ShapeKind, ShapeStore,
    Tool,
};

pub use paintcanvas_settings::{default_document_path, CanvasSettings, Config, DocumentSettings};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with tracing
///
/// Sets up structured logging to stdout. The level defaults to INFO and can
/// be overridden through `RUST_LOG`.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!("PaintCanvas {} logging initialized", VERSION);
    Ok(())
}

/// Builds an editor from configuration: viewport size, backdrop growth
/// margin, drawing defaults and the default document location.
pub fn editor_from_config(config: &Config) -> EditorState {
    let mut canvas = Canvas::with_size(config.canvas.width, config.canvas.height);
    canvas.set_growth_margin(config.canvas.growth_margin);
    let drawing = config.drawing_settings();
    canvas.set_settings(drawing);

    let mut editor = EditorState::new(canvas, config.document_path());
    editor.set_default_settings(drawing);
    editor.set_autosave_on_close(config.document.autosave_on_close);
    editor
}

/// Builds an editor and, when autoload is enabled, opens the default
/// document. A default document that fails to load is logged and skipped.
pub fn open_editor(config: &Config) -> EditorState {
    let mut editor = editor_from_config(config);
    if config.document.autoload {
        match editor.load_default_document() {
            Ok(true) => tracing::info!("Opened {}", editor.display_name()),
            Ok(false) => {}
            Err(e) => tracing::warn!("Could not open default document: {:#}", e),
        }
    }
    editor
}
