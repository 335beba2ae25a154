//! Editor state: the canvas plus the document it is bound to.

mod file_io;

use std::path::{Path, PathBuf};

use crate::canvas::Canvas;
use paintcanvas_core::DrawingSettings;

/// Document-level state wrapped around a [`Canvas`].
#[derive(Debug, Clone)]
pub struct EditorState {
    pub canvas: Canvas,
    pub current_file_path: Option<PathBuf>,
    default_document_path: PathBuf,
    default_settings: DrawingSettings,
    autosave_on_close: bool,
}

impl EditorState {
    /// Creates an editor whose untitled documents save to `default_document_path`.
    pub fn new(canvas: Canvas, default_document_path: impl Into<PathBuf>) -> Self {
        let default_settings = *canvas.settings();
        Self {
            canvas,
            current_file_path: None,
            default_document_path: default_document_path.into(),
            default_settings,
            autosave_on_close: true,
        }
    }

    /// Drawing settings restored by "new document" and by documents without
    /// a shape record.
    pub fn set_default_settings(&mut self, settings: DrawingSettings) {
        self.default_settings = settings;
    }

    pub fn default_settings(&self) -> &DrawingSettings {
        &self.default_settings
    }

    pub fn set_autosave_on_close(&mut self, enabled: bool) {
        self.autosave_on_close = enabled;
    }

    pub fn default_document_path(&self) -> &Path {
        &self.default_document_path
    }

    /// Path the next plain save writes to.
    pub fn save_path(&self) -> &Path {
        self.current_file_path
            .as_deref()
            .unwrap_or(&self.default_document_path)
    }

    /// File name of the current document, or "Untitled".
    pub fn display_name(&self) -> String {
        self.current_file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string())
    }
}
