//! File I/O operations (save, load, new) for editor state.

use std::path::{Path, PathBuf};

use anyhow::Context;

use super::EditorState;
use crate::document;
use crate::renderer;

impl EditorState {
    /// Create new document (clear all).
    pub fn new_document(&mut self) {
        self.canvas.clear_all();
        self.canvas.set_settings(self.default_settings);
        self.canvas.reset_backdrop();
        self.current_file_path = None;
    }

    /// Load a document from file. On failure nothing changes.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<usize> {
        let path = path.as_ref();
        let doc = document::read_document(path)
            .with_context(|| format!("Failed to load {}", path.display()))?;

        let count = match &doc.record {
            Some(record) => {
                let count = self.canvas.load_record(record);
                self.canvas.reset_backdrop();
                count
            }
            None => {
                self.canvas.clear_all();
                self.canvas.set_settings(self.default_settings);
                self.canvas.set_backdrop_image(doc.raster);
                0
            }
        };

        self.current_file_path = Some(path.to_path_buf());
        tracing::info!("Loaded {} shapes from {}", count, path.display());
        Ok(count)
    }

    /// Save to the current document, or to the default path when untitled.
    pub fn save(&mut self) -> anyhow::Result<PathBuf> {
        let path = self.save_path().to_path_buf();
        self.save_as(&path)?;
        Ok(path)
    }

    /// Save to `path` and make it the current document.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let image = renderer::render_export(&self.canvas).context("Failed to render canvas")?;
        let record = self
            .canvas
            .to_record()
            .context("Failed to serialize shapes")?;
        document::write_document(path, &image, &record)
            .with_context(|| format!("Failed to save {}", path.display()))?;

        self.current_file_path = Some(path.to_path_buf());
        tracing::info!(
            "Saved {} shapes to {}",
            self.canvas.shape_count(),
            path.display()
        );
        Ok(())
    }

    /// Startup load of the default document. Returns whether it existed.
    pub fn load_default_document(&mut self) -> anyhow::Result<bool> {
        let path = self.default_document_path.clone();
        if !path.exists() {
            tracing::debug!("No default document at {}", path.display());
            return Ok(false);
        }
        self.load_from_file(&path)?;
        Ok(true)
    }

    /// Shutdown hook: saves the document when autosave is enabled.
    pub fn close(&mut self) -> anyhow::Result<()> {
        if self.autosave_on_close {
            if let Err(e) = self.save() {
                tracing::warn!("Autosave failed: {:#}", e);
                return Err(e);
            }
        }
        Ok(())
    }
}
