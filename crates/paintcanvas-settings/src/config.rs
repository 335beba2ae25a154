//! Configuration and settings management for PaintCanvas
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Drawing defaults (pen width and colors, fill toggle)
//! - Canvas sizing (initial viewport, backdrop growth margin)
//! - Document location (default path, autoload and autosave)

use crate::error::{ConfigError, SettingsError, SettingsResult};
use paintcanvas_core::{DrawingSettings, MAX_PEN_WIDTH, MIN_PEN_WIDTH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Canvas sizing settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Initial viewport width in pixels
    pub width: u32,
    /// Initial viewport height in pixels
    pub height: u32,
    /// Extra pixels added on each axis when the backdrop has to grow
    pub growth_margin: u32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            growth_margin: 128,
        }
    }
}

/// Document location settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSettings {
    /// Explicit default document; falls back to [`default_document_path`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_path: Option<PathBuf>,
    /// Load the default document on startup when it exists
    pub autoload: bool,
    /// Save the current document when the editor closes
    pub autosave_on_close: bool,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            default_path: None,
            autoload: true,
            autosave_on_close: true,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Drawing defaults for new documents
    pub drawing: DrawingSettings,
    /// Canvas sizing
    pub canvas: CanvasSettings,
    /// Document location
    pub document: DocumentSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match extension_of(path).as_deref() {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                )
                .into())
            }
        };

        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load config from file, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension_of(path).as_deref() {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                )
                .into())
            }
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let width = self.drawing.pen_width;
        if !(MIN_PEN_WIDTH..=MAX_PEN_WIDTH).contains(&width) {
            return Err(SettingsError::InvalidSetting {
                key: "drawing.pen_width".to_string(),
                reason: format!("must be between {} and {}", MIN_PEN_WIDTH, MAX_PEN_WIDTH),
            });
        }

        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "canvas".to_string(),
                value: format!("{}x{}", self.canvas.width, self.canvas.height),
            }
            .into());
        }

        Ok(())
    }

    /// Directory holding the configuration file.
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("paintcanvas"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Default location of the configuration file.
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Drawing defaults as core settings, with the pen width clamped to the
    /// supported range.
    pub fn drawing_settings(&self) -> DrawingSettings {
        let mut settings = self.drawing;
        settings.pen_width = settings.pen_width.clamp(MIN_PEN_WIDTH, MAX_PEN_WIDTH);
        settings
    }

    /// The document the editor opens and saves when no other path is chosen.
    pub fn document_path(&self) -> PathBuf {
        self.document
            .default_path
            .clone()
            .unwrap_or_else(default_document_path)
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// `<exe dir>/<exe stem>.png`, or `paintcanvas.png` in the working
/// directory when the executable location is unknown.
pub fn default_document_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| {
            let stem = exe.file_stem()?.to_string_lossy().into_owned();
            Some(exe.parent()?.join(format!("{}.png", stem)))
        })
        .unwrap_or_else(|| PathBuf::from("paintcanvas.png"))
}
