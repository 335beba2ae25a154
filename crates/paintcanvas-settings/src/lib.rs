//! PaintCanvas Settings Crate
//!
//! Handles application configuration: drawing defaults, canvas sizing and
//! document location, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{default_document_path, CanvasSettings, Config, DocumentSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
