//! # PaintCanvas Core
//!
//! Shared building blocks for the PaintCanvas crates:
//!
//! - **Colors**: RGBA colors with `#aarrggbb` text encoding
//! - **Drawing settings**: pen and fill parameters captured by new shapes
//! - **Errors**: `thiserror`-based error types and the crate-wide `Result` alias

pub mod color;
pub mod error;
pub mod settings;

pub use color::Color;
pub use error::{ColorError, DocumentError, Error, Result};
pub use settings::{DrawingSettings, MAX_PEN_WIDTH, MIN_PEN_WIDTH};
