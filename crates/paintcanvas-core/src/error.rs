//! Error handling for PaintCanvas
//!
//! Provides error types for the layers of the canvas core:
//! - Color errors (text encoding of colors)
//! - Document errors (raster image and embedded shape record)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Color parsing error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Color text did not start with `#`
    #[error("Color must start with '#': {0}")]
    MissingHash(String),

    /// Wrong number of hex digits
    #[error("Invalid color length {len} in '{value}' (expected 6 or 8 hex digits)")]
    InvalidLength {
        /// The rejected color text.
        value: String,
        /// The number of digits found after `#`.
        len: usize,
    },

    /// Non-hex characters in the color text
    #[error("Invalid hex digits in color '{0}'")]
    InvalidHex(String),
}

/// Document error type
///
/// Represents failures while turning a canvas into a raster document or
/// reading one back. Decoding the embedded shape record itself never fails;
/// only the image layer can.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The image bytes could not be decoded
    #[error("Failed to decode image: {0}")]
    ImageDecode(String),

    /// The image could not be encoded
    #[error("Failed to encode image: {0}")]
    ImageEncode(String),

    /// The render target has no drawable area
    #[error("Invalid image dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The shape record could not be serialized
    #[error("Failed to serialize shapes: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Main error type for PaintCanvas
#[derive(Error, Debug)]
pub enum Error {
    /// Color error
    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    /// Document error
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for PaintCanvas operations
pub type Result<T> = std::result::Result<T, Error>;
