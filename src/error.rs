//! Error types for qrmint operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using qrmint's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for qrmint operations
#[derive(Error, Debug)]
pub enum Error {
    /// The supplied string is not a well-formed URL
    #[error("Invalid URL provided: {0}")]
    InvalidUrl(String),

    /// QR code encoding failed
    #[error("Failed to encode QR code: {0}")]
    QrEncode(String),

    /// Output directory could not be created
    #[error("Failed to create directory {path}: {source}")]
    CreateDirectory {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying filesystem error
        source: std::io::Error,
    },

    /// Color name or hex string was not recognised
    #[error("Unknown color '{0}', expected a color name or #RRGGBB")]
    UnknownColor(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image processing error
    #[error("Image processing error: {0}")]
    Image(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

// Implement From conversions for common error types

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e.to_string())
    }
}
