//! qrmint - turn URLs into timestamped QR code PNG files
//!
//! This library backs the `qrmint` command-line tool: it validates a URL,
//! encodes it as a QR symbol, and writes the rasterized result to disk as
//! a PNG in configurable colors.
//!
//! # Features
//!
//! - **URL validation**: well-formedness checks before anything is encoded
//! - **Configurable output**: directory and colors via environment, config
//!   file, or CLI overrides
//! - **Timestamped artifacts**: one uniquely named PNG per invocation
//!
//! # Example
//!
//! ```no_run
//! use qrmint::{Minter, OutputOptions};
//! use std::path::Path;
//!
//! fn main() -> qrmint::Result<()> {
//!     let minter = Minter::new(&OutputOptions::default())?;
//!     minter.mint_to("https://example.com", Path::new("qr.png"))?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod qr;
pub mod validate;

// Re-exports for convenience
pub use error::{Error, Result};

pub use config::{LogRotation, LoggingOptions, MintConfig, OutputOptions};
pub use qr::{QrEncoder, QrStyle};

use std::path::Path;
use tracing::info;

/// High-level interface combining validation + encoding + PNG writing
pub struct Minter {
    encoder: QrEncoder,
}

impl Minter {
    /// Create a new minter from output options, parsing the configured
    /// colors up front so bad configuration fails before any encoding.
    pub fn new(options: &OutputOptions) -> Result<Self> {
        let style = QrStyle::from_options(options)?;
        Ok(Self {
            encoder: QrEncoder::new(style),
        })
    }

    /// Validate `url` and write its QR code PNG to `path`.
    ///
    /// Returns [`Error::InvalidUrl`] without touching the filesystem when
    /// validation fails; the validator has already logged the outcome.
    pub fn mint_to(&self, url: &str, path: &Path) -> Result<()> {
        if !validate::is_valid_url(url) {
            return Err(Error::InvalidUrl(url.to_string()));
        }

        info!("Starting QR code generation process");
        self.encoder.write_png(url, path)?;
        info!("QR code generation process completed successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_to_rejects_invalid_url_before_writing() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("never_written.png");

        let minter = Minter::new(&OutputOptions::default()).unwrap();
        let err = minter.mint_to("not-a-url", &path).unwrap_err();

        assert!(matches!(err, Error::InvalidUrl(_)));
        assert!(!path.exists());
    }

    #[test]
    fn mint_to_writes_png_for_valid_url() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("code.png");

        let minter = Minter::new(&OutputOptions::default()).unwrap();
        minter.mint_to("https://example.com", &path).unwrap();

        assert!(path.is_file());
    }
}
