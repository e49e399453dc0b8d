//! QR code encoder

use crate::error::{Error, Result};
use crate::qr::QrStyle;
use image::{ImageFormat, Rgb, RgbImage};
use qrcode::QrCode;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

/// QR code encoder
pub struct QrEncoder {
    /// Error correction level
    ecc_level: qrcode::EcLevel,
    /// Rasterization colors
    style: QrStyle,
}

impl QrEncoder {
    /// Create a new QR encoder with default settings (Medium ECC)
    pub fn new(style: QrStyle) -> Self {
        Self {
            ecc_level: qrcode::EcLevel::M,
            style,
        }
    }

    /// Create a new QR encoder with a specific error correction level
    pub fn with_ecc_level(style: QrStyle, ecc_level: qrcode::EcLevel) -> Self {
        Self { ecc_level, style }
    }

    /// Encode data into a QR code image.
    ///
    /// The symbol version is chosen automatically: the smallest version
    /// that holds `data` at the configured error correction level.
    pub fn encode(&self, data: &str) -> Result<RgbImage> {
        let code = QrCode::with_error_correction_level(data, self.ecc_level)
            .map_err(|e| Error::QrEncode(format!("Failed to create QR code: {}", e)))?;

        let image = code
            .render::<Rgb<u8>>()
            .dark_color(self.style.fill)
            .light_color(self.style.back)
            .quiet_zone(true)
            .min_dimensions(400, 400) // Minimum size for reliable scanning
            .build();

        Ok(image)
    }

    /// Encode data and persist the result as a PNG at `path`.
    ///
    /// The file handle is scoped to this call and closed on every exit
    /// path, including encode failures part-way through.
    pub fn write_png(&self, data: &str, path: &Path) -> Result<()> {
        let image = self.encode(data)?;

        let mut file = BufWriter::new(File::create(path)?);
        image.write_to(&mut file, ImageFormat::Png)?;

        info!("QR code image saved to {}", path.display());
        Ok(())
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new(QrStyle::default())
    }
}
