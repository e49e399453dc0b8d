//! QR code encoding
//!
//! This module wraps the `qrcode` crate: symbol construction with
//! automatic versioning plus rasterization into a colored RGB image.

mod encoder;

pub use encoder::QrEncoder;

use crate::color;
use crate::config::OutputOptions;
use crate::error::Result;
use image::Rgb;

/// Foreground/background colors applied when rasterizing a QR symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrStyle {
    /// Color of the QR modules (dots)
    pub fill: Rgb<u8>,
    /// Color of the empty modules and quiet zone
    pub back: Rgb<u8>,
}

impl QrStyle {
    /// Build a style from configured color strings.
    pub fn from_options(options: &OutputOptions) -> Result<Self> {
        Ok(Self {
            fill: color::parse(&options.fill_color)?,
            back: color::parse(&options.back_color)?,
        })
    }
}

impl Default for QrStyle {
    fn default() -> Self {
        Self {
            fill: Rgb([0x00, 0x00, 0x00]),
            back: Rgb([0xFF, 0xFF, 0xFF]),
        }
    }
}
