//! Color parsing for QR rasterization
//!
//! Fill and background colors arrive as strings from the environment or a
//! config file. Accepted forms are a small table of CSS-style color names
//! and `#RRGGBB` / `#RGB` hex notation.

use crate::error::{Error, Result};
use image::Rgb;

/// Named colors recognised in `FILL_COLOR` / `BACK_COLOR`.
const NAMED: &[(&str, [u8; 3])] = &[
    ("black", [0x00, 0x00, 0x00]),
    ("white", [0xFF, 0xFF, 0xFF]),
    ("red", [0xFF, 0x00, 0x00]),
    ("green", [0x00, 0x80, 0x00]),
    ("blue", [0x00, 0x00, 0xFF]),
    ("yellow", [0xFF, 0xFF, 0x00]),
    ("cyan", [0x00, 0xFF, 0xFF]),
    ("magenta", [0xFF, 0x00, 0xFF]),
    ("orange", [0xFF, 0xA5, 0x00]),
    ("purple", [0x80, 0x00, 0x80]),
    ("gray", [0x80, 0x80, 0x80]),
    ("grey", [0x80, 0x80, 0x80]),
];

/// Parse a color name or hex string into an RGB pixel.
pub fn parse(value: &str) -> Result<Rgb<u8>> {
    let trimmed = value.trim();

    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| Error::UnknownColor(value.to_string()));
    }

    let lowered = trimmed.to_ascii_lowercase();
    NAMED
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|(_, rgb)| Rgb(*rgb))
        .ok_or_else(|| Error::UnknownColor(value.to_string()))
}

fn parse_hex(hex: &str) -> Option<Rgb<u8>> {
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Rgb([r, g, b]))
        }
        3 => {
            // #RGB expands each nibble, e.g. #f0a -> #ff00aa
            let mut out = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let nibble = c.to_digit(16)? as u8;
                out[i] = nibble << 4 | nibble;
            }
            Some(Rgb(out))
        }
        _ => None,
    }
}
