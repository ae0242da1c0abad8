//! Colors: hex parsing with silent fallback, and the four-color palette.
//!
//! Color handling is deliberately literal: a color is six hex digits and
//! nothing else. Malformed input never surfaces as an error; the boundary
//! layer swaps in the default so a bad query parameter degrades to the
//! stock look instead of failing the request.

use serde::{Deserialize, Serialize};

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse exactly six hex digits (no leading `#`).
    pub fn from_hex(s: &str) -> Option<Self> {
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Parse an optional hex parameter, falling back on `None` or malformed
/// input.
pub fn parse_hex_or(input: Option<&str>, fallback: Rgb) -> Rgb {
    input.and_then(Rgb::from_hex).unwrap_or(fallback)
}

/// The four colors of a wallpaper: canvas background, dots for days already
/// gone, dots for days still to come, and the accent used for today's dot
/// and the caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Rgb,
    pub past: Rgb,
    pub future: Rgb,
    pub accent: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::new(0x10, 0x10, 0x18),
            past: Rgb::new(0xe8, 0xe8, 0xf0),
            future: Rgb::new(0x2e, 0x2e, 0x3e),
            accent: Rgb::new(0xff, 0x5d, 0x5d),
        }
    }
}
