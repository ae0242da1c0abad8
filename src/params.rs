//! Boundary-layer validation of caller-supplied parameters.
//!
//! Everything here runs before the layout engine is invoked: the engine
//! trusts its inputs, so this module is where dimensions get clamped to
//! sane ranges and color strings are swapped for defaults when malformed.
//! Validation never rejects a request; every input produces a usable
//! [`RenderRequest`].

use crate::palette::{parse_hex_or, Palette};

pub const MIN_WIDTH: u32 = 100;
pub const MAX_WIDTH: u32 = 4000;
pub const MIN_HEIGHT: u32 = 100;
pub const MAX_HEIGHT: u32 = 8000;

/// Default canvas: portrait phone wallpaper.
pub const DEFAULT_WIDTH: u32 = 1080;
pub const DEFAULT_HEIGHT: u32 = 1920;

pub fn clamp(value: u32, min: u32, max: u32) -> u32 {
    value.max(min).min(max)
}

/// A fully-validated rendering request: the only form the rendering
/// pipeline and the layout engine ever see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRequest {
    pub width: u32,
    pub height: u32,
    pub palette: Palette,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            palette: Palette::default(),
        }
    }
}

impl RenderRequest {
    /// Build a request from raw, possibly-absent user input.
    ///
    /// Missing dimensions take the defaults; present ones are clamped.
    /// Color strings must be exactly six hex digits or they fall back to
    /// the stock palette entry.
    pub fn from_parts(
        width: Option<u32>,
        height: Option<u32>,
        bg_color: Option<&str>,
        primary: Option<&str>,
        secondary: Option<&str>,
        accent: Option<&str>,
    ) -> Self {
        let stock = Palette::default();
        Self {
            width: clamp(width.unwrap_or(DEFAULT_WIDTH), MIN_WIDTH, MAX_WIDTH),
            height: clamp(height.unwrap_or(DEFAULT_HEIGHT), MIN_HEIGHT, MAX_HEIGHT),
            palette: Palette {
                background: parse_hex_or(bg_color, stock.background),
                past: parse_hex_or(primary, stock.past),
                future: parse_hex_or(secondary, stock.future),
                accent: parse_hex_or(accent, stock.accent),
            },
        }
    }
}
