//! Software rasterizer: executes paint commands into an RGB framebuffer
//! and encodes the result as PNG.
//!
//! Dots are scan-filled circles; the caption uses a small 5x7 bitmap font
//! covering just the characters the `days N/M` label can contain, scaled
//! by whole-pixel replication so output stays crisp at any canvas size.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::error::Result;
use crate::palette::Rgb;
use crate::rendering::paint::PaintCommand;
use crate::rendering::Wallpaper;

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;

/// 5x7 glyph rows, low 5 bits per row, for the caption alphabet.
fn glyph(ch: char) -> Option<[u8; 7]> {
    let rows = match ch {
        ' ' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        '/' => [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'a' => [0x00, 0x00, 0x0E, 0x01, 0x0F, 0x11, 0x0F],
        'd' => [0x01, 0x01, 0x0D, 0x13, 0x11, 0x11, 0x0F],
        's' => [0x00, 0x00, 0x0E, 0x10, 0x0E, 0x01, 0x1E],
        'y' => [0x00, 0x00, 0x11, 0x11, 0x0F, 0x01, 0x0E],
        _ => return None,
    };
    Some(rows)
}

/// Whole-pixel glyph scale for a target text height.
fn glyph_scale(size: u32) -> u32 {
    (size / GLYPH_HEIGHT).max(1)
}

/// Pixel width of a rendered string: one glyph cell plus one scaled column
/// of tracking per character, minus the trailing gap.
fn text_width(text: &str, scale: u32) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    chars * (GLYPH_WIDTH + 1) * scale - scale
}

struct Framebuffer {
    width: u32,
    height: u32,
    buf: Vec<u8>,
}

impl Framebuffer {
    fn new(width: u32, height: u32, background: Rgb) -> Self {
        let mut buf = vec![0u8; (width * height * 3) as usize];
        for px in buf.chunks_exact_mut(3) {
            px.copy_from_slice(&background.channels());
        }
        Self { width, height, buf }
    }

    #[inline]
    fn set_pixel(&mut self, x: i64, y: i64, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = ((y as u32 * self.width + x as u32) * 3) as usize;
        self.buf[idx..idx + 3].copy_from_slice(&color.channels());
    }

    fn fill_dot(&mut self, cx: i64, cy: i64, radius: u32, color: Rgb) {
        let r = radius as i64;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    self.set_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    fn draw_char(&mut self, x: i64, y: i64, ch: char, scale: u32, color: Rgb) {
        let Some(rows) = glyph(ch) else { return };
        let s = scale as i64;
        for (row, &bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (0x10 >> col) != 0 {
                    for dy in 0..s {
                        for dx in 0..s {
                            self.set_pixel(
                                x + col as i64 * s + dx,
                                y + row as i64 * s + dy,
                                color,
                            );
                        }
                    }
                }
            }
        }
    }

    fn draw_text_centered(&mut self, cx: i64, top: i64, text: &str, scale: u32, color: Rgb) {
        let advance = ((GLYPH_WIDTH + 1) * scale) as i64;
        let mut x = cx - text_width(text, scale) as i64 / 2;
        for ch in text.chars() {
            self.draw_char(x, top, ch, scale, color);
            x += advance;
        }
    }

    fn encode_png(&self) -> Result<Vec<u8>> {
        let mut png = Vec::new();
        let encoder = PngEncoder::new(&mut png);
        encoder.write_image(&self.buf, self.width, self.height, ExtendedColorType::Rgb8)?;
        Ok(png)
    }
}

/// Execute `commands` against a fresh framebuffer and encode it.
pub fn rasterize(
    width: u32,
    height: u32,
    background: Rgb,
    commands: &[PaintCommand],
) -> Result<Wallpaper> {
    let mut fb = Framebuffer::new(width, height, background);

    for cmd in commands {
        match cmd {
            PaintCommand::Dot { cx, cy, radius, color } => {
                fb.fill_dot(*cx, *cy, *radius, *color);
            }
            PaintCommand::Caption { cx, top, size, text, color } => {
                fb.draw_text_centered(*cx, *top, text, glyph_scale(*size), *color);
            }
        }
    }

    Ok(Wallpaper {
        width,
        height,
        png_data: fb.encode_png()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgb = Rgb::new(0, 0, 0);
    const FG: Rgb = Rgb::new(255, 255, 255);

    fn pixel(fb: &Framebuffer, x: u32, y: u32) -> Rgb {
        let idx = ((y * fb.width + x) * 3) as usize;
        Rgb::new(fb.buf[idx], fb.buf[idx + 1], fb.buf[idx + 2])
    }

    #[test]
    fn framebuffer_starts_as_background() {
        let fb = Framebuffer::new(8, 4, Rgb::new(9, 8, 7));
        assert_eq!(fb.buf.len(), 8 * 4 * 3);
        assert_eq!(pixel(&fb, 0, 0), Rgb::new(9, 8, 7));
        assert_eq!(pixel(&fb, 7, 3), Rgb::new(9, 8, 7));
    }

    #[test]
    fn out_of_bounds_pixels_are_dropped() {
        let mut fb = Framebuffer::new(4, 4, BG);
        fb.set_pixel(-1, 0, FG);
        fb.set_pixel(0, -1, FG);
        fb.set_pixel(4, 0, FG);
        fb.set_pixel(0, 4, FG);
        assert!(fb.buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn dot_fills_center_not_corners() {
        let mut fb = Framebuffer::new(21, 21, BG);
        fb.fill_dot(10, 10, 5, FG);
        assert_eq!(pixel(&fb, 10, 10), FG);
        assert_eq!(pixel(&fb, 15, 10), FG); // on the radius
        assert_eq!(pixel(&fb, 14, 14), BG); // outside: 4^2 + 4^2 > 5^2
        assert_eq!(pixel(&fb, 0, 0), BG);
    }

    #[test]
    fn dot_clipped_at_edge_does_not_panic() {
        let mut fb = Framebuffer::new(10, 10, BG);
        fb.fill_dot(0, 0, 6, FG);
        fb.fill_dot(9, 9, 6, FG);
        assert_eq!(pixel(&fb, 0, 0), FG);
        assert_eq!(pixel(&fb, 9, 9), FG);
    }

    #[test]
    fn caption_alphabet_is_complete() {
        for ch in "days 0123456789/".chars() {
            assert!(glyph(ch).is_some(), "missing glyph {ch:?}");
        }
        assert!(glyph('x').is_none());
    }

    #[test]
    fn glyph_scale_never_zero() {
        assert_eq!(glyph_scale(0), 1);
        assert_eq!(glyph_scale(12), 1);
        assert_eq!(glyph_scale(14), 2);
        assert_eq!(glyph_scale(36), 5);
    }

    #[test]
    fn text_width_counts_tracking() {
        assert_eq!(text_width("", 1), 0);
        assert_eq!(text_width("1", 1), 5);
        assert_eq!(text_width("11", 1), 11);
        assert_eq!(text_width("11", 3), 33);
    }

    #[test]
    fn drawn_text_touches_framebuffer() {
        let mut fb = Framebuffer::new(40, 12, BG);
        fb.draw_text_centered(20, 2, "1/2", 1, FG);
        assert!(fb.buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn png_encoding_produces_signature() {
        let fb = Framebuffer::new(4, 4, BG);
        let png = fb.encode_png().unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }
}
