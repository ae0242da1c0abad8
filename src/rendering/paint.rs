//! Paint-command construction: one dot per day, one caption.

use crate::grid::GridConfig;
use crate::palette::{Palette, Rgb};
use crate::params::RenderRequest;

/// Minimum caption size in pixels; below this the label is unreadable.
const MIN_CAPTION_SIZE: u32 = 12;

/// Caption size as a fraction of canvas width.
const CAPTION_SIZE_FRACTION: f64 = 0.03;

/// Gap between the bottom dot row and the caption, as a fraction of canvas
/// height.
const CAPTION_GAP_FRACTION: f64 = 0.04;

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// A filled circle centered at (`cx`, `cy`).
    Dot {
        cx: i64,
        cy: i64,
        radius: u32,
        color: Rgb,
    },
    /// A line of text, horizontally centered on `cx` with its top edge at
    /// `top`. `size` is the target glyph height in pixels.
    Caption {
        cx: i64,
        top: i64,
        size: u32,
        text: String,
        color: Rgb,
    },
}

/// Fill color for a 1-indexed day relative to the current day.
pub fn day_color(day: u32, current_day: u32, palette: &Palette) -> Rgb {
    if day < current_day {
        palette.past
    } else if day == current_day {
        palette.accent
    } else {
        palette.future
    }
}

/// Caption glyph height for a given canvas width.
pub fn caption_size(image_width: u32) -> u32 {
    MIN_CAPTION_SIZE.max((image_width as f64 * CAPTION_SIZE_FRACTION).floor() as u32)
}

/// Build the full display list for one wallpaper: `total_days` dots in
/// row-major order followed by the `days N/M` caption below the grid.
pub fn build_display_list(
    grid: &GridConfig,
    request: &RenderRequest,
    current_day: u32,
    total_days: u32,
) -> Vec<PaintCommand> {
    let mut commands = Vec::with_capacity(total_days as usize + 1);

    for i in 0..total_days {
        let (cx, cy) = grid.dot_center(i);
        commands.push(PaintCommand::Dot {
            cx,
            cy,
            radius: grid.dot_radius,
            color: day_color(i + 1, current_day, &request.palette),
        });
    }

    let gap = (request.height as f64 * CAPTION_GAP_FRACTION).floor() as i64;
    commands.push(PaintCommand::Caption {
        cx: request.width as i64 / 2,
        top: grid.offset_y + grid.grid_height as i64 + grid.dot_radius as i64 + gap,
        size: caption_size(request.width),
        text: format!("days {current_day}/{total_days}"),
        color: request.palette.accent,
    });

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::calculate_grid;

    fn request() -> RenderRequest {
        RenderRequest::default()
    }

    #[test]
    fn classifies_past_today_future() {
        let p = Palette::default();
        assert_eq!(day_color(1, 100, &p), p.past);
        assert_eq!(day_color(99, 100, &p), p.past);
        assert_eq!(day_color(100, 100, &p), p.accent);
        assert_eq!(day_color(101, 100, &p), p.future);
        assert_eq!(day_color(365, 100, &p), p.future);
    }

    #[test]
    fn caption_size_floors_and_clamps() {
        assert_eq!(caption_size(1200), 36);
        assert_eq!(caption_size(100), MIN_CAPTION_SIZE);
        assert_eq!(caption_size(399), MIN_CAPTION_SIZE); // floor(11.97) < 12
    }

    #[test]
    fn display_list_has_one_command_per_day_plus_caption() {
        let req = request();
        let grid = calculate_grid(req.width, req.height, 365);
        let cmds = build_display_list(&grid, &req, 120, 365);
        assert_eq!(cmds.len(), 366);
        match &cmds[365] {
            PaintCommand::Caption { text, .. } => assert_eq!(text, "days 120/365"),
            other => panic!("expected caption, got {other:?}"),
        }
    }

    #[test]
    fn dots_are_placed_on_grid_centers() {
        let req = request();
        let grid = calculate_grid(req.width, req.height, 365);
        let cmds = build_display_list(&grid, &req, 1, 365);
        for (i, cmd) in cmds.iter().take(365).enumerate() {
            match cmd {
                PaintCommand::Dot { cx, cy, radius, .. } => {
                    let (ex, ey) = grid.dot_center(i as u32);
                    assert_eq!((*cx, *cy), (ex, ey));
                    assert_eq!(*radius, grid.dot_radius);
                }
                other => panic!("expected dot, got {other:?}"),
            }
        }
    }

    #[test]
    fn caption_sits_below_last_row() {
        let req = request();
        let grid = calculate_grid(req.width, req.height, 365);
        let cmds = build_display_list(&grid, &req, 50, 365);
        let bottom_row = grid.offset_y + grid.grid_height as i64;
        match &cmds[365] {
            PaintCommand::Caption { top, .. } => assert!(*top > bottom_row),
            other => panic!("expected caption, got {other:?}"),
        }
    }
}
