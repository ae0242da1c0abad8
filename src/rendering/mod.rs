//! Dot-grid rendering pipeline.
//!
//! Two stages, mirroring a classic display-list design: `paint` turns a
//! layout plus a date into an ordered list of paint commands, and `raster`
//! executes those commands into an RGB framebuffer and encodes it as PNG.

pub mod paint;
pub mod raster;

use crate::calendar;
use crate::error::Result;
use crate::grid::calculate_grid;
use crate::params::RenderRequest;

/// A finished wallpaper: PNG bytes plus the dimensions they encode.
#[derive(Debug, Clone)]
pub struct Wallpaper {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

/// Render the year-progress wallpaper for an explicit date position.
///
/// `current_day` is 1-indexed; days before it are painted with the past
/// color, the day itself with the accent, and the rest with the future
/// color.
pub fn render(request: &RenderRequest, current_day: u32, total_days: u32) -> Result<Wallpaper> {
    let grid = calculate_grid(request.width, request.height, total_days);
    log::debug!(
        "layout: {}x{} dots, spacing {}, radius {}, origin ({}, {})",
        grid.columns,
        grid.rows,
        grid.dot_spacing,
        grid.dot_radius,
        grid.offset_x,
        grid.offset_y
    );

    let commands = paint::build_display_list(&grid, request, current_day, total_days);
    raster::rasterize(request.width, request.height, request.palette.background, &commands)
}

/// Render for the current UTC date.
pub fn render_today(request: &RenderRequest) -> Result<Wallpaper> {
    let (_, current_day, total_days) = calendar::today();
    render(request, current_day, total_days)
}
