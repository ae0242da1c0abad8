//! Dot-grid layout engine.
//!
//! Maps a canvas size and a day count to the geometry of a fixed-column dot
//! grid: how far apart dot centers sit, how large each dot is, and where the
//! grid's top-left dot lands so the whole arrangement is centered on the
//! canvas with room left below for the caption.
//!
//! The computation is a pure function of its inputs. It never allocates,
//! never fails, and holds no state; callers recompute the layout from
//! scratch on every request.

use serde::Serialize;

/// Number of dot columns. Fixed regardless of canvas size or day count.
pub const GRID_COLUMNS: u32 = 15;

/// Hard cap on dot radius in pixels, so dots stay visually uniform on very
/// large canvases.
pub const MAX_DOT_RADIUS: u32 = 16;

/// Dot radius as a fraction of center-to-center spacing.
pub const RADIUS_SPACING_RATIO: f64 = 0.35;

/// Fraction of the canvas width usable by the grid.
pub const WIDTH_USABLE_FRACTION: f64 = 0.8;

/// Fraction of the canvas height usable by the grid. Smaller than the width
/// fraction to leave room for the caption below.
pub const HEIGHT_USABLE_FRACTION: f64 = 0.75;

/// Upward shift of the grid, as a fraction of canvas height, making room
/// for the caption rendered beneath it. Coupled to caption placement; any
/// renderer drawing a label below the grid relies on this value.
pub const CAPTION_LIFT_FRACTION: f64 = 0.06;

/// Complete layout geometry for one rendering request.
///
/// `grid_width` and `grid_height` span from the center of the first dot to
/// the center of the last; renderers must add `dot_radius` of margin when
/// computing true pixel extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridConfig {
    /// Always [`GRID_COLUMNS`].
    pub columns: u32,
    /// `ceil(total_dots / columns)`.
    pub rows: u32,
    /// Echo of the requested day count.
    pub total_dots: u32,
    /// Pixel radius of each dot, at most [`MAX_DOT_RADIUS`].
    pub dot_radius: u32,
    /// Center-to-center pixel distance between adjacent dots, both axes.
    pub dot_spacing: u32,
    /// `(columns - 1) * dot_spacing`.
    pub grid_width: u32,
    /// `(rows - 1) * dot_spacing`.
    pub grid_height: u32,
    /// Horizontal offset of the first dot's center.
    pub offset_x: i64,
    /// Vertical offset of the first dot's center, lifted by
    /// [`CAPTION_LIFT_FRACTION`] of the canvas height.
    pub offset_y: i64,
}

impl GridConfig {
    /// Center of dot `index` (0-indexed, row-major).
    pub fn dot_center(&self, index: u32) -> (i64, i64) {
        let col = (index % self.columns) as i64;
        let row = (index / self.columns) as i64;
        (
            self.offset_x + col * self.dot_spacing as i64,
            self.offset_y + row * self.dot_spacing as i64,
        )
    }
}

/// Compute the dot-grid layout for `total_days` dots on an
/// `image_width x image_height` canvas.
///
/// Spacing is dictated by whichever axis is tighter, so the grid never
/// overflows the usable region of either dimension. All fractional results
/// are floored to whole pixels to avoid sub-pixel drift.
///
/// The engine performs no input validation: callers are responsible for
/// clamping dimensions to sane ranges (see the `params` module) and
/// geometric quality is undefined outside them. Degenerate inputs still
/// return without panicking: `total_days == 0` yields zero rows and zero
/// grid extents.
pub fn calculate_grid(image_width: u32, image_height: u32, total_days: u32) -> GridConfig {
    let columns = GRID_COLUMNS;
    let rows = total_days.div_ceil(columns);

    let available_width = image_width as f64 * WIDTH_USABLE_FRACTION;
    let available_height = image_height as f64 * HEIGHT_USABLE_FRACTION;

    let spacing_by_width = available_width / columns as f64;
    // rows == 0 gives +inf here, so the width axis wins the min below.
    let spacing_by_height = available_height / rows as f64;
    let dot_spacing = spacing_by_width.min(spacing_by_height).floor() as u32;

    let dot_radius = MAX_DOT_RADIUS.min((dot_spacing as f64 * RADIUS_SPACING_RATIO).floor() as u32);

    let grid_width = (columns - 1) * dot_spacing;
    let grid_height = rows.saturating_sub(1) * dot_spacing;

    let offset_x = (image_width as i64 - grid_width as i64).div_euclid(2);
    let offset_y = (image_height as i64 - grid_height as i64).div_euclid(2)
        - (image_height as f64 * CAPTION_LIFT_FRACTION).floor() as i64;

    GridConfig {
        columns,
        rows,
        total_dots: total_days,
        dot_radius,
        dot_spacing,
        grid_width,
        grid_height,
        offset_x,
        offset_y,
    }
}
