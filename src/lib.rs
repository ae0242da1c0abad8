//! Yeardots
//!
//! A year-progress wallpaper generator: one dot per day of the year, laid
//! out in a fixed 15-column grid, colored past/today/future, and rendered
//! to a PNG of caller-chosen size and palette.
//!
//! # Structure
//!
//! - **Layout core**: the `grid` module is a pure, stateless function from
//!   canvas size and day count to dot geometry. It never fails and holds
//!   no shared state, so it is safe to call concurrently.
//! - **Boundary**: the `params` module clamps dimensions and falls back on
//!   malformed colors, so the core only ever sees validated input.
//! - **Pipeline**: `rendering` builds a display list from the layout and
//!   rasterizes it into PNG bytes.
//!
//! # Example
//!
//! ```
//! use yeardots::{calculate_grid, render, RenderRequest};
//!
//! # fn main() -> yeardots::Result<()> {
//! let request = RenderRequest::default();
//! let grid = calculate_grid(request.width, request.height, 365);
//! assert_eq!(grid.columns, 15);
//!
//! let wallpaper = render(&request, 120, 365)?;
//! assert_eq!(wallpaper.width, request.width);
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod error;
pub mod grid;
pub mod palette;
pub mod params;
pub mod rendering;

pub use error::{Error, Result};
pub use grid::{calculate_grid, GridConfig};
pub use palette::{Palette, Rgb};
pub use params::RenderRequest;
pub use rendering::{render, render_today, Wallpaper};
