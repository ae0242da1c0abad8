//! Error types for the wallpaper renderer

use thiserror::Error;

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing a wallpaper
///
/// The layout engine itself is total and never fails; errors only arise at
/// the edges, when encoding the framebuffer or writing the output file.
#[derive(Error, Debug)]
pub enum Error {
    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// Failed to write output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}
