use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the logo maker core.
///
/// Element store operations never fail and font lookups degrade to the
/// built-in face, so in practice these come from saving and from setting up
/// the rasterizer.
#[derive(Debug, Error)]
pub enum LogoError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Invalid font data for '{0}'")]
    InvalidFont(String),

    #[error("Invalid canvas size {width}x{height}")]
    InvalidCanvasSize { width: u32, height: u32 },

    #[error("Failed to allocate a {width}x{height} raster")]
    RasterAllocation { width: u32, height: u32 },
}

impl LogoError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for logo maker operations
pub type Result<T> = std::result::Result<T, LogoError>;
