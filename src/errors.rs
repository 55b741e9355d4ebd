//! Errors of a collage build

use std::path::PathBuf;

use thiserror::Error;

pub type CollageResult<T> = Result<T, CollageError>;

/// Every variant is terminal: a build that hits one writes nothing.
#[derive(Debug, Error)]
pub enum CollageError{
    #[error("No images provided")]
    NoImages,

    #[error("Failed to load image: {} ({reason})", .path.display())]
    ImageLoadFailed{ path: PathBuf, reason: String },

    #[error("Failed to create canvas of {width}x{height}")]
    CanvasCreationFailed{ width: u64, height: u64 },

    #[error("Failed to save collage: {0}")]
    SaveFailed(String),
}

impl CollageError{
    pub fn load(path: &std::path::Path, reason: impl ToString) -> Self{
        Self::ImageLoadFailed{ path: path.to_path_buf(), reason: reason.to_string() }
    }

    pub fn save(reason: impl ToString) -> Self{
        Self::SaveFailed(reason.to_string())
    }
}
