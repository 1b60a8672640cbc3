use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Image directory not found: {0}")]
    SourceDirectoryNotFound(PathBuf),

    #[error("Failed to decode {0}: {1}")]
    Decode(PathBuf, #[source] image::ImageError),

    #[error("Failed to encode {0}: {1}")]
    Encode(PathBuf, #[source] image::ImageError),

    #[error("PNG optimization error: {0}")]
    PngOptimization(String),

    #[error("Failed to back up {0}: {1}")]
    BackupFailed(PathBuf, #[source] std::io::Error),

    #[error("Failed to create backup directory {0}: {1}")]
    DirectoryCreationFailed(PathBuf, #[source] std::io::Error),

    #[error("Backup directory {0} is the image directory; originals would be overwritten")]
    BackupDirectoryIsSource(PathBuf),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("Invalid maximum dimensions: {0}x{1}. Both must be greater than zero")]
    InvalidBound(u32, u32),

    #[error("Invalid file name: {0:?}. Expected a bare file name")]
    InvalidFileName(String),
}

pub type Result<T> = std::result::Result<T, ResizeError>;
