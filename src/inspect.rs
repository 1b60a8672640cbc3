use crate::config::Dimensions;
use crate::constants::BYTES_PER_MIB;
use crate::error::{ResizeError, Result};
use std::fs;
use std::path::Path;

/// Size of the file at `path` in bytes.
pub fn file_size_bytes(path: &Path) -> Result<u64> {
    Ok(fs::metadata(path)?.len())
}

/// Size of the file at `path` in mebibytes.
///
/// # Arguments
/// * `path` - File to measure
///
/// # Returns
/// * `Ok(f64)` - Size in MiB (bytes / 1024 / 1024)
/// * `Err(ResizeError::Io)` - The path is missing or unreadable
///
/// # Example
/// ```
/// use std::path::Path;
/// use img_fit::file_size_mib;
///
/// assert!(file_size_mib(Path::new("nonexistent.png")).is_err());
/// ```
pub fn file_size_mib(path: &Path) -> Result<f64> {
    Ok(bytes_to_mib(file_size_bytes(path)?))
}

pub fn bytes_to_mib(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MIB
}

/// Reads pixel dimensions from the image header without decoding pixel data.
pub fn read_dimensions(path: &Path) -> Result<Dimensions> {
    image::image_dimensions(path)
        .map(Dimensions::from)
        .map_err(|e| ResizeError::Decode(path.to_path_buf(), e))
}
