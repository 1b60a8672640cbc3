//! Encode target selection
//!
//! The file is always re-encoded in the format its name says it is. PNG gets
//! the lossless oxipng pass, everything else the codec's own tuning.

use crate::error::{ResizeError, Result};
use image::ImageFormat;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossless, optimized with oxipng after encoding
    Png,
    /// Lossy, encoded at the configured quality
    Jpeg,
    /// Written with the lossless WebP encoder
    WebP,
    /// Any other format the image crate can write, using its default encoder
    Other(ImageFormat),
}

impl OutputFormat {
    pub fn to_image_format(&self) -> ImageFormat {
        match self {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::WebP => ImageFormat::WebP,
            OutputFormat::Other(format) => *format,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "PNG"),
            OutputFormat::Jpeg => write!(f, "JPEG"),
            OutputFormat::WebP => write!(f, "WebP"),
            OutputFormat::Other(format) => write!(f, "{:?}", format),
        }
    }
}

/// True when the extension is `png` in any letter case.
pub fn is_png_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("png"))
        .unwrap_or(false)
}

/// Picks the encode target from the file extension.
pub fn determine_output_format(path: &Path) -> Result<OutputFormat> {
    if is_png_file(path) {
        return Ok(OutputFormat::Png);
    }

    match ImageFormat::from_path(path) {
        Ok(ImageFormat::Jpeg) => Ok(OutputFormat::Jpeg),
        Ok(ImageFormat::WebP) => Ok(OutputFormat::WebP),
        Ok(format) if format.writing_enabled() => Ok(OutputFormat::Other(format)),
        Ok(format) => Err(ResizeError::UnsupportedFormat(format!(
            "{:?} cannot be written",
            format
        ))),
        Err(_) => Err(ResizeError::UnsupportedFormat(
            path.extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        )),
    }
}
