use crate::constants::{
    BACKUP_DIR_NAME, DEFAULT_IMAGE_DIR, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH, DEFAULT_QUALITY,
    DEFAULT_TARGET_FILES, MAX_QUALITY, MIN_QUALITY,
};
use crate::error::{ResizeError, Result};
use std::fmt;
use std::path::PathBuf;

/// Pixel width and height of an image, or of the resize bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either side is larger than the matching side of `bound`.
    pub fn exceeds(&self, bound: Dimensions) -> bool {
        self.width > bound.width || self.height > bound.height
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Quality factor for lossy targets. PNG output ignores it.
    pub quality: u8,
    /// Use the Zopfli deflater for PNG output. Much slower, slightly smaller.
    pub zopfli: bool,
}

impl EncodeOptions {
    pub fn new(quality: Option<u8>, zopfli: bool) -> Result<Self> {
        let quality = quality.unwrap_or(DEFAULT_QUALITY);
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(ResizeError::InvalidQuality(quality));
        }

        Ok(Self { quality, zopfli })
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            zopfli: false,
        }
    }
}

/// Everything a batch run needs. Built once and passed down by reference.
#[derive(Debug, Clone)]
pub struct ResizeConfig {
    pub source_dir: PathBuf,
    pub backup_dir: PathBuf,
    pub bound: Dimensions,
    pub files: Vec<String>,
    pub encode: EncodeOptions,
}

impl ResizeConfig {
    /// Config rooted at `source_dir` with the backup directory nested under it
    /// and every other setting at its default.
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        let source_dir = source_dir.into();
        let backup_dir = source_dir.join(BACKUP_DIR_NAME);
        Self {
            source_dir,
            backup_dir,
            bound: Dimensions::new(DEFAULT_MAX_WIDTH, DEFAULT_MAX_HEIGHT),
            files: DEFAULT_TARGET_FILES.iter().map(|f| f.to_string()).collect(),
            encode: EncodeOptions::default(),
        }
    }

    pub fn with_backup_dir(mut self, backup_dir: impl Into<PathBuf>) -> Self {
        self.backup_dir = backup_dir.into();
        self
    }

    pub fn with_bound(mut self, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ResizeError::InvalidBound(width, height));
        }
        self.bound = Dimensions::new(width, height);
        Ok(self)
    }

    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_encode_options(mut self, encode: EncodeOptions) -> Self {
        self.encode = encode;
        self
    }

    pub fn source_path(&self, filename: &str) -> PathBuf {
        self.source_dir.join(filename)
    }

    pub fn backup_path(&self, filename: &str) -> PathBuf {
        self.backup_dir.join(filename)
    }
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResizeConfig::default();
        assert_eq!(config.source_dir, PathBuf::from(DEFAULT_IMAGE_DIR));
        assert_eq!(
            config.backup_dir,
            PathBuf::from(DEFAULT_IMAGE_DIR).join("backup")
        );
        assert_eq!(config.bound, Dimensions::new(1920, 1920));
        assert_eq!(config.files.len(), 9);
        assert!(config.files.contains(&"Power_2N1.PNG".to_string()));
        assert_eq!(config.encode.quality, 95);
        assert!(!config.encode.zopfli);
    }

    #[test]
    fn test_backup_dir_follows_source() {
        let config = ResizeConfig::new("/tmp/images");
        assert_eq!(config.backup_dir, PathBuf::from("/tmp/images/backup"));
        assert_eq!(
            config.backup_path("a.png"),
            PathBuf::from("/tmp/images/backup/a.png")
        );
        assert_eq!(config.source_path("a.png"), PathBuf::from("/tmp/images/a.png"));
    }

    #[test]
    fn test_backup_dir_override() {
        let config = ResizeConfig::new("/tmp/images").with_backup_dir("/tmp/elsewhere");
        assert_eq!(config.backup_path("a.png"), PathBuf::from("/tmp/elsewhere/a.png"));
    }

    #[test]
    fn test_with_bound_rejects_zero() {
        let result = ResizeConfig::default().with_bound(0, 100);
        assert!(matches!(result, Err(ResizeError::InvalidBound(0, 100))));

        let config = ResizeConfig::default().with_bound(800, 600).unwrap();
        assert_eq!(config.bound, Dimensions::new(800, 600));
    }

    #[test]
    fn test_encode_options_quality_range() {
        assert_eq!(EncodeOptions::new(None, false).unwrap().quality, 95);
        assert_eq!(EncodeOptions::new(Some(80), true).unwrap().quality, 80);
        assert!(matches!(
            EncodeOptions::new(Some(0), false),
            Err(ResizeError::InvalidQuality(0))
        ));
        assert!(matches!(
            EncodeOptions::new(Some(101), false),
            Err(ResizeError::InvalidQuality(101))
        ));
    }

    #[test]
    fn test_dimensions_exceeds() {
        let bound = Dimensions::new(1920, 1920);
        assert!(Dimensions::new(3840, 2160).exceeds(bound));
        assert!(Dimensions::new(1000, 2000).exceeds(bound));
        assert!(!Dimensions::new(1920, 1920).exceeds(bound));
        assert!(!Dimensions::new(800, 600).exceeds(bound));
        assert_eq!(Dimensions::new(800, 600).to_string(), "800x600");
    }
}
