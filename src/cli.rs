use crate::config::{EncodeOptions, ResizeConfig};
use crate::constants::{DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH};
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "img-fit",
    about = "Shrink oversized images in place to fit a maximum size, keeping backups",
    long_about = "img-fit backs up each listed image, downsamples it to fit within the maximum \
                  dimensions while preserving aspect ratio, and re-saves it with lossless \
                  optimization (oxipng for PNG). Any failure restores the original from the backup. \
                  Run without arguments to process the built-in file list with all defaults.",
    version,
    after_help = "EXAMPLES:\n  \
    img-fit\n  \
    img-fit -s ./public/images Power.png location_01.png\n  \
    img-fit -w 1280 -H 720 --zopfli"
)]
pub struct Args {
    #[arg(
        help = "Image file names inside the source directory",
        long_help = "Bare file names to process, in order. \
                     Defaults to the built-in list of nine images when omitted."
    )]
    pub files: Vec<String>,

    #[arg(short = 's', long, help = "Directory containing the images")]
    pub source: Option<PathBuf>,

    #[arg(
        short = 'b',
        long,
        help = "Directory for backups of the originals",
        long_help = "Directory that receives an unmodified copy of every image before it is changed. \
                     Defaults to a 'backup' directory inside the source directory."
    )]
    pub backup: Option<PathBuf>,

    #[arg(short = 'w', long, help = "Maximum width in pixels (default: 1920)")]
    pub max_width: Option<u32>,

    #[arg(short = 'H', long, help = "Maximum height in pixels (default: 1920)")]
    pub max_height: Option<u32>,

    #[arg(
        short = 'q',
        long,
        help = "Quality for lossy formats (1-100, default: 95)",
        long_help = "Quality factor used when re-encoding JPEG images. PNG output is always lossless."
    )]
    pub quality: Option<u8>,

    #[arg(long, help = "Use Zopfli for PNG optimization (slow, slightly smaller)")]
    pub zopfli: bool,

    #[arg(long, conflicts_with = "verbose", help = "Only print errors")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Print extra detail for each step")]
    pub verbose: bool,
}

impl Args {
    /// Folds the flags over the defaults.
    pub fn into_config(self) -> Result<ResizeConfig> {
        let mut config = match self.source {
            Some(source) => ResizeConfig::new(source),
            None => ResizeConfig::default(),
        };

        if let Some(backup) = self.backup {
            config = config.with_backup_dir(backup);
        }
        if !self.files.is_empty() {
            config = config.with_files(self.files);
        }

        config = config.with_bound(
            self.max_width.unwrap_or(DEFAULT_MAX_WIDTH),
            self.max_height.unwrap_or(DEFAULT_MAX_HEIGHT),
        )?;

        Ok(config.with_encode_options(EncodeOptions::new(self.quality, self.zopfli)?))
    }
}
