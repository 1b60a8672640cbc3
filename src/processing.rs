use crate::codec::{ImageCodec, StandardCodec};
use crate::config::{Dimensions, ResizeConfig};
use crate::constants::{INFO_PREFIX, PROCESSING_PREFIX, SAVED_PREFIX, SUCCESS_PREFIX};
use crate::error::{ResizeError, Result};
use crate::formats::determine_output_format;
use crate::inspect::{bytes_to_mib, file_size_bytes, read_dimensions};
use crate::utils::{
    calculate_reduction, copy_preserving_times, create_progress_spinner, write_atomically,
};
use crate::validation::validate_filename;
use crate::{error, info, verbose, warn};
use image::imageops::FilterType;
use image::DynamicImage;
use std::fs;
use std::path::Path;

/// What happened to one file that was processed successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeOutcome {
    pub filename: String,
    pub original_size: u64,
    pub final_size: u64,
    pub original_dimensions: Dimensions,
    pub final_dimensions: Dimensions,
    /// False when the image was already within bound and only re-encoded.
    pub resized: bool,
}

impl ResizeOutcome {
    /// Negative when re-encoding made the file larger.
    pub fn bytes_saved(&self) -> i64 {
        self.original_size as i64 - self.final_size as i64
    }

    pub fn reduction_percent(&self) -> f64 {
        calculate_reduction(self.original_size, self.final_size)
    }
}

/// Largest size with the same aspect ratio that fits inside `bound`.
///
/// Never scales up. When scaling, the limiting side lands exactly on the bound
/// and the other side is rounded to the nearest pixel, never below 1.
///
/// # Arguments
/// * `dimensions` - Current width and height of the image
/// * `bound` - Maximum width and height
///
/// # Returns
/// * `dimensions` unchanged when both sides already fit
/// * The scaled-down size otherwise
///
/// # Example
/// ```
/// use img_fit::{fit_within, Dimensions};
///
/// let bound = Dimensions::new(1920, 1920);
/// assert_eq!(fit_within(Dimensions::new(3840, 2160), bound), Dimensions::new(1920, 1080));
/// assert_eq!(fit_within(Dimensions::new(800, 600), bound), Dimensions::new(800, 600));
/// ```
pub fn fit_within(dimensions: Dimensions, bound: Dimensions) -> Dimensions {
    if !dimensions.exceeds(bound) || dimensions.width == 0 || dimensions.height == 0 {
        return dimensions;
    }

    let (w, h) = (dimensions.width as u64, dimensions.height as u64);
    let (bw, bh) = (bound.width as u64, bound.height as u64);

    // w / h >= bw / bh means width is the limiting side.
    if w * bh >= h * bw {
        let height = ((h * bw + w / 2) / w).clamp(1, bh);
        Dimensions::new(bound.width, height as u32)
    } else {
        let width = ((w * bh + h / 2) / h).clamp(1, bw);
        Dimensions::new(width as u32, bound.height)
    }
}

/// Shrinks `img` in place to fit `bound` with a Lanczos3 filter.
///
/// Returns whether a resize happened.
pub fn resize_image(img: &mut DynamicImage, bound: Dimensions) -> bool {
    let current = Dimensions::new(img.width(), img.height());
    let target = fit_within(current, bound);
    if target == current {
        return false;
    }

    verbose!("Resizing {} -> {}", current, target);
    *img = img.resize_exact(target.width, target.height, FilterType::Lanczos3);
    true
}

/// Backs up, resizes and re-encodes `filename` in place using the standard codec.
///
/// See [`process_one_with`].
pub fn process_one(config: &ResizeConfig, filename: &str) -> Result<ResizeOutcome> {
    process_one_with(config, filename, &StandardCodec)
}

/// Backs up, resizes and re-encodes one file in the source directory.
///
/// The original is copied to the backup directory before the source is
/// touched. If decoding, resizing, encoding or the post-write check fails, the
/// source is restored from that backup and the error is returned. A missing
/// file is reported and skipped without creating a backup.
///
/// # Arguments
/// * `config` - Source and backup directories, bound and encode settings
/// * `filename` - Bare file name inside the source directory
/// * `codec` - Decoder and encoder used for the image data
///
/// # Returns
/// * `Ok(ResizeOutcome)` - Sizes and dimensions before and after
/// * `Err(ResizeError)` - The file was skipped or rolled back
///
/// # Errors
/// * `ResizeError::InvalidFileName` - `filename` is not a bare file name
/// * `ResizeError::FileNotFound` - nothing to process, nothing was written
/// * `ResizeError::BackupFailed` - the source was left untouched
/// * any decode, encode or I/O error after the backup, with the source rolled back
pub fn process_one_with<C>(config: &ResizeConfig, filename: &str, codec: &C) -> Result<ResizeOutcome>
where
    C: ImageCodec + ?Sized,
{
    if let Err(e) = validate_filename(filename) {
        error!("Skipping {}", e);
        return Err(e);
    }

    let source = config.source_path(filename);
    if !source.is_file() {
        warn!("File not found: {}", filename);
        return Err(ResizeError::FileNotFound(source));
    }

    let original_size = file_size_bytes(&source)?;
    info!("\n{} Processing: {}", PROCESSING_PREFIX, filename);
    info!("   Original size: {:.2} MB", bytes_to_mib(original_size));

    let backup = config.backup_path(filename);
    if let Err(e) = copy_preserving_times(&source, &backup) {
        let e = ResizeError::BackupFailed(backup, e);
        error!("Error processing {}: {}", filename, e);
        return Err(e);
    }
    info!("   {} Backed up to: {}", SUCCESS_PREFIX, backup.display());

    match transform(config, filename, &source, original_size, codec) {
        Ok(outcome) => {
            report(&outcome);
            Ok(outcome)
        }
        Err(e) => {
            error!("Error processing {}: {}", filename, e);
            rollback(&backup, &source);
            Err(e)
        }
    }
}

fn transform<C>(
    config: &ResizeConfig,
    filename: &str,
    source: &Path,
    original_size: u64,
    codec: &C,
) -> Result<ResizeOutcome>
where
    C: ImageCodec + ?Sized,
{
    let format = determine_output_format(source)?;
    let permissions = fs::metadata(source)?.permissions();

    let mut img = codec.decode(source)?;
    let original_dimensions = Dimensions::new(img.width(), img.height());
    info!("   Original dimensions: {}", original_dimensions);

    let resized = resize_image(&mut img, config.bound);
    if !resized {
        info!("   {} No resize needed - dimensions within limit", INFO_PREFIX);
    }

    let spinner = create_progress_spinner(&format!("Encoding {} as {}...", filename, format));
    let encoded = codec.encode(&img, source, format, &config.encode);
    spinner.finish_and_clear();
    let encoded = encoded?;
    // Release the pixel buffer before touching the disk again.
    drop(img);

    write_atomically(source, &encoded, Some(permissions))?;
    verbose!("Wrote {} bytes to {}", encoded.len(), source.display());

    Ok(ResizeOutcome {
        filename: filename.to_string(),
        original_size,
        final_size: file_size_bytes(source)?,
        original_dimensions,
        final_dimensions: read_dimensions(source)?,
        resized,
    })
}

fn report(outcome: &ResizeOutcome) {
    let final_mib = bytes_to_mib(outcome.final_size);

    if outcome.resized {
        info!("   {} Resized to: {:.2} MB", SUCCESS_PREFIX, final_mib);
        info!("   {} New dimensions: {}", SUCCESS_PREFIX, outcome.final_dimensions);
        info!(
            "   {} Saved: {:.2} MB ({:.1}% reduction)",
            SAVED_PREFIX,
            bytes_to_mib(outcome.original_size) - final_mib,
            outcome.reduction_percent()
        );
    } else if outcome.final_size < outcome.original_size {
        info!("   {} Optimized to: {:.2} MB", SUCCESS_PREFIX, final_mib);
    }
}

/// Puts the backup back over the source. The backup itself is always kept.
fn rollback(backup: &Path, source: &Path) {
    if !backup.is_file() {
        return;
    }

    match copy_preserving_times(backup, source) {
        Ok(()) => {
            info!("   ↩️  Restored original from {}", backup.display());
        }
        Err(e) => {
            error!(
                "Failed to restore {} from {}: {}",
                source.display(),
                backup.display(),
                e
            );
        }
    }
}
