use crate::codec::{ImageCodec, StandardCodec};
use crate::config::ResizeConfig;
use crate::constants::{SEPARATOR_WIDTH, SUCCESS_PREFIX};
use crate::error::Result;
use crate::processing::{process_one_with, ResizeOutcome};
use crate::validation::{
    ensure_backup_directory, validate_backup_directory, validate_source_directory,
};
use crate::{error, info};
use std::env;

/// Per-file results of one batch, in list order.
#[derive(Debug)]
pub struct BatchSummary {
    pub results: Vec<(String, Result<ResizeOutcome>)>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn successes(&self) -> usize {
        self.results.iter().filter(|(_, r)| r.is_ok()).count()
    }

    pub fn outcomes(&self) -> impl Iterator<Item = &ResizeOutcome> {
        self.results.iter().filter_map(|(_, r)| r.as_ref().ok())
    }

    pub fn failed_files(&self) -> impl Iterator<Item = &str> {
        self.results
            .iter()
            .filter(|(_, r)| r.is_err())
            .map(|(name, _)| name.as_str())
    }
}

/// Processes every configured file with the standard codec.
///
/// See [`run_batch_with`].
pub fn run_batch(config: &ResizeConfig) -> Result<BatchSummary> {
    run_batch_with(config, &StandardCodec)
}

/// Processes every file in `config.files`, one after another.
///
/// Only a missing source directory, or a backup directory that is the source
/// directory, stops the run, and it does so before anything is written. Every per-file failure is contained in that file's
/// entry of the summary.
pub fn run_batch_with<C>(config: &ResizeConfig, codec: &C) -> Result<BatchSummary>
where
    C: ImageCodec + ?Sized,
{
    print_header(config);

    if let Err(e) = validate_source_directory(&config.source_dir) {
        error!("{}", e);
        return Err(e);
    }
    if let Err(e) = validate_backup_directory(&config.source_dir, &config.backup_dir) {
        error!("{}", e);
        return Err(e);
    }

    // Files still get processed, each failing its own backup step, so the
    // summary accounts for all of them.
    if let Err(e) = ensure_backup_directory(&config.backup_dir) {
        error!("{}", e);
    }

    let results = config
        .files
        .iter()
        .map(|filename| (filename.clone(), process_one_with(config, filename, codec)))
        .collect();
    let summary = BatchSummary { results };

    print_summary(config, &summary);
    Ok(summary)
}

fn print_header(config: &ResizeConfig) {
    info!("🔍 Image Resize");
    if let Ok(cwd) = env::current_dir() {
        info!("📁 Working directory: {}", cwd.display());
    }
    info!("🎯 Target directory: {}", config.source_dir.display());
    info!("📏 Maximum size: {} pixels", config.bound);
    info!("{}", "=".repeat(SEPARATOR_WIDTH));
}

fn print_summary(config: &ResizeConfig, summary: &BatchSummary) {
    info!("\n{}", "=".repeat(SEPARATOR_WIDTH));
    info!(
        "{} Completed! Processed {}/{} files",
        SUCCESS_PREFIX,
        summary.successes(),
        summary.total()
    );
    info!("📁 Original files backed up in: {}", config.backup_dir.display());
    info!("\n🔧 Next steps:");
    info!("1. Check the resized images in your app");
    info!("2. If everything looks good, commit the changes");
    info!("3. You can delete the backup folder later if needed");
}
