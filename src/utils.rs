//! Helpers shared by the transform unit and the batch runner.

use crate::constants::PROGRESS_SPINNER_TEMPLATE;
use crate::logger;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, FileTimes, Permissions};
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Percentage by which `new_size` is smaller than `original_size`.
///
/// Positive means reduction, negative means the file grew.
pub fn calculate_reduction(original_size: u64, new_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    (1.0 - new_size as f64 / original_size as f64) * 100.0
}

/// Spinner for the slow encode step. Hidden in quiet mode, and indicatif hides
/// it on its own when stderr is not a terminal.
pub fn create_progress_spinner(message: &str) -> ProgressBar {
    if logger::is_quiet() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template(PROGRESS_SPINNER_TEMPLATE) {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    // Drawn once, without a ticker thread.
    pb.tick();
    pb
}

/// Replaces `path` with `bytes` in a single rename.
///
/// The data goes to a temp file next to `path` first, so readers see either
/// the old content or the new content, never a partial write. The temp file
/// is removed on any error.
///
/// # Arguments
/// * `path` - File to create or replace
/// * `bytes` - New content
/// * `permissions` - Applied to the new file before it is renamed into place
pub fn write_atomically(path: &Path, bytes: &[u8], permissions: Option<Permissions>) -> io::Result<()> {
    let mut temp = NamedTempFile::new_in(parent_dir(path))?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;
    if let Some(permissions) = permissions {
        fs::set_permissions(temp.path(), permissions)?;
    }
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Copies `from` over `to` atomically, carrying over permissions and
/// modification time.
pub fn copy_preserving_times(from: &Path, to: &Path) -> io::Result<()> {
    let metadata = fs::metadata(from)?;
    let temp = NamedTempFile::new_in(parent_dir(to))?;
    // fs::copy also copies the permission bits.
    fs::copy(from, temp.path())?;

    let mut times = FileTimes::new().set_modified(metadata.modified()?);
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    fs::File::options()
        .write(true)
        .open(temp.path())?
        .set_times(times)?;

    temp.persist(to).map_err(|e| e.error)?;
    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
