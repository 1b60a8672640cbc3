use crate::error::{ResizeError, Result};
use std::fs;
use std::path::{Component, Path};

/// The source directory must exist before anything else happens.
pub fn validate_source_directory(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(ResizeError::SourceDirectoryNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Creates the backup directory and any missing parents. Succeeds if it
/// already exists.
pub fn ensure_backup_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| ResizeError::DirectoryCreationFailed(path.to_path_buf(), e))
}

/// The backup directory must not resolve to the source directory, or every
/// backup would be the source file itself.
///
/// Both paths are canonicalized, so `images/.` or a symlink to `images` are
/// caught as well. A backup directory that does not exist cannot be the source.
pub fn validate_backup_directory(source: &Path, backup: &Path) -> Result<()> {
    let (Ok(source), Ok(backup)) = (fs::canonicalize(source), fs::canonicalize(backup)) else {
        return Ok(());
    };
    if source == backup {
        return Err(ResizeError::BackupDirectoryIsSource(backup));
    }
    Ok(())
}

/// Target names are joined onto both the source and backup directories, so
/// they have to be a single plain path component.
pub fn validate_filename(filename: &str) -> Result<()> {
    if filename.contains(['/', '\\']) {
        return Err(ResizeError::InvalidFileName(filename.to_string()));
    }

    let mut components = Path::new(filename).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name == filename => Ok(()),
        _ => Err(ResizeError::InvalidFileName(filename.to_string())),
    }
}
