use std::path::Path;
use thiserror::Error;
use tracing::warn;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory not found: {0}")]
    SourceNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),
}

/// List the leaf names of the regular files directly inside `dir`.
///
/// Non-recursive. Subdirectories (and symlinks resolving to directories) are
/// skipped silently; entries that cannot be read are skipped with a warning.
/// The order is whatever the filesystem reports.
pub fn list_files(dir: &Path) -> Result<Vec<String>, ScanError> {
    if !dir.exists() {
        return Err(ScanError::SourceNotFound(dir.display().to_string()));
    }
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.display().to_string()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable directory entry: {}", err);
                continue;
            }
        };
        if entry.file_type().is_file() {
            files.push(entry.file_name().to_string_lossy().to_string());
        }
    }

    Ok(files)
}
