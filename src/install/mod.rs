use crate::manifest::Manifest;
use crate::utils::hash_file;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum InstallError {
    #[error("Failed to read '{filename}': {source}")]
    FileUnreadable {
        filename: String,
        source: std::io::Error,
    },

    #[error("Failed to copy '{filename}': {source}")]
    CopyFailed {
        filename: String,
        source: std::io::Error,
    },
}

/// Per-file result of a verify-and-copy pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Verified and copied into an empty destination slot
    Copied,
    /// The destination already holds a file with the expected digest
    SkippedAlreadyValid,
    /// The destination held a mismatched file and force replaced it
    OverwrittenForced,
    /// The filename is not part of the manifest; nothing to verify
    SkippedUnknownName,
    /// A digest disagreed with the manifest and no overwrite was allowed
    SkippedHashMismatch,
}

impl CopyOutcome {
    /// Whether this outcome wrote a new file into the destination
    pub fn copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied | CopyOutcome::OverwrittenForced)
    }
}

/// Verify a single source file against the manifest and copy it into the
/// destination when it matches.
///
/// A source file whose digest disagrees with the manifest is never copied,
/// force or not; `force` only allows replacing an existing destination file
/// whose digest turned out wrong.
pub fn install_file(
    source_dir: &Path,
    dest_dir: &Path,
    filename: &str,
    manifest: &Manifest,
    force: bool,
) -> Result<CopyOutcome, InstallError> {
    // Don't spend time on computing hashes of files that don't even match
    // by name.
    let expected = match manifest.get(filename) {
        Some(digest) => digest,
        None => return Ok(CopyOutcome::SkippedUnknownName),
    };

    let source_path = source_dir.join(filename);
    let actual = hash_file(&source_path).map_err(|source| InstallError::FileUnreadable {
        filename: filename.to_string(),
        source,
    })?;

    if actual != expected {
        debug!("Unexpected digest for source file '{}', not copying", filename);
        return Ok(CopyOutcome::SkippedHashMismatch);
    }
    debug!("Found a good hash for {}", filename);

    copy_file(source_dir, dest_dir, filename, expected, force)
}

/// Copy a verified file into the destination, honoring the overwrite policy
fn copy_file(
    source_dir: &Path,
    dest_dir: &Path,
    filename: &str,
    expected: &str,
    force: bool,
) -> Result<CopyOutcome, InstallError> {
    let source_path = source_dir.join(filename);
    let dest_path = dest_dir.join(filename);

    if !dest_dir.exists() {
        fs::create_dir_all(dest_dir).map_err(|source| InstallError::CopyFailed {
            filename: filename.to_string(),
            source,
        })?;
    }

    if !dest_path.exists() {
        fs::copy(&source_path, &dest_path).map_err(|source| InstallError::CopyFailed {
            filename: filename.to_string(),
            source,
        })?;
        debug!(
            "File '{}' copied successfully from {} to {}",
            filename,
            source_dir.display(),
            dest_dir.display()
        );
        return Ok(CopyOutcome::Copied);
    }

    // The slot is taken; check whether the existing file is already the one
    // the manifest wants before considering an overwrite.
    let existing = hash_file(&dest_path).map_err(|source| InstallError::FileUnreadable {
        filename: filename.to_string(),
        source,
    })?;

    if existing == expected {
        debug!("File '{}' already exists", filename);
        return Ok(CopyOutcome::SkippedAlreadyValid);
    }

    if force {
        debug!(
            "Found unexpected hash for {} (force set, overwriting existing file)",
            dest_path.display()
        );
        fs::copy(&source_path, &dest_path).map_err(|source| InstallError::CopyFailed {
            filename: filename.to_string(),
            source,
        })?;
        return Ok(CopyOutcome::OverwrittenForced);
    }

    Ok(CopyOutcome::SkippedHashMismatch)
}
