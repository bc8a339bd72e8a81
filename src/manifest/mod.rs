mod types;

pub use types::{Manifest, ManifestEntry};

use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Malformed manifest entry at line {0}: no '*' delimiter")]
    ParseError(usize),
}

/// Load the files with hashes known to be good.
///
/// Each line has the form `<sha256_digest>*<filename>`. The split happens on
/// the first `*` only, so filenames containing further `*` characters
/// survive intact; both fields are trimmed. A later duplicate filename
/// silently replaces the earlier digest. Any line without a `*` aborts the
/// whole load, leaving no partial manifest behind.
pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let content = fs::read_to_string(path)?;

    let mut manifest = Manifest::new();
    for (number, line) in content.lines().enumerate() {
        let (digest, filename) = line
            .trim()
            .split_once('*')
            .ok_or(ManifestError::ParseError(number + 1))?;
        let (digest, filename) = (digest.trim(), filename.trim());

        if manifest.contains(filename) {
            debug!("Duplicate manifest entry for '{}', keeping the later digest", filename);
        }
        manifest.insert(filename.to_string(), digest.to_string());
    }

    Ok(manifest)
}
