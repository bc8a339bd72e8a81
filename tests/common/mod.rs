#![allow(dead_code)]

use romcheck::manifest::Manifest;
use romcheck::utils::compute_hash;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create a temporary directory for a test
pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write a file with the given content and return its SHA-256 digest
pub fn write_file(dir: &Path, name: &str, content: &[u8]) -> String {
    fs::write(dir.join(name), content).expect("Failed to write test file");
    compute_hash(content)
}

/// Build a manifest mapping each (filename, content) pair to the digest of
/// that content
pub fn manifest_for(entries: &[(&str, &[u8])]) -> Manifest {
    let mut manifest = Manifest::new();
    for (name, content) in entries {
        manifest.insert(name.to_string(), compute_hash(content));
    }
    manifest
}
