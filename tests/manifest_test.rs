mod common;

use common::create_test_dir;
use romcheck::manifest::{load_manifest, ManifestError};
use std::fs;

#[test]
fn test_load_parses_and_trims_fields() {
    let dir = create_test_dir();
    let path = dir.path().join("roms.sha256");
    fs::write(&path, "  abc123  *  a.zip  \ndef456*b.zip\n").expect("Should write manifest");

    let manifest = load_manifest(&path).expect("Should load manifest");

    assert_eq!(manifest.len(), 2);
    assert_eq!(manifest.get("a.zip"), Some("abc123"));
    assert_eq!(manifest.get("b.zip"), Some("def456"));
}

#[test]
fn test_load_splits_on_first_star_only() {
    let dir = create_test_dir();
    let path = dir.path().join("roms.sha256");
    fs::write(&path, "abc123*weird*name.zip\n").expect("Should write manifest");

    let manifest = load_manifest(&path).expect("Should load manifest");

    assert_eq!(manifest.get("weird*name.zip"), Some("abc123"));
}

#[test]
fn test_load_duplicate_filename_last_entry_wins() {
    let dir = create_test_dir();
    let path = dir.path().join("roms.sha256");
    fs::write(&path, "old*a.zip\nbbb*b.zip\nnew*a.zip\n").expect("Should write manifest");

    let manifest = load_manifest(&path).expect("Should load manifest");

    assert_eq!(manifest.len(), 2);
    assert_eq!(manifest.get("a.zip"), Some("new"));

    // The replaced entry keeps its original position
    let order: Vec<&str> = manifest.iter().map(|e| e.filename.as_str()).collect();
    assert_eq!(order, vec!["a.zip", "b.zip"]);
}

#[test]
fn test_load_malformed_line_fails_whole_load() {
    let dir = create_test_dir();
    let path = dir.path().join("roms.sha256");
    fs::write(&path, "abc123*a.zip\nthis line has no delimiter\n").expect("Should write manifest");

    let result = load_manifest(&path);
    assert!(matches!(result, Err(ManifestError::ParseError(2))));
}

#[test]
fn test_load_unreadable_manifest_is_error() {
    let dir = create_test_dir();
    let result = load_manifest(&dir.path().join("does-not-exist.sha256"));
    assert!(matches!(result, Err(ManifestError::ReadError(_))));
}
