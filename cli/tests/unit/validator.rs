//! Validation against the real filesystem.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use agentprov_cli::application::services::validate::validate;
use agentprov_cli::domain::ValidationError;
use agentprov_cli::infra::fs::LocalFs;
use tempfile::TempDir;

use crate::helpers::{VALID_TOKEN, VALID_URL, request};

#[test]
fn test_existing_writable_directory_is_valid() {
    let dir = TempDir::new().unwrap();

    let valid = validate(request(VALID_URL, dir.path(), VALID_TOKEN), &LocalFs).expect("valid");

    assert_eq!(valid.target_directory(), dir.path());
    assert_eq!(valid.artifact_path(), dir.path().join("agentInstaller.msi"));
    assert_eq!(valid.source_url(), VALID_URL);
}

#[test]
fn test_validation_does_not_create_files() {
    let dir = TempDir::new().unwrap();

    validate(request(VALID_URL, dir.path(), VALID_TOKEN), &LocalFs).expect("valid");

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_nonexistent_directory_is_missing() {
    let dir = TempDir::new().unwrap();
    let gone = dir.path().join("no").join("such").join("dir");

    let err = validate(request(VALID_URL, &gone, VALID_TOKEN), &LocalFs).unwrap_err();

    assert_eq!(err, ValidationError::TargetDirectoryMissing(gone));
}

#[test]
fn test_regular_file_is_missing() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("not-a-dir");
    std::fs::write(&file, b"x").unwrap();

    let err = validate(request(VALID_URL, &file, VALID_TOKEN), &LocalFs).unwrap_err();

    assert!(matches!(err, ValidationError::TargetDirectoryMissing(_)));
}

#[test]
fn test_relative_directory_is_made_absolute() {
    let valid = validate(request(VALID_URL, ".", VALID_TOKEN), &LocalFs).expect("valid");

    assert!(valid.target_directory().is_absolute());
    assert!(valid.artifact_path().is_absolute());
}

#[test]
fn test_token_checked_before_directory() {
    let err = validate(request(VALID_URL, "/no/such/dir", "short"), &LocalFs).unwrap_err();
    assert_eq!(err, ValidationError::BadTokenFormat);
}

#[test]
fn test_url_checked_before_token() {
    let err = validate(request("file:///etc/passwd", "/no/such/dir", "short"), &LocalFs)
        .unwrap_err();
    assert!(matches!(err, ValidationError::BadUrlScheme(_)));
}

#[cfg(unix)]
#[test]
fn test_read_only_directory_is_not_writable() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let ro = dir.path().join("ro");
    std::fs::create_dir(&ro).unwrap();
    std::fs::set_permissions(&ro, std::fs::Permissions::from_mode(0o555)).unwrap();

    let err = validate(request(VALID_URL, &ro, VALID_TOKEN), &LocalFs).unwrap_err();

    std::fs::set_permissions(&ro, std::fs::Permissions::from_mode(0o755)).unwrap();
    assert_eq!(err, ValidationError::TargetDirectoryNotWritable(ro));
}
