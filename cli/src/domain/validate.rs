//! Pure request validation. No I/O, no async.
//!
//! The directory check only interprets a [`DirectoryState`]; probing the
//! filesystem is the job of the `DirectoryInspector` port.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::ValidationError;
use crate::domain::request::AuthToken;

/// Accepted transfer schemes, matched as case-sensitive prefixes.
pub const ACCEPTED_SCHEMES: &[&str] = &["http://", "https://"];

/// Cheap pre-filter applied before the full token pattern.
pub const MIN_TOKEN_LEN: usize = 10;

/// `<region>:<uuid>`: two lowercase letters, a colon, then 8-4-4-4-12 hex.
pub static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: this is a compile-time constant pattern, cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(
        r"^[a-z]{2}:[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
    )
    .expect("valid regex")
});

/// What directory inspection found at the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryState {
    /// Nothing there, or something that is not a directory.
    Missing,
    /// A directory the current process cannot write to.
    ReadOnly,
    /// A directory the current process can write to.
    Writable,
}

/// # Errors
///
/// Returns `BadUrlScheme` unless `url` starts with `http://` or `https://`.
pub fn check_url_scheme(url: &str) -> Result<(), ValidationError> {
    if ACCEPTED_SCHEMES.iter().any(|s| url.starts_with(s)) {
        Ok(())
    } else {
        Err(ValidationError::BadUrlScheme(url.to_string()))
    }
}

/// # Errors
///
/// Returns `BadTokenFormat` if the token is shorter than [`MIN_TOKEN_LEN`] or
/// does not match [`TOKEN_RE`].
pub fn check_token_format(token: &AuthToken) -> Result<(), ValidationError> {
    let raw = token.expose_secret();
    if raw.len() < MIN_TOKEN_LEN || !TOKEN_RE.is_match(raw) {
        return Err(ValidationError::BadTokenFormat);
    }
    Ok(())
}

/// # Errors
///
/// Returns `TargetDirectoryMissing` or `TargetDirectoryNotWritable` for the
/// corresponding inspection result.
pub fn check_directory_state(path: &Path, state: DirectoryState) -> Result<(), ValidationError> {
    match state {
        DirectoryState::Writable => Ok(()),
        DirectoryState::ReadOnly => Err(ValidationError::TargetDirectoryNotWritable(
            path.to_path_buf(),
        )),
        DirectoryState::Missing => Err(ValidationError::TargetDirectoryMissing(path.to_path_buf())),
    }
}
