//! Provisioning request types.
//!
//! Pure data. No I/O, no async.

use std::fmt;
use std::path::{Path, PathBuf};

/// File name of the downloaded installer inside the target directory.
pub const ARTIFACT_FILE_NAME: &str = "agentInstaller.msi";

/// Installer authentication token.
///
/// `Debug` never prints the value and there is no `Display`. The raw string is
/// only reachable through [`AuthToken::expose_secret`].
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw token. Callers must not log or print the result.
    #[must_use]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

/// Caller-supplied input for one provisioning run. Immutable once built.
#[derive(Debug, Clone)]
pub struct ProvisioningRequest {
    pub source_url: String,
    pub target_directory: PathBuf,
    pub auth_token: AuthToken,
}

impl ProvisioningRequest {
    #[must_use]
    pub fn new(
        source_url: impl Into<String>,
        target_directory: impl Into<PathBuf>,
        auth_token: AuthToken,
    ) -> Self {
        Self {
            source_url: source_url.into(),
            target_directory: target_directory.into(),
            auth_token,
        }
    }
}

/// A request that passed every validation check.
///
/// Only the validator constructs this type, so holding one is proof that the
/// URL scheme, token shape and target directory were all accepted.
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    source_url: String,
    target_directory: PathBuf,
    auth_token: AuthToken,
    artifact_path: PathBuf,
}

impl ValidatedRequest {
    /// `target_directory` must already be absolute.
    pub(crate) fn new(source_url: String, target_directory: PathBuf, auth_token: AuthToken) -> Self {
        let artifact_path = artifact_path(&target_directory);
        Self {
            source_url,
            target_directory,
            auth_token,
            artifact_path,
        }
    }

    #[must_use]
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Absolute target directory.
    #[must_use]
    pub fn target_directory(&self) -> &Path {
        &self.target_directory
    }

    #[must_use]
    pub fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    /// Fixed download destination, `<target_directory>/agentInstaller.msi`.
    #[must_use]
    pub fn artifact_path(&self) -> &Path {
        &self.artifact_path
    }
}

/// Deterministic artifact location for a target directory.
#[must_use]
pub fn artifact_path(target_directory: &Path) -> PathBuf {
    target_directory.join(ARTIFACT_FILE_NAME)
}
