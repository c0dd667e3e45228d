//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.
//!
//! None of the messages below interpolate the authentication token.

use std::path::PathBuf;

use thiserror::Error;

// ── Validation errors ─────────────────────────────────────────────────────────

/// Reasons a provisioning request is rejected before any network or process
/// activity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid URL: '{0}' must start with 'http://' or 'https://'.")]
    BadUrlScheme(String),

    #[error(
        "Invalid token format. Expected '<region>:XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX' (hex digits)."
    )]
    BadTokenFormat,

    #[error("Target directory '{}' does not exist or is not a directory.", .0.display())]
    TargetDirectoryMissing(PathBuf),

    #[error("Target directory '{}' is not writable.", .0.display())]
    TargetDirectoryNotWritable(PathBuf),
}

// ── Fetch errors ──────────────────────────────────────────────────────────────

/// Failures while streaming the installer artifact to disk.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Download failed: HTTP {0}")]
    HttpStatus(u16),

    #[error("Download interrupted: {0}")]
    TransportFailed(String),

    #[error("Cannot write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ── Install errors ────────────────────────────────────────────────────────────

/// Failures while running the platform installer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstallError {
    #[error("Cannot start installer '{program}': {reason}")]
    SpawnFailed { program: String, reason: String },

    #[error("Installer exited with code {0}")]
    NonZeroExit(i32),
}

// ── Pipeline errors ───────────────────────────────────────────────────────────

/// The first failure of a provisioning run, surfaced verbatim.
#[derive(Debug, Error)]
pub enum ProvisioningError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Install(#[from] InstallError),
}

impl ProvisioningError {
    /// Stable machine-readable reason, one per leaf variant.
    #[must_use]
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::Validation(ValidationError::BadUrlScheme(_)) => "bad_url_scheme",
            Self::Validation(ValidationError::BadTokenFormat) => "bad_token_format",
            Self::Validation(ValidationError::TargetDirectoryMissing(_)) => {
                "target_directory_missing"
            }
            Self::Validation(ValidationError::TargetDirectoryNotWritable(_)) => {
                "target_directory_not_writable"
            }
            Self::Fetch(FetchError::HttpStatus(_)) => "http_status",
            Self::Fetch(FetchError::TransportFailed(_)) => "transport_failed",
            Self::Fetch(FetchError::WriteFailed { .. }) => "write_failed",
            Self::Install(InstallError::SpawnFailed { .. }) => "spawn_failed",
            Self::Install(InstallError::NonZeroExit(_)) => "non_zero_exit",
        }
    }

    /// Process exit code used by the hosting CLI, one per failure category.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 3,
            Self::Fetch(_) => 4,
            Self::Install(_) => 5,
        }
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: must be greater than zero")]
    ZeroTimeout { key: &'static str },

    #[error("Invalid value for installer.program: must not be empty")]
    EmptyProgram,
}
