//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use anyhow::Result;

use crate::domain::{AgentProvConfig, ArtifactHandle, DirectoryState, FetchError};

// ── Directory Inspector Port ──────────────────────────────────────────────────

/// Existence and permission checks for the target directory.
pub trait DirectoryInspector {
    /// Resolve `path` to an absolute path without requiring it to exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty or the working directory cannot
    /// be determined.
    fn absolutize(&self, path: &Path) -> std::io::Result<PathBuf>;

    /// Classify what is at `path`.
    fn inspect(&self, path: &Path) -> DirectoryState;
}

// ── Artifact Transfer Port ────────────────────────────────────────────────────

/// Streams a remote resource to a local file.
#[allow(async_fn_in_trait)]
pub trait ArtifactFetcher {
    /// Download `url` to `destination`.
    ///
    /// On success the file at `destination` is complete and closed. On
    /// failure no truncated file is left under `destination`.
    ///
    /// # Errors
    ///
    /// Returns `HttpStatus` for non-success responses, `TransportFailed` for
    /// network failures and `WriteFailed` for local I/O failures.
    async fn fetch(&self, url: &str, destination: &Path) -> Result<ArtifactHandle, FetchError>;
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program to completion with no stdin and return its exit status.
    ///
    /// No timeout is applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on.
    async fn run_status(&self, program: &str, args: &[OsString]) -> Result<ExitStatus>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts loading of the configuration file.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed, or
    /// validated, or if an explicitly named file is missing.
    fn load(&self) -> Result<AgentProvConfig>;

    /// Location the configuration is read from.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
