//! Shared test helpers: recording port implementations and constructors.

#![allow(dead_code)]

use std::cell::RefCell;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use anyhow::Result;
use agentprov_cli::application::ports::{
    ArtifactFetcher, CommandRunner, DirectoryInspector, ProgressReporter,
};
use agentprov_cli::domain::{
    ArtifactHandle, AuthToken, DirectoryState, FetchError, ProvisioningRequest,
};

pub const VALID_URL: &str = "https://example.test/agentInstaller.msi";
pub const VALID_TOKEN: &str = "us:0123abcd-4567-89ef-ABCD-0123456789ab";

// ── Cross-platform ExitStatus construction ───────────────────────────────────

/// Build an `ExitStatus` from a logical exit code (0 = success, non-zero = failure).
///
/// On Unix the raw wait-status encodes the exit code in bits 8–15, so we shift.
/// On Windows `ExitStatusExt::from_raw` takes the exit code directly.
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

pub fn request(url: &str, dir: impl Into<PathBuf>, token: &str) -> ProvisioningRequest {
    ProvisioningRequest::new(url, dir, AuthToken::new(token))
}

// ── Directory inspector ──────────────────────────────────────────────────────

/// Reports a fixed state for every path; `absolutize` is the identity.
pub struct FakeDir(pub DirectoryState);

impl DirectoryInspector for FakeDir {
    fn absolutize(&self, path: &Path) -> std::io::Result<PathBuf> {
        Ok(path.to_path_buf())
    }

    fn inspect(&self, _: &Path) -> DirectoryState {
        self.0
    }
}

// ── Fetcher ──────────────────────────────────────────────────────────────────

/// What a `RecordingFetcher` should do when called.
pub enum FetchBehaviour {
    /// Succeed with the given byte count.
    Ok(u64),
    /// Fail with the given HTTP status.
    Status(u16),
    /// Fail with a transport error.
    Transport(&'static str),
}

/// Records every `(url, destination)` pair it is asked to fetch.
pub struct RecordingFetcher {
    behaviour: FetchBehaviour,
    pub calls: RefCell<Vec<(String, PathBuf)>>,
}

impl RecordingFetcher {
    pub fn new(behaviour: FetchBehaviour) -> Self {
        Self {
            behaviour,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl ArtifactFetcher for RecordingFetcher {
    async fn fetch(&self, url: &str, destination: &Path) -> Result<ArtifactHandle, FetchError> {
        self.calls
            .borrow_mut()
            .push((url.to_string(), destination.to_path_buf()));
        match self.behaviour {
            FetchBehaviour::Ok(bytes) => Ok(ArtifactHandle {
                local_path: destination.to_path_buf(),
                byte_count: bytes,
                sha256: "0".repeat(64),
            }),
            FetchBehaviour::Status(code) => Err(FetchError::HttpStatus(code)),
            FetchBehaviour::Transport(msg) => Err(FetchError::TransportFailed(msg.to_string())),
        }
    }
}

// ── Command runner ───────────────────────────────────────────────────────────

/// Records every invocation and returns a fixed exit code, or fails to spawn
/// when `exit_code` is `None`.
pub struct RecordingRunner {
    exit_code: Option<i32>,
    pub calls: RefCell<Vec<(String, Vec<OsString>)>>,
}

impl RecordingRunner {
    pub fn exiting(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn unspawnable() -> Self {
        Self {
            exit_code: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Arguments of the only recorded call, lossily stringified.
    pub fn only_args(&self) -> Vec<String> {
        let calls = self.calls.borrow();
        assert_eq!(calls.len(), 1, "expected exactly one installer run");
        calls[0]
            .1
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    async fn run_status(&self, program: &str, args: &[OsString]) -> Result<ExitStatus> {
        self.calls
            .borrow_mut()
            .push((program.to_string(), args.to_vec()));
        match self.exit_code {
            Some(code) => Ok(exit_status(code)),
            None => anyhow::bail!("No such file or directory (os error 2)"),
        }
    }
}

// ── Reporter ─────────────────────────────────────────────────────────────────

/// Collects every progress message, prefixed by its kind.
#[derive(Default)]
pub struct RecordingReporter {
    pub messages: RefCell<Vec<String>>,
}

impl RecordingReporter {
    pub fn joined(&self) -> String {
        self.messages.borrow().join("\n")
    }
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.messages.borrow_mut().push(format!("step: {message}"));
    }

    fn success(&self, message: &str) {
        self.messages.borrow_mut().push(format!("success: {message}"));
    }

    fn warn(&self, message: &str) {
        self.messages.borrow_mut().push(format!("warn: {message}"));
    }
}
