//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution.

use std::ffi::OsString;
use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result};

use crate::application::ports::CommandRunner;

/// Production `CommandRunner`. Spawns the program with null stdio and waits
/// for it without a timeout.
///
/// The child is never killed from here, even if the waiting future is dropped.
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run_status(&self, program: &str, args: &[OsString]) -> Result<ExitStatus> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(false)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        child
            .wait()
            .await
            .with_context(|| format!("waiting for {program}"))
    }
}
