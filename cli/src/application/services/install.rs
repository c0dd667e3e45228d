//! Application service: installer invocation use-case.
//!
//! Builds the fixed [`InstallCommand`] and runs it through the injected
//! [`CommandRunner`], waiting for the installer to exit.

use std::path::Path;

use crate::application::ports::CommandRunner;
use crate::domain::artifact::InstallOutcome;
use crate::domain::config::InstallerSettings;
use crate::domain::error::InstallError;
use crate::domain::install::InstallCommand;
use crate::domain::request::AuthToken;

/// Exit code reported when the installer was terminated without one.
pub const NO_EXIT_CODE: i32 = -1;

/// Runs the platform installer non-interactively.
pub struct InstallInvoker<'a, C> {
    runner: &'a C,
    settings: &'a InstallerSettings,
}

impl<'a, C: CommandRunner> InstallInvoker<'a, C> {
    #[must_use]
    pub fn new(runner: &'a C, settings: &'a InstallerSettings) -> Self {
        Self { runner, settings }
    }

    /// Install `artifact`, configuring the agent for `target_directory`.
    ///
    /// # Errors
    ///
    /// Returns `SpawnFailed` if the installer cannot be started and
    /// `NonZeroExit` if it exits with anything but 0.
    pub async fn install(
        &self,
        artifact: &Path,
        target_directory: &Path,
        token: &AuthToken,
    ) -> Result<InstallOutcome, InstallError> {
        let command = InstallCommand::new(self.settings, artifact, target_directory, token);
        tracing::debug!(
            program = command.program(),
            args = ?command.redacted_args(),
            "starting installer"
        );

        let status = self
            .runner
            .run_status(command.program(), command.args())
            .await
            .map_err(|e| InstallError::SpawnFailed {
                program: command.program().to_string(),
                reason: format!("{e:#}"),
            })?;

        let outcome = InstallOutcome::from_code(status.code().unwrap_or(NO_EXIT_CODE));
        tracing::debug!(exit_code = outcome.exit_code, "installer exited");
        if outcome.succeeded {
            Ok(outcome)
        } else {
            Err(InstallError::NonZeroExit(outcome.exit_code))
        }
    }
}
