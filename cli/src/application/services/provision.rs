//! Application service: the provisioning pipeline.
//!
//! Validate → Fetch → Install, strictly in that order. The first failure
//! ends the run and is returned verbatim; nothing is retried or rolled back.
//! A failed install leaves the downloaded artifact in place so a re-run
//! simply overwrites it.

use chrono::Utc;

use crate::application::ports::{
    ArtifactFetcher, CommandRunner, DirectoryInspector, ProgressReporter,
};
use crate::application::services::install::InstallInvoker;
use crate::application::services::validate::validate;
use crate::domain::config::InstallerSettings;
use crate::domain::error::ProvisioningError;
use crate::domain::request::ProvisioningRequest;
use crate::domain::stage::{ProvisioningReport, ProvisioningStage};

/// Sequences validation, download and installation for one request.
pub struct ProvisioningOrchestrator<'a, D, F, C, R> {
    inspector: &'a D,
    fetcher: &'a F,
    runner: &'a C,
    reporter: &'a R,
    installer: &'a InstallerSettings,
}

impl<'a, D, F, C, R> ProvisioningOrchestrator<'a, D, F, C, R>
where
    D: DirectoryInspector,
    F: ArtifactFetcher,
    C: CommandRunner,
    R: ProgressReporter,
{
    #[must_use]
    pub fn new(
        inspector: &'a D,
        fetcher: &'a F,
        runner: &'a C,
        reporter: &'a R,
        installer: &'a InstallerSettings,
    ) -> Self {
        Self {
            inspector,
            fetcher,
            runner,
            reporter,
            installer,
        }
    }

    /// Run the pipeline to `Done` or to the first failure.
    ///
    /// # Errors
    ///
    /// Returns the validation, fetch, or install error that stopped the run.
    pub async fn run(
        &self,
        request: ProvisioningRequest,
    ) -> Result<ProvisioningReport, ProvisioningError> {
        let started_at = Utc::now();
        let mut run = Run::new();

        run.advance(ProvisioningStage::Validating);
        self.reporter.step("Validating inputs...");
        let request = validate(request, self.inspector).map_err(|e| run.fail(e))?;

        run.advance(ProvisioningStage::Fetching);
        self.reporter
            .step(&format!("Downloading installer from {}...", request.source_url()));
        let artifact = self
            .fetcher
            .fetch(request.source_url(), request.artifact_path())
            .await
            .map_err(|e| run.fail(e))?;
        self.reporter.success(&format!(
            "Downloaded {} bytes to {}",
            artifact.byte_count,
            artifact.local_path.display()
        ));

        run.advance(ProvisioningStage::Installing);
        self.reporter.step("Running installer...");
        let invoker = InstallInvoker::new(self.runner, self.installer);
        let install = invoker
            .install(
                &artifact.local_path,
                request.target_directory(),
                request.auth_token(),
            )
            .await
            .map_err(|e| {
                self.reporter.warn(&format!(
                    "Installer left at {} for inspection",
                    artifact.local_path.display()
                ));
                run.fail(e)
            })?;

        run.advance(ProvisioningStage::Done);
        self.reporter.success("Installation complete.");

        Ok(ProvisioningReport {
            target_directory: request.target_directory().to_path_buf(),
            artifact,
            install,
            started_at,
            finished_at: Utc::now(),
        })
    }
}

/// Tracks the current stage of one run and logs every transition.
struct Run {
    stage: ProvisioningStage,
}

impl Run {
    fn new() -> Self {
        Self {
            stage: ProvisioningStage::Start,
        }
    }

    fn advance(&mut self, next: ProvisioningStage) {
        debug_assert!(
            self.stage.can_transition_to(next),
            "illegal transition {:?} -> {next:?}",
            self.stage
        );
        tracing::info!(from = ?self.stage, to = ?next, "provisioning stage");
        self.stage = next;
    }

    fn fail(&mut self, error: impl Into<ProvisioningError>) -> ProvisioningError {
        let error = error.into();
        tracing::info!(
            stage = ?self.stage,
            reason = error.reason_code(),
            "provisioning failed"
        );
        self.advance(ProvisioningStage::Failed);
        error
    }
}
