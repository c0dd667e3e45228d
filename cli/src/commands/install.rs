//! `agentprov install`: validate, download and run the agent installer.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::provision::ProvisioningOrchestrator;
use crate::commands::RequestArgs;
use crate::domain::{ProvisioningReport, validate_config};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::fetch::HttpFetcher;
use crate::infra::fs::LocalFs;
use crate::output::{OutputContext, json};

/// Arguments for the install command.
#[derive(Args)]
pub struct InstallArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Installer program [default: msiexec]
    #[arg(long, env = "AGENTPROV_INSTALLER")]
    pub installer: Option<String>,
}

/// Run the install command.
///
/// # Errors
///
/// Returns a `ProvisioningError` for validation, download, or installer
/// failures, or an error if an input is missing.
pub async fn run(args: InstallArgs, app: &AppContext) -> Result<()> {
    let mut config = app.config.clone();
    if let Some(program) = args.installer {
        config.installer.program = program;
    }
    validate_config(&config)?;

    let request = args.request.resolve(app)?;

    let fetcher = HttpFetcher::new(&config.download, app.output.show_progress())?;
    let reporter = app.reporter();
    let orchestrator = ProvisioningOrchestrator::new(
        &LocalFs,
        &fetcher,
        &TokioCommandRunner,
        &reporter,
        &config.installer,
    );
    let report = orchestrator.run(request).await?;

    if app.is_json() {
        println!("{}", json::format_report(&report)?);
    } else {
        print_summary(&app.output, &report);
    }
    Ok(())
}

fn print_summary(ctx: &OutputContext, report: &ProvisioningReport) {
    let elapsed = report.finished_at - report.started_at;
    ctx.kv("Target directory", &report.target_directory.display().to_string());
    ctx.kv("Installer       ", &report.artifact.local_path.display().to_string());
    ctx.kv("SHA-256         ", &report.artifact.sha256);
    ctx.kv(
        "Elapsed         ",
        &format!("{}.{:03}s", elapsed.num_seconds(), elapsed.num_milliseconds() % 1000),
    );
}
