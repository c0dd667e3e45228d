//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags};
use crate::commands;
use crate::domain::ProvisioningError;

/// Download and install a monitoring agent, unattended
#[derive(Parser)]
#[command(
    name = "agentprov",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Never prompt for missing values
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Configuration file [default: ~/.agentprov/config.yaml]
    #[arg(long, global = true, env = "AGENTPROV_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate inputs, download the installer and run it
    Install(commands::install::InstallArgs),

    /// Validate inputs only (no download, no install)
    Check(commands::RequestArgs),

    /// Show the effective configuration
    Config,

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or the command
    /// fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            json,
            quiet,
            no_color,
            yes,
            config,
            command,
        } = self;

        if matches!(command, Command::Version) {
            commands::version::run(json);
            return Ok(());
        }

        let app = AppContext::new(&AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            behaviour: BehaviourFlags { yes, config },
        })?;

        match command {
            Command::Install(args) => commands::install::run(args, &app).await,
            Command::Check(args) => commands::check::run(args, &app),
            Command::Config => commands::config::run(&app),
            Command::Version => Ok(()),
        }
    }
}

/// Process exit code and machine-readable reason for a failed command.
///
/// Provisioning failures map to their category code; everything else
/// (bad config, missing input, prompt failure) is `1` / `"error"`.
#[must_use]
pub fn failure_code(err: &anyhow::Error) -> (i32, &'static str) {
    match err.downcast_ref::<ProvisioningError>() {
        Some(p) => (p.exit_code(), p.reason_code()),
        None => (1, "error"),
    }
}
