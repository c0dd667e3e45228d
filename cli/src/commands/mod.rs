//! Command implementations

pub mod check;
pub mod config;
pub mod install;
pub mod version;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::domain::{AuthToken, ProvisioningRequest};

/// Inputs shared by `install` and `check`.
///
/// Each value falls back to its environment variable, then to an
/// interactive prompt when the session allows one.
#[derive(Args)]
pub struct RequestArgs {
    /// URL of the installer package (http:// or https://)
    #[arg(long, env = "AGENTPROV_URL")]
    pub url: Option<String>,

    /// Directory that receives the installer and the agent configuration
    #[arg(long, alias = "target_directory", env = "AGENTPROV_TARGET_DIRECTORY")]
    pub target_directory: Option<PathBuf>,

    /// Installer authentication token (<region>:<uuid>)
    #[arg(long, env = "AGENTPROV_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

impl RequestArgs {
    /// Fill in missing values and build the request.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is missing and cannot be prompted for.
    pub fn resolve(self, app: &AppContext) -> Result<ProvisioningRequest> {
        let url = match self.url {
            Some(url) => url,
            None => require(app, "--url", "AGENTPROV_URL", "Installer URL", false)?,
        };
        let target_directory = match self.target_directory {
            Some(dir) => dir,
            None => PathBuf::from(require(
                app,
                "--target-directory",
                "AGENTPROV_TARGET_DIRECTORY",
                "Target directory",
                false,
            )?),
        };
        let token = match self.token {
            Some(token) => token,
            None => require(app, "--token", "AGENTPROV_TOKEN", "Installer token", true)?,
        };

        Ok(ProvisioningRequest::new(
            url,
            target_directory,
            AuthToken::new(token),
        ))
    }
}

fn require(app: &AppContext, flag: &str, env: &str, prompt: &str, secret: bool) -> Result<String> {
    if app.non_interactive {
        anyhow::bail!("missing {flag} (or set {env})");
    }
    app.prompt(prompt, secret)
}
