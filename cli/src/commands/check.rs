//! `agentprov check`: validate inputs without downloading anything.

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::validate::validate;
use crate::commands::RequestArgs;
use crate::domain::ProvisioningError;
use crate::infra::fs::LocalFs;
use crate::output::json;

/// Run the check command.
///
/// # Errors
///
/// Returns a [`ProvisioningError::Validation`] for invalid inputs, or an
/// error if an input is missing.
pub fn run(args: RequestArgs, app: &AppContext) -> Result<()> {
    let request = args.resolve(app)?;
    let valid = validate(request, &LocalFs).map_err(ProvisioningError::from)?;

    if app.is_json() {
        println!("{}", json::format_valid(&valid)?);
    } else {
        app.output.success("Inputs are valid.");
        app.output
            .kv("Target directory", &valid.target_directory().display().to_string());
        app.output
            .kv("Installer path  ", &valid.artifact_path().display().to_string());
    }
    Ok(())
}
