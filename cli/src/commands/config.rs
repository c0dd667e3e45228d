//! `agentprov config`: show the effective configuration.

use anyhow::{Context, Result};

use crate::app::AppContext;

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized.
pub fn run(app: &AppContext) -> Result<()> {
    if app.is_json() {
        let obj = serde_json::json!({
            "path": app.config_path,
            "config": app.config,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&obj).context("JSON serialization failed")?
        );
        return Ok(());
    }

    let yaml = serde_yaml::to_string(&app.config).context("YAML serialization failed")?;
    app.output
        .kv("Config file", &app.config_path.display().to_string());
    println!();
    print!("{yaml}");
    Ok(())
}
