//! JSON output helpers.
//!
//! Every `--json` code path prints exactly one pretty-printed object on
//! stdout.

use anyhow::{Context, Result};

use crate::domain::{ProvisioningReport, ValidatedRequest};

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Format the result of a completed `install`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_report(report: &ProvisioningReport) -> Result<String> {
    let obj = serde_json::json!({
        "status": "installed",
        "target_directory": report.target_directory,
        "artifact": report.artifact.local_path,
        "bytes": report.artifact.byte_count,
        "sha256": report.artifact.sha256,
        "exit_code": report.install.exit_code,
        "started_at": report.started_at,
        "finished_at": report.finished_at,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Format the result of a successful `check`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_valid(request: &ValidatedRequest) -> Result<String> {
    let obj = serde_json::json!({
        "status": "valid",
        "target_directory": request.target_directory(),
        "artifact": request.artifact_path(),
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}
