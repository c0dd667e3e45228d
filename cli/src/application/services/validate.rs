//! Application service: input validation use-case.
//!
//! Checks run in order and stop at the first failure: URL scheme, token
//! format, then target directory. Only the directory check touches the
//! filesystem, and only through the injected [`DirectoryInspector`].

use crate::application::ports::DirectoryInspector;
use crate::domain::error::ValidationError;
use crate::domain::request::{ProvisioningRequest, ValidatedRequest};
use crate::domain::validate::{check_directory_state, check_token_format, check_url_scheme};

/// `Valid(normalized request)` or `Invalid(reason)`.
pub type ValidationResult = Result<ValidatedRequest, ValidationError>;

/// Validate a provisioning request.
///
/// # Errors
///
/// Returns the first failing check as a [`ValidationError`].
pub fn validate(
    request: ProvisioningRequest,
    inspector: &impl DirectoryInspector,
) -> ValidationResult {
    let ProvisioningRequest {
        source_url,
        target_directory,
        auth_token,
    } = request;

    check_url_scheme(&source_url)?;
    check_token_format(&auth_token)?;

    let absolute = inspector
        .absolutize(&target_directory)
        .map_err(|_| ValidationError::TargetDirectoryMissing(target_directory.clone()))?;
    check_directory_state(&absolute, inspector.inspect(&absolute))?;

    tracing::debug!(
        url = %source_url,
        target_directory = %absolute.display(),
        "request validated"
    );
    Ok(ValidatedRequest::new(source_url, absolute, auth_token))
}
