//! Domain layer: pure types and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod artifact;
pub mod config;
pub mod error;
pub mod install;
pub mod request;
pub mod stage;
pub mod validate;

pub use artifact::{ArtifactHandle, InstallOutcome};
pub use config::{AgentProvConfig, DownloadSettings, InstallerSettings, validate_config};
pub use error::{ConfigError, FetchError, InstallError, ProvisioningError, ValidationError};
pub use install::InstallCommand;
pub use request::{ARTIFACT_FILE_NAME, AuthToken, ProvisioningRequest, ValidatedRequest};
pub use stage::{ProvisioningReport, ProvisioningStage};
pub use validate::DirectoryState;
