//! Domain types and validators for agentprov configuration.
//!
//! Pure functions only. No I/O, no async, no filesystem access.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.agentprov/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AgentProvConfig {
    /// Artifact download settings.
    pub download: DownloadSettings,
    /// Installer invocation settings.
    pub installer: InstallerSettings,
}

/// HTTP transfer bounds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DownloadSettings {
    /// Seconds allowed to establish the connection.
    pub connect_timeout_secs: u64,
    /// Seconds allowed between reads of the response.
    pub read_timeout_secs: u64,
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
            read_timeout_secs: 60,
        }
    }
}

impl DownloadSettings {
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    #[must_use]
    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}

/// Platform installer invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InstallerSettings {
    /// Installer executable, resolved through `PATH` when not absolute.
    pub program: String,
    /// Verbose log file written by the installer itself.
    pub log_file: PathBuf,
}

impl Default for InstallerSettings {
    fn default() -> Self {
        Self {
            program: "msiexec".to_string(),
            log_file: PathBuf::from("agent_install.log"),
        }
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a loaded configuration.
///
/// # Errors
///
/// Returns an error if a timeout is zero or the installer program is empty.
pub fn validate_config(config: &AgentProvConfig) -> Result<(), ConfigError> {
    if config.download.connect_timeout_secs == 0 {
        return Err(ConfigError::ZeroTimeout {
            key: "download.connect_timeout_secs",
        });
    }
    if config.download.read_timeout_secs == 0 {
        return Err(ConfigError::ZeroTimeout {
            key: "download.read_timeout_secs",
        });
    }
    if config.installer.program.trim().is_empty() {
        return Err(ConfigError::EmptyProgram);
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
