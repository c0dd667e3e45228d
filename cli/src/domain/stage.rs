//! Provisioning run state machine and its success report.
//!
//! `Start → Validating → Fetching → Installing → Done`, with `Failed`
//! reachable from every non-terminal stage. No stage is revisited.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::artifact::{ArtifactHandle, InstallOutcome};

/// Stages of one provisioning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProvisioningStage {
    Start,
    Validating,
    Fetching,
    Installing,
    Done,
    Failed,
}

impl ProvisioningStage {
    /// `true` for `Done` and `Failed`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Stage reached when the current one completes successfully.
    #[must_use]
    pub fn on_success(self) -> Option<Self> {
        match self {
            Self::Start => Some(Self::Validating),
            Self::Validating => Some(Self::Fetching),
            Self::Fetching => Some(Self::Installing),
            Self::Installing => Some(Self::Done),
            Self::Done | Self::Failed => None,
        }
    }

    /// Whether `self → next` is a legal transition.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        if next == Self::Failed {
            return !self.is_terminal();
        }
        self.on_success() == Some(next)
    }
}

/// Facts about a run that reached `Done`.
#[derive(Debug, Clone, Serialize)]
pub struct ProvisioningReport {
    /// Absolute target directory the installer was configured with.
    pub target_directory: PathBuf,
    pub artifact: ArtifactHandle,
    pub install: InstallOutcome,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}
