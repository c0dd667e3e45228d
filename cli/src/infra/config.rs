//! Infrastructure implementation of the `ConfigStore` port.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::config::{AgentProvConfig, validate_config};

/// Production implementation of `ConfigStore` that uses a YAML file on disk.
///
/// An explicit path (from `--config` / `AGENTPROV_CONFIG`) must exist; the
/// default `~/.agentprov/config.yaml` is optional.
pub struct YamlConfigStore {
    explicit: Option<PathBuf>,
}

impl YamlConfigStore {
    #[must_use]
    pub fn new(explicit: Option<PathBuf>) -> Self {
        Self { explicit }
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<AgentProvConfig> {
        let path = self.path()?;
        if !path.exists() {
            anyhow::ensure!(
                self.explicit.is_none(),
                "config file {} does not exist",
                path.display()
            );
            return Ok(AgentProvConfig::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let config: AgentProvConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("cannot parse {}", path.display()))?;
        validate_config(&config).with_context(|| format!("invalid {}", path.display()))?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    fn path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.explicit {
            return Ok(path.clone());
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(home.join(".agentprov").join("config.yaml"))
    }
}
