//! Application context: unified state passed to every command handler.
//!
//! Holds the output settings, the loaded configuration, and whether the
//! session may prompt the user. Nothing here is global: `Cli::run()` builds
//! one context and passes it down explicitly.

use std::io::IsTerminal as _;
use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::AgentProvConfig;
use crate::infra::config::YamlConfigStore;
use crate::output::{OutputContext, TerminalReporter};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Behaviour flags.
pub struct BehaviourFlags {
    /// Never prompt (also set by `CI` / `AGENTPROV_YES` env vars).
    pub yes: bool,
    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Behaviour options.
    pub behaviour: BehaviourFlags,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context. Quiet in JSON mode so stdout stays parseable.
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Effective configuration.
    pub config: AgentProvConfig,
    /// Where `config` was (or would have been) read from.
    pub config_path: PathBuf,
    /// When `true`, missing inputs are errors instead of prompts.
    ///
    /// Set when `--yes` / `-y` is passed, when the `CI` or `AGENTPROV_YES`
    /// environment variables are present, or when stdin is not a terminal.
    pub non_interactive: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be loaded.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let ci_env = std::env::var("CI").is_ok() || std::env::var("AGENTPROV_YES").is_ok();
        let non_interactive = flags.behaviour.yes || ci_env || !std::io::stdin().is_terminal();

        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        let store = YamlConfigStore::new(flags.behaviour.config.clone());
        let config = store.load()?;
        let config_path = store.path()?;

        Ok(Self {
            output: OutputContext::new(
                flags.output.no_color,
                flags.output.quiet || flags.output.json,
            ),
            mode,
            config,
            config_path,
            non_interactive,
        })
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Progress reporter bound to this context's output settings.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }

    /// Ask the user for a value. `secret` input is not echoed.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is non-interactive or the terminal
    /// prompt fails.
    pub fn prompt(&self, prompt: &str, secret: bool) -> Result<String> {
        anyhow::ensure!(!self.non_interactive, "cannot prompt in non-interactive mode");
        let value = if secret {
            dialoguer::Password::new().with_prompt(prompt).interact()?
        } else {
            dialoguer::Input::<String>::new()
                .with_prompt(prompt)
                .interact_text()?
        };
        Ok(value)
    }
}
