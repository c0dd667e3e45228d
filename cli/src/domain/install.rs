//! The fixed, non-interactive installer invocation.
//!
//! Pure function of its inputs. Nothing here spawns processes.

use std::ffi::OsString;
use std::fmt;
use std::path::Path;

use crate::domain::config::InstallerSettings;
use crate::domain::request::AuthToken;

/// Installer property bound to the target directory.
pub const CONFIG_PATH_PROPERTY: &str = "CUSTOMCONFIGPATH";
/// Installer property bound to the authentication token.
pub const TOKEN_PROPERTY: &str = "CUSTOMTOKEN";
/// Placeholder used wherever the token would otherwise be logged.
pub const REDACTED: &str = "<redacted>";

/// Program plus argument vector for one installer run.
///
/// `args()` is the only place the token leaves [`AuthToken`]; log
/// `redacted_args()` instead.
pub struct InstallCommand {
    program: String,
    args: Vec<OsString>,
    token_index: usize,
}

impl InstallCommand {
    /// `<program> /i <artifact> /l*v <log> CUSTOMCONFIGPATH=<dir> CUSTOMTOKEN=<token> /quiet /qn`
    #[must_use]
    pub fn new(
        settings: &InstallerSettings,
        artifact: &Path,
        target_directory: &Path,
        token: &AuthToken,
    ) -> Self {
        let mut config_path = OsString::from(format!("{CONFIG_PATH_PROPERTY}="));
        config_path.push(target_directory);
        let token_arg = OsString::from(format!("{TOKEN_PROPERTY}={}", token.expose_secret()));

        let args = vec![
            OsString::from("/i"),
            artifact.as_os_str().to_owned(),
            OsString::from("/l*v"),
            settings.log_file.as_os_str().to_owned(),
            config_path,
            token_arg,
            OsString::from("/quiet"),
            OsString::from("/qn"),
        ];
        Self {
            program: settings.program.clone(),
            args,
            token_index: 5,
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Argument vector with the token value replaced, safe to log.
    #[must_use]
    pub fn redacted_args(&self) -> Vec<String> {
        self.args
            .iter()
            .enumerate()
            .map(|(i, a)| {
                if i == self.token_index {
                    format!("{TOKEN_PROPERTY}={REDACTED}")
                } else {
                    a.to_string_lossy().into_owned()
                }
            })
            .collect()
    }
}

impl fmt::Debug for InstallCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstallCommand")
            .field("program", &self.program)
            .field("args", &self.redacted_args())
            .finish()
    }
}
