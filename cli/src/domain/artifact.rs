//! Downloaded artifact and installer outcome types.

use std::path::PathBuf;

use serde::Serialize;

/// A fully written, closed artifact on disk.
///
/// The file outlives the run; nothing in this crate deletes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactHandle {
    /// Final artifact location.
    pub local_path: PathBuf,
    /// Bytes streamed from the source and written to `local_path`.
    pub byte_count: u64,
    /// Hex SHA-256 of the written bytes. Informational only.
    pub sha256: String,
}

/// Termination status of the installer process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstallOutcome {
    pub exit_code: i32,
    pub succeeded: bool,
}

impl InstallOutcome {
    /// Exit code 0 is success; anything else is failure.
    #[must_use]
    pub fn from_code(exit_code: i32) -> Self {
        Self {
            exit_code,
            succeeded: exit_code == 0,
        }
    }
}

/// Lowercase hex encoding of a byte slice.
#[must_use]
pub fn hex_encode(bytes: &[u8]) -> String {
    use std::fmt::Write as _;
    bytes
        .iter()
        .fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
            let _ = write!(s, "{b:02x}");
            s
        })
}
