//! Filesystem infrastructure: implements `DirectoryInspector`.

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::application::ports::DirectoryInspector;
use crate::domain::ARTIFACT_FILE_NAME;
use crate::domain::validate::DirectoryState;
use crate::infra::fetch::partial_path;

/// Production filesystem implementation of `DirectoryInspector`.
pub struct LocalFs;

impl DirectoryInspector for LocalFs {
    fn absolutize(&self, path: &Path) -> std::io::Result<PathBuf> {
        std::path::absolute(path)
    }

    fn inspect(&self, path: &Path) -> DirectoryState {
        let Ok(meta) = std::fs::metadata(path) else {
            return DirectoryState::Missing;
        };
        if !meta.is_dir() {
            return DirectoryState::Missing;
        }
        if meta.permissions().readonly() {
            return DirectoryState::ReadOnly;
        }
        // Permission bits alone do not tell whether this process may create
        // files here. The check uses the artifact's own staging name, the
        // same `.partial` file the download writes, so no other path in the
        // directory is ever touched.
        let staging = partial_path(&path.join(ARTIFACT_FILE_NAME));
        match create_and_remove(&staging) {
            Ok(()) => DirectoryState::Writable,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "directory not writable");
                DirectoryState::ReadOnly
            }
        }
    }
}

/// Create `staging` exclusively and delete it again. A stale file from an
/// interrupted download is replaced first, as the download would do.
fn create_and_remove(staging: &Path) -> std::io::Result<()> {
    let create = || OpenOptions::new().write(true).create_new(true).open(staging);
    let file = match create() {
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            std::fs::remove_file(staging)?;
            create()?
        }
        other => other?,
    };
    drop(file);
    std::fs::remove_file(staging)
}
