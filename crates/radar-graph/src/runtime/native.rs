//! Filesystem-backed runtime rooted at a repository checkout.

use std::path::{Path, PathBuf};

use super::{Runtime, RuntimeError, RuntimeResult};
use crate::FilePath;

/// Reads candidate files from disk, relative to a repository root.
///
/// Content is decoded as UTF-8 with invalid sequences replaced, so a
/// Latin-1 source file still yields its import lines.
#[derive(Debug, Clone)]
pub struct NativeRuntime {
    root: PathBuf,
}

impl NativeRuntime {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The repository root all paths are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn absolute(&self, path: &FilePath) -> PathBuf {
        self.root.join(path.as_str())
    }
}

impl Runtime for NativeRuntime {
    fn read_file(&self, path: &FilePath) -> RuntimeResult<String> {
        let absolute = self.absolute(path);
        let bytes = std::fs::read(&absolute).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RuntimeError::FileNotFound(absolute.clone())
            } else {
                RuntimeError::Io(format!("Failed to read {}: {}", absolute.display(), e))
            }
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
