use std::path::PathBuf;

use rustc_hash::FxHashMap as HashMap;

use super::{Runtime, RuntimeError, RuntimeResult};
use crate::FilePath;

/// In-memory sources, keyed by repository-relative path.
///
/// Used when the caller already holds file contents (a diff, a fixture) and
/// for tests. Paths listed as candidates but absent here read as not found.
#[derive(Debug, Clone, Default)]
pub struct MemoryRuntime {
    files: HashMap<FilePath, String>,
}

impl MemoryRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file.
    pub fn insert(&mut self, path: FilePath, content: impl Into<String>) -> &mut Self {
        self.files.insert(path, content.into());
        self
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_file(mut self, path: FilePath, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FromIterator<(FilePath, String)> for MemoryRuntime {
    fn from_iter<I: IntoIterator<Item = (FilePath, String)>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

impl Runtime for MemoryRuntime {
    fn read_file(&self, path: &FilePath) -> RuntimeResult<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| RuntimeError::FileNotFound(PathBuf::from(path.as_str())))
    }
}
