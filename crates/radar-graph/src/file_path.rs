use std::borrow::Borrow;
use std::fmt;
use std::path::Path;

use path_clean::PathClean;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Canonical identifier for a file in the dependency graph.
///
/// A `FilePath` is always repository-relative, uses forward slashes and has
/// `.` / `..` segments folded away where possible. Equality is plain string
/// equality, so `src/A.ts` and `src/a.ts` are different files.
///
/// A path that climbs above the repository root (`../x.ts`) keeps its leading
/// `..` segments; it can never match a scanned file and therefore resolves to
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FilePath(String);

impl FilePath {
    /// Normalize a raw path into a repository-relative identifier.
    ///
    /// Backslashes are treated as separators, a leading `./` or `/` is
    /// dropped and inner `.`/`..` segments are collapsed.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, FilePathError> {
        let normalized = normalize(raw.as_ref());
        if normalized.is_empty() {
            return Err(FilePathError::Empty);
        }
        Ok(Self(normalized))
    }

    /// Build an identifier from a filesystem path relative to `root`.
    pub fn from_relative(path: &Path, root: &Path) -> Result<Self, FilePathError> {
        let relative = path
            .strip_prefix(root)
            .map_err(|_| FilePathError::OutsideRoot {
                path: path.display().to_string(),
            })?;
        Self::new(relative.to_string_lossy())
    }

    /// Borrow the identifier as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Directory segments containing this file, outermost first.
    ///
    /// A file at the repository root has no segments.
    pub fn parent_segments(&self) -> Vec<&str> {
        match self.0.rsplit_once('/') {
            Some((dir, _)) => dir.split('/').filter(|s| !s.is_empty()).collect(),
            None => Vec::new(),
        }
    }

    /// The containing directory as a string (`""` for the repository root).
    pub fn parent_dir(&self) -> &str {
        self.0.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("")
    }

    /// Final path segment.
    pub fn file_name(&self) -> &str {
        self.0.rsplit_once('/').map(|(_, name)| name).unwrap_or(&self.0)
    }

    /// Text after the last `.` of the file name. Dotfiles such as `.py` have none.
    pub fn extension(&self) -> Option<&str> {
        self.file_name()
            .rsplit_once('.')
            .filter(|(stem, _)| !stem.is_empty())
            .map(|(_, ext)| ext)
    }

    /// Returns `true` when the file extension equals `extension`, ignoring ASCII case.
    pub fn has_extension_ci(&self, extension: &str) -> bool {
        self.extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
    }
}

/// Join `base` and `relative` and normalize the result.
///
/// Returns `None` when the joined path collapses to nothing.
pub(crate) fn join(base: &str, relative: &str) -> Option<FilePath> {
    let joined = if base.is_empty() {
        relative.to_string()
    } else if relative.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{relative}")
    };
    FilePath::new(joined).ok()
}

fn normalize(raw: &str) -> String {
    let forward = raw.trim().replace('\\', "/");
    let trimmed = forward.trim_start_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }

    let cleaned = Path::new(trimmed).clean();
    let text = cleaned.to_string_lossy().replace('\\', "/");
    if text == "." {
        String::new()
    } else {
        text.trim_start_matches("./").to_string()
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FilePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FilePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for FilePath {
    type Error = FilePathError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for FilePath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for FilePath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        FilePath::new(value).map_err(serde::de::Error::custom)
    }
}

/// Error type for `FilePath` construction failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilePathError {
    /// The path was empty after normalization.
    #[error("file path is empty")]
    Empty,

    /// The path does not live under the repository root.
    #[error("path '{path}' is outside the repository root")]
    OutsideRoot { path: String },
}
