use serde::{Deserialize, Serialize};

use crate::FilePath;

/// Extensions handled by the JavaScript/TypeScript strategies, in probe order.
pub const ECMASCRIPT_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "mjs", "cjs"];

/// Extension of Python source files.
pub const PYTHON_EXTENSION: &str = "py";

/// Language family of a source file, derived purely from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageFamily {
    /// `.py`
    Python,
    /// `.ts`, `.tsx`, `.js`, `.jsx`, `.mjs`, `.cjs`
    EcmaScript,
}

impl LanguageFamily {
    /// Derive the family from a file extension, ignoring ASCII case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case(PYTHON_EXTENSION) {
            return Some(Self::Python);
        }
        ECMASCRIPT_EXTENSIONS
            .iter()
            .any(|candidate| ext.eq_ignore_ascii_case(candidate))
            .then_some(Self::EcmaScript)
    }

    /// Infer the family from a file path. `None` for anything that is not source code.
    pub fn from_path(path: &FilePath) -> Option<Self> {
        path.extension().and_then(Self::from_extension)
    }

    /// Returns true if the path carries one of the recognized JS/TS extensions.
    pub fn is_ecmascript_path(path: &FilePath) -> bool {
        Self::from_path(path) == Some(Self::EcmaScript)
    }
}
