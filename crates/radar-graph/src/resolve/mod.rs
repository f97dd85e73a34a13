//! Import specifier resolution.
//!
//! Resolution is repo-global: a [`Resolver`] is built once from the complete
//! candidate set and then answers every `(importer, specifier)` question
//! without touching the filesystem.

mod ecmascript;
pub mod module_index;
mod python;

pub use module_index::{ModuleIndex, module_name};

use rustc_hash::FxHashSet as HashSet;
use serde::{Deserialize, Serialize};

use crate::{FilePath, LanguageFamily};

/// Outcome of resolving one specifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum Resolution {
    /// The specifier points at a file in the candidate set.
    Local(FilePath),
    /// The specifier refers to something outside the repository.
    External,
    /// The specifier looks internal but no file matched.
    Unresolved,
}

impl Resolution {
    /// The resolved file, if any.
    pub fn local(&self) -> Option<&FilePath> {
        match self {
            Self::Local(path) => Some(path),
            _ => None,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Self::External)
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved)
    }
}

/// Resolves specifiers against a fixed candidate set.
#[derive(Debug, Clone)]
pub struct Resolver {
    files: HashSet<FilePath>,
    modules: ModuleIndex,
}

impl Resolver {
    /// Build the resolver from the full candidate set.
    ///
    /// Must be called with every file of the run before any specifier is
    /// resolved, since a file may import one listed after it.
    pub fn new<'a, I>(paths: I) -> Self
    where
        I: IntoIterator<Item = &'a FilePath>,
    {
        let ordered: Vec<&FilePath> = paths.into_iter().collect();
        let modules = ModuleIndex::build(ordered.iter().copied());
        let files = ordered.into_iter().cloned().collect();
        Self { files, modules }
    }

    /// Resolve `specifier` as written in `importer`, using the strategy for `family`.
    pub fn resolve(
        &self,
        importer: &FilePath,
        specifier: &str,
        family: LanguageFamily,
    ) -> Resolution {
        match family {
            LanguageFamily::Python => python::resolve(&self.modules, importer, specifier),
            LanguageFamily::EcmaScript => ecmascript::resolve(&self.files, importer, specifier),
        }
    }

    /// The Python module index built for this run.
    pub fn module_index(&self) -> &ModuleIndex {
        &self.modules
    }

    /// Whether the candidate set contains `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains(path)
    }

    /// Number of candidate files known to the resolver.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}
