//! JavaScript / TypeScript import resolution.
//!
//! Only `./`, `../` and repository-absolute `/` specifiers are resolved.
//! Bare specifiers (`react`, `@scope/pkg`) are external. Resolution probes
//! the extension list, then `index.<ext>` inside the base as a directory.

use rustc_hash::FxHashSet as HashSet;

use super::Resolution;
use crate::file_path::join;
use crate::language::ECMASCRIPT_EXTENSIONS;
use crate::{FilePath, LanguageFamily};

pub(super) fn resolve(files: &HashSet<FilePath>, importer: &FilePath, specifier: &str) -> Resolution {
    if !is_local_specifier(specifier) {
        return Resolution::External;
    }

    // `None` is the repository root: `..` from `src/a.ts`, `.` or `/` from `b.ts`.
    let base = match specifier.strip_prefix('/') {
        Some(from_root) => FilePath::new(from_root).ok(),
        None => join(importer.parent_dir(), specifier),
    };

    candidates(base.as_ref())
        .into_iter()
        .find(|candidate| files.contains(candidate.as_str()))
        .map_or(Resolution::Unresolved, Resolution::Local)
}

fn is_local_specifier(specifier: &str) -> bool {
    specifier.starts_with('.') || specifier.starts_with('/')
}

/// Probe list for a base path, in resolution order.
fn candidates(base: Option<&FilePath>) -> Vec<FilePath> {
    let Some(base) = base else {
        return ECMASCRIPT_EXTENSIONS
            .iter()
            .filter_map(|ext| FilePath::new(format!("index.{ext}")).ok())
            .collect();
    };

    if LanguageFamily::is_ecmascript_path(base) {
        return vec![base.clone()];
    }

    let stem = base.as_str();
    let with_extension = ECMASCRIPT_EXTENSIONS.iter().map(|ext| format!("{stem}.{ext}"));
    let index_files = ECMASCRIPT_EXTENSIONS.iter().map(|ext| format!("{stem}/index.{ext}"));

    with_extension
        .chain(index_files)
        .filter_map(|candidate| FilePath::new(candidate).ok())
        .collect()
}
