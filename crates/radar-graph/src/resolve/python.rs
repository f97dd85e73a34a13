//! Python import resolution.
//!
//! Relative specifiers (`.`, `.mod`, `..pkg.sub`) are resolved against the
//! importer's package and are never external. Absolute specifiers go through
//! the module index first, then a direct path lookup, then progressively
//! shorter dotted prefixes.

use super::{ModuleIndex, Resolution};
use crate::FilePath;

const INIT_FILE: &str = "__init__.py";

pub(super) fn resolve(index: &ModuleIndex, importer: &FilePath, specifier: &str) -> Resolution {
    if specifier.starts_with('.') {
        return match resolve_relative(index, importer, specifier) {
            Some(path) => Resolution::Local(path),
            None => Resolution::Unresolved,
        };
    }

    match resolve_absolute(index, specifier) {
        Some(path) => Resolution::Local(path),
        // Non-relative with no hit is assumed to be a third-party package.
        None => Resolution::External,
    }
}

fn resolve_relative(index: &ModuleIndex, importer: &FilePath, specifier: &str) -> Option<FilePath> {
    let subpath = specifier.trim_start_matches('.');
    let dots = specifier.len() - subpath.len();

    let segments = importer.parent_segments();
    let ascend = dots - 1;
    if ascend > segments.len() {
        return None;
    }
    let base = segments[..segments.len() - ascend].join("/");

    let candidates = if subpath.is_empty() {
        vec![join(&base, INIT_FILE)]
    } else {
        let relative = subpath.replace('.', "/");
        vec![
            join(&base, &format!("{relative}.py")),
            join(&base, &format!("{relative}/{INIT_FILE}")),
        ]
    };

    candidates
        .into_iter()
        .find(|candidate| index.contains_file(candidate))
        .and_then(|candidate| FilePath::new(candidate).ok())
}

fn resolve_absolute(index: &ModuleIndex, specifier: &str) -> Option<FilePath> {
    if let Some(path) = index.get(specifier) {
        return Some(path.clone());
    }

    let direct = specifier.replace('.', "/");
    for candidate in [format!("{direct}.py"), format!("{direct}/{INIT_FILE}")] {
        if index.contains_file(&candidate) {
            return FilePath::new(candidate).ok();
        }
    }

    // `import x.y.z` where only `x/y/__init__.py` exists.
    let parts: Vec<&str> = specifier.split('.').collect();
    (1..parts.len())
        .rev()
        .find_map(|k| index.get(&parts[..k].join(".")))
        .cloned()
}

fn join(base: &str, relative: &str) -> String {
    if base.is_empty() {
        relative.to_string()
    } else {
        format!("{base}/{relative}")
    }
}
