//! Repository scanning.
//!
//! Produces the candidate set for a build: every source file under the root
//! that passes the include/exclude globs, in sorted walk order, capped to a
//! maximum count. Hidden entries are skipped, symlinks are not followed and
//! unreadable directories are passed over silently.

use std::path::Path;

use ignore::WalkBuilder;
use ignore::overrides::{Override, OverrideBuilder};
use tracing::{debug, info};

use crate::{Error, FilePath, LanguageFamily, Result};

/// Default cap on the number of scanned files.
pub const DEFAULT_MAX_FILES: usize = 5000;

/// Options controlling a repository scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Globs selecting files to keep. A glob without `*` names a directory.
    /// Empty keeps everything.
    pub include: Vec<String>,
    /// Globs removing files from the selection.
    pub exclude: Vec<String>,
    /// Keep at most this many files.
    pub max_files: usize,
    /// Honor `.gitignore`, `.ignore` and git exclude files.
    pub respect_gitignore: bool,
    /// Log when the cap applies.
    pub debug: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            max_files: DEFAULT_MAX_FILES,
            respect_gitignore: true,
            debug: false,
        }
    }
}

/// Candidate files found by [`scan_repository`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Kept files, repository-relative.
    pub files: Vec<FilePath>,
    /// Number of source files found before the cap.
    pub total: usize,
}

impl ScanOutcome {
    /// Whether files were dropped by the cap.
    pub fn capped(&self) -> bool {
        self.total > self.files.len()
    }
}

/// Scan `root` for Python and JavaScript/TypeScript files.
///
/// Fails only when `root` is not a directory or a glob is malformed.
pub fn scan_repository(root: &Path, options: &ScanOptions) -> Result<ScanOutcome> {
    if !root.is_dir() {
        return Err(Error::Scan(format!(
            "repository root '{}' is not a directory",
            root.display()
        )));
    }

    let overrides = build_overrides(root, options)?;
    let walker = WalkBuilder::new(root)
        .hidden(true)
        .follow_links(false)
        .git_ignore(options.respect_gitignore)
        .git_global(options.respect_gitignore)
        .git_exclude(options.respect_gitignore)
        .ignore(options.respect_gitignore)
        .require_git(false)
        .parents(options.respect_gitignore)
        .overrides(overrides)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        if !is_source_file(entry.path()) {
            continue;
        }
        match FilePath::from_relative(entry.path(), root) {
            Ok(path) => files.push(path),
            Err(e) => debug!(path = %entry.path().display(), error = %e, "skipping entry"),
        }
    }

    let total = files.len();
    if total > options.max_files {
        files.truncate(options.max_files);
        if options.debug {
            info!("Repo scan capped: {} -> {}", total, files.len());
        }
    }

    Ok(ScanOutcome { files, total })
}

fn build_overrides(root: &Path, options: &ScanOptions) -> Result<Override> {
    let mut builder = OverrideBuilder::new(root);
    for glob in &options.include {
        builder
            .add(&include_pattern(glob))
            .map_err(|e| Error::Scan(format!("invalid include glob '{glob}': {e}")))?;
    }
    for glob in &options.exclude {
        builder
            .add(&format!("!{glob}"))
            .map_err(|e| Error::Scan(format!("invalid exclude glob '{glob}': {e}")))?;
    }
    builder
        .build()
        .map_err(|e| Error::Scan(format!("invalid glob set: {e}")))
}

/// `src` and `src/` select everything below `src`.
fn include_pattern(glob: &str) -> String {
    if glob.contains('*') {
        glob.to_string()
    } else {
        format!("{}/**/*", glob.trim_end_matches('/'))
    }
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(LanguageFamily::from_extension)
        .is_some()
}
