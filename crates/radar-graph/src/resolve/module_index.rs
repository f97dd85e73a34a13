//! Dotted-name index over the Python files of a repository.

use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};

use crate::language::PYTHON_EXTENSION;
use crate::FilePath;

const PACKAGE_INIT: &str = "__init__";

/// Lookup from dotted module name (`a.b.c`) to the file defining it.
///
/// `a/b.py` is indexed as `a.b`; `a/b/__init__.py` is indexed as the
/// package name `a.b`. When two files claim the same name the one seen
/// last wins. The index also remembers every Python file it saw, so
/// path-shaped lookups still find a file that lost a name collision.
#[derive(Debug, Clone, Default)]
pub struct ModuleIndex {
    modules: HashMap<String, FilePath>,
    files: HashSet<FilePath>,
}

impl ModuleIndex {
    /// Build the index from the full candidate set.
    pub fn build<'a, I>(paths: I) -> Self
    where
        I: IntoIterator<Item = &'a FilePath>,
    {
        let mut index = Self::default();
        for path in paths {
            if !path.has_extension_ci(PYTHON_EXTENSION) {
                continue;
            }
            index.files.insert(path.clone());
            if let Some(name) = module_name(path) {
                index.modules.insert(name, path.clone());
            }
        }
        index
    }

    /// File backing the dotted module name, if any.
    pub fn get(&self, module: &str) -> Option<&FilePath> {
        self.modules.get(module)
    }

    /// Whether the given path is one of the indexed Python files.
    pub fn contains_file(&self, path: &str) -> bool {
        self.files.contains(path)
    }

    /// Number of distinct dotted names.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether no Python module was indexed.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Dotted module name for a Python file, `None` for other files or when
/// nothing remains after dropping `__init__`.
pub fn module_name(path: &FilePath) -> Option<String> {
    if !path.has_extension_ci(PYTHON_EXTENSION) {
        return None;
    }

    let text = path.as_str();
    let stem = &text[..text.len() - PYTHON_EXTENSION.len() - 1];
    let mut parts: Vec<&str> = stem.split('/').collect();
    if parts.last() == Some(&PACKAGE_INIT) {
        parts.pop();
    }

    let name = parts
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(".");
    (!name.is_empty()).then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(raw: &[&str]) -> Vec<FilePath> {
        raw.iter().map(|p| FilePath::new(p).unwrap()).collect()
    }

    #[test]
    fn module_names() {
        let name = |p: &str| module_name(&FilePath::new(p).unwrap());
        assert_eq!(name("a/b.py").as_deref(), Some("a.b"));
        assert_eq!(name("a/b/__init__.py").as_deref(), Some("a.b"));
        assert_eq!(name("setup.py").as_deref(), Some("setup"));
        assert_eq!(name("pkg/MOD.PY").as_deref(), Some("pkg.MOD"));
        assert_eq!(name("__init__.py"), None);
        assert_eq!(name("src/a.ts"), None);
    }

    #[test]
    fn indexes_modules_and_packages() {
        let files = paths(&["app/__init__.py", "app/models.py", "web/index.ts"]);
        let index = ModuleIndex::build(&files);

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("app").unwrap().as_str(), "app/__init__.py");
        assert_eq!(index.get("app.models").unwrap().as_str(), "app/models.py");
        assert!(index.get("web.index").is_none());
        assert!(!index.contains_file("web/index.ts"));
    }

    #[test]
    fn last_write_wins_on_collision() {
        let files = paths(&["a/b.py", "a/b/__init__.py"]);
        let index = ModuleIndex::build(&files);
        assert_eq!(index.get("a.b").unwrap().as_str(), "a/b/__init__.py");

        let reversed = paths(&["a/b/__init__.py", "a/b.py"]);
        let index = ModuleIndex::build(&reversed);
        assert_eq!(index.get("a.b").unwrap().as_str(), "a/b.py");
        assert!(index.contains_file("a/b/__init__.py"));
    }

    #[test]
    fn root_init_is_a_file_but_not_a_module() {
        let files = paths(&["__init__.py", "main.py"]);
        let index = ModuleIndex::build(&files);
        assert_eq!(index.len(), 1);
        assert!(index.contains_file("__init__.py"));
    }

    #[test]
    fn empty_index() {
        let index = ModuleIndex::build(&[]);
        assert!(index.is_empty());
    }
}
