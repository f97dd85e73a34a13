//! Python import statements.
//!
//! Recognized shapes, one physical line each:
//!
//! - `import a.b.c` (optionally `as alias`, optionally a comma list)
//! - `from a.b import ...`
//! - `from ..a.b import ...` / `from . import ...`
//!
//! Relative specifiers keep their leading dot run so the resolver can tell
//! how many packages to climb.

use std::sync::LazyLock;

use regex::Regex;

use super::unique;

static PLAIN_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[ \t]*import[ \t]+([A-Za-z0-9_.]+(?:[ \t]+as[ \t]+\w+)?(?:[ \t]*,[ \t]*[A-Za-z0-9_.]+(?:[ \t]+as[ \t]+\w+)?)*)[ \t]*(?:#.*)?\r?$",
    )
    .expect("plain import pattern is valid")
});

// The module group admits dots anywhere, so `from ..pkg import x` and
// `from . import x` are captured with their dot run intact.
static FROM_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*from[ \t]+([A-Za-z0-9_.]+)[ \t]+import\b")
        .expect("from import pattern is valid")
});

/// Extract Python import specifiers in source order.
///
/// ```rust
/// use radar_graph::extract_python_imports;
///
/// let source = "import json\nfrom ..pkg.sub import thing\nfrom . import sibling\n";
/// assert_eq!(extract_python_imports(source), vec!["json", "..pkg.sub", "."]);
/// ```
pub fn extract_python_imports(source: &str) -> Vec<String> {
    let mut found: Vec<&str> = Vec::new();

    for line in source.lines() {
        if let Some(caps) = PLAIN_IMPORT_RE.captures(line) {
            let names = caps.get(1).map_or("", |m| m.as_str());
            found.extend(names.split(',').filter_map(plain_module_name));
        } else if let Some(caps) = FROM_IMPORT_RE.captures(line) {
            if let Some(module) = caps.get(1) {
                found.push(module.as_str());
            }
        }
    }

    unique(found)
}

/// `a.b as c` -> `a.b`
fn plain_module_name(entry: &str) -> Option<&str> {
    entry.split_whitespace().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_imports() {
        let source = "import os\nimport pkg.sub.mod\n  import indented  # comment\n";
        assert_eq!(
            extract_python_imports(source),
            vec!["os", "pkg.sub.mod", "indented"]
        );
    }

    #[test]
    fn plain_import_aliases_and_lists() {
        let source = "import numpy as np\nimport a, b.c as d, e\n";
        assert_eq!(
            extract_python_imports(source),
            vec!["numpy", "a", "b.c", "e"]
        );
    }

    #[test]
    fn from_imports() {
        let source = "from a.b import c\nfrom x import (\n    y,\n    z,\n)\nfrom m import *\n";
        assert_eq!(extract_python_imports(source), vec!["a.b", "x", "m"]);
    }

    #[test]
    fn consecutive_from_imports_are_all_found() {
        let source = "from a import b\nfrom c import d\nfrom e import f\n";
        assert_eq!(extract_python_imports(source), vec!["a", "c", "e"]);
    }

    #[test]
    fn relative_imports_keep_dot_run() {
        let source = "from . import sibling\nfrom .mod import x\nfrom ..pkg.sub import y\nfrom ... import z\n";
        assert_eq!(
            extract_python_imports(source),
            vec![".", ".mod", "..pkg.sub", "..."]
        );
    }

    #[test]
    fn deduplicates_in_first_seen_order() {
        let source = "import os\nfrom os import path\nimport sys\nimport os\n";
        assert_eq!(extract_python_imports(source), vec!["os", "sys"]);
    }

    #[test]
    fn handles_crlf_line_endings() {
        let source = "import os\r\nfrom .a import b\r\n";
        assert_eq!(extract_python_imports(source), vec!["os", ".a"]);
    }

    #[test]
    fn ignores_non_statements() {
        let source = "x = 'import os'\n# import sys\ndef importer():\n    return fromage\nimported = 1\n";
        assert!(extract_python_imports(source).is_empty());
    }

    #[test]
    fn rejects_trailing_garbage_on_plain_import() {
        assert!(extract_python_imports("import os; print(1)").is_empty());
    }
}
