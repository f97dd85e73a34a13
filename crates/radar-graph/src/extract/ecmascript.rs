//! JavaScript / TypeScript import statements.
//!
//! Recognized shapes:
//!
//! - `import ... from "<spec>"` and bare `import "<spec>"`
//! - `export ... from "<spec>"`
//! - `const|let|var ... = require("<spec>")`
//!
//! Only the quoted specifier is kept. The binding list of an `import` may
//! span several lines; the other shapes must sit on one line.

use std::sync::LazyLock;

use regex::Regex;

use super::unique;

static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*import\s*(?:[\s\w{}*$,]*from\s*)?["']([^"'\n]+)["']"#)
        .expect("import pattern is valid")
});

static EXPORT_FROM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*export\s+.*\s+from\s+["']([^"'\n]+)["']"#)
        .expect("export-from pattern is valid")
});

static REQUIRE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?m)^\s*(?:const|let|var)\s+[\w{}\s,$]*=\s*require\(\s*["']([^"'\n]+)["']\s*\)"#,
    )
    .expect("require pattern is valid")
});

/// Extract JS/TS import specifiers in source order.
///
/// ```rust
/// use radar_graph::extract_ecmascript_imports;
///
/// let source = r#"
/// import React from "react";
/// export { helper } from "./helper";
/// const fs = require("fs");
/// "#;
/// assert_eq!(extract_ecmascript_imports(source), vec!["react", "./helper", "fs"]);
/// ```
pub fn extract_ecmascript_imports(source: &str) -> Vec<String> {
    let mut found: Vec<(usize, &str)> = Vec::new();

    for pattern in [&*IMPORT_RE, &*EXPORT_FROM_RE, &*REQUIRE_RE] {
        for caps in pattern.captures_iter(source) {
            if let Some(spec) = caps.get(1) {
                found.push((spec.start(), spec.as_str()));
            }
        }
    }

    found.sort_by_key(|(offset, _)| *offset);
    unique(found.into_iter().map(|(_, spec)| spec))
}
