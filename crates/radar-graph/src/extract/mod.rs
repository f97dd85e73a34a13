//! Import specifier extraction.
//!
//! Extraction is a narrow text-pattern layer: each language family has a
//! fixed set of recognized statement shapes, matched line by line against
//! the whole file. Anything outside those shapes is an accepted miss. No
//! filesystem access happens here and nothing is resolved.
//!
//! ```rust
//! use radar_graph::{LanguageFamily, extract_imports};
//!
//! let source = "import os\nfrom .models import User\n";
//! let imports = extract_imports(source, LanguageFamily::Python);
//! assert_eq!(imports, vec!["os", ".models"]);
//! ```

mod ecmascript;
mod python;

use indexmap::IndexSet;

pub use ecmascript::extract_ecmascript_imports;
pub use python::extract_python_imports;

use crate::LanguageFamily;

/// Extract the raw import specifiers of `source` for the given language family.
///
/// The result is deduplicated, keeps first-seen order, and never contains
/// empty or untrimmed strings.
pub fn extract_imports(source: &str, family: LanguageFamily) -> Vec<String> {
    match family {
        LanguageFamily::Python => extract_python_imports(source),
        LanguageFamily::EcmaScript => extract_ecmascript_imports(source),
    }
}

/// Trim, drop empties and deduplicate while keeping first-seen order.
fn unique<'a, I>(specifiers: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    specifiers
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}
