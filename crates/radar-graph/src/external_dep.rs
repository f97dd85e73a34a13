use serde::{Deserialize, Serialize};

use crate::FilePath;

/// An external specifier (third-party package, stdlib module) and the files importing it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExternalDependency {
    pub specifier: String,
    pub importers: Vec<FilePath>,
}

impl ExternalDependency {
    pub fn new(specifier: impl Into<String>) -> Self {
        Self {
            specifier: specifier.into(),
            importers: Vec::new(),
        }
    }

    pub fn push_importer(&mut self, importer: FilePath) {
        if !self.importers.contains(&importer) {
            self.importers.push(importer);
        }
    }
}

/// An internal-looking specifier that matched no file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnresolvedImport {
    pub importer: FilePath,
    pub specifier: String,
}
