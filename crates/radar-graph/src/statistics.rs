use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Counters accumulated over one graph build.
///
/// Each per-file step produces its own value; the builder sums them. Fields
/// only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildStats {
    /// Files successfully read and scanned.
    pub parsed_files: usize,
    /// Specifiers classified as outside the repository.
    pub external_imports: usize,
    /// Specifiers that look internal but matched no file.
    pub unresolved_imports: usize,
}

impl BuildStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_parsed(&mut self) {
        self.parsed_files += 1;
    }

    pub fn record_external(&mut self) {
        self.external_imports += 1;
    }

    pub fn record_unresolved(&mut self) {
        self.unresolved_imports += 1;
    }

    /// Total specifiers that produced no edge.
    pub fn dropped_imports(&self) -> usize {
        self.external_imports + self.unresolved_imports
    }
}

impl AddAssign for BuildStats {
    fn add_assign(&mut self, other: Self) {
        self.parsed_files += other.parsed_files;
        self.external_imports += other.external_imports;
        self.unresolved_imports += other.unresolved_imports;
    }
}

impl Add for BuildStats {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl Sum for BuildStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let mut stats = BuildStats::new();
        stats.record_parsed();
        stats.record_external();
        stats.record_external();
        stats.record_unresolved();
        assert_eq!(stats.parsed_files, 1);
        assert_eq!(stats.external_imports, 2);
        assert_eq!(stats.unresolved_imports, 1);
        assert_eq!(stats.dropped_imports(), 3);
    }

    #[test]
    fn sum_of_per_file_stats() {
        let per_file = vec![
            BuildStats {
                parsed_files: 1,
                external_imports: 2,
                unresolved_imports: 0,
            },
            BuildStats {
                parsed_files: 1,
                external_imports: 0,
                unresolved_imports: 3,
            },
            BuildStats::default(),
        ];
        let total: BuildStats = per_file.into_iter().sum();
        assert_eq!(
            total,
            BuildStats {
                parsed_files: 2,
                external_imports: 2,
                unresolved_imports: 3,
            }
        );
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(BuildStats::default()).unwrap();
        assert_eq!(json["parsedFiles"], 0);
        assert_eq!(json["externalImports"], 0);
        assert_eq!(json["unresolvedImports"], 0);
    }
}
