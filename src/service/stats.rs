//! Cross-cutting platform statistics
//!
//! Distinct counts are derived client-side from the bounded scan: each record
//! contributes at most one primary language and one author, so the derived
//! counts can never exceed the number of records scanned. This is an
//! approximation of the network-wide truth and does not scale past the scan
//! bound.

use serde::Serialize;
use std::collections::HashSet;

use crate::query::PageSource;
use crate::records::ContentRecord;

/// Platform-wide statistics for the landing page
#[derive(Debug, Clone, Serialize)]
pub struct PlatformStats {
    /// Cultures on the network (store count when available)
    pub cultures: u64,
    /// Exhibitions on the network
    pub exhibitions: u64,
    /// Learning resources on the network
    pub resources: u64,
    /// Elder stories on the network
    pub elder_stories: u64,
    /// Distinct primary languages among scanned records
    pub unique_languages: u64,
    /// Distinct publishing agents among scanned records
    pub unique_contributors: u64,
    /// Records the distinct counts were derived from
    pub records_scanned: u64,
    /// Whether the numbers came from the live network or the catalog
    pub source: PageSource,
}

/// Accumulates distinct-set cardinality over scanned records
#[derive(Debug, Default)]
pub(crate) struct DistinctSets {
    languages: HashSet<String>,
    contributors: HashSet<String>,
    scanned: u64,
}

impl DistinctSets {
    /// Fold a batch of records into the sets
    pub fn observe<T: ContentRecord>(&mut self, records: &[T]) {
        for record in records {
            self.scanned += 1;
            if let Some(language) = record.primary_language() {
                if !language.is_empty() {
                    self.languages.insert(language.to_lowercase());
                }
            }
            let author = &record.author().id;
            if !author.is_empty() {
                self.contributors.insert(author.clone());
            }
        }
    }

    pub fn unique_languages(&self) -> u64 {
        self.languages.len() as u64
    }

    pub fn unique_contributors(&self) -> u64 {
        self.contributors.len() as u64
    }

    pub fn records_scanned(&self) -> u64 {
        self.scanned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_distincts_bounded_by_scanned() {
        let mut sets = DistinctSets::default();
        sets.observe(&catalog::cultures());
        sets.observe(&catalog::resources());
        sets.observe(&catalog::elder_stories());

        assert!(sets.unique_languages() <= sets.records_scanned());
        assert!(sets.unique_contributors() <= sets.records_scanned());
        assert_eq!(sets.records_scanned(), 9);
    }

    #[test]
    fn test_language_case_folding() {
        let mut sets = DistinctSets::default();
        sets.observe(&catalog::cultures());
        // Tesshi, Vardic, Senna - one primary language per culture
        assert_eq!(sets.unique_languages(), 3);
        assert_eq!(sets.unique_contributors(), 3);
    }
}
