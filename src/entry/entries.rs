//! Collection management for measured entries.
//!
//! [`Entries`] keeps the measured paths in input order and provides the
//! aggregate operations the report needs: sorting, totals and the unit
//! recommendation.

use crate::units::Unit;

use super::FileEntry;

/// An ordered collection of measured entries.
#[derive(Debug, Default)]
pub struct Entries(Vec<FileEntry>);

impl From<Vec<FileEntry>> for Entries {
    fn from(entries: Vec<FileEntry>) -> Self {
        Self(entries)
    }
}

impl Entries {
    /// Sort entries by logical size, largest first.
    ///
    /// The sort is stable: entries of equal size keep their input order.
    pub fn sort_by_size(&mut self) {
        self.0.sort_by(|a, b| b.size.cmp(&a.size));
    }

    /// Sum of the logical sizes of all entries.
    #[must_use]
    pub fn get_total_size(&self) -> u64 {
        self.0
            .iter()
            .fold(0u64, |acc, entry| acc.saturating_add(entry.size))
    }

    /// Sum of the on-disk sizes of all entries.
    #[must_use]
    pub fn get_total_size_on_disk(&self) -> u64 {
        self.0
            .iter()
            .fold(0u64, |acc, entry| acc.saturating_add(entry.size_on_disk))
    }

    /// Number of files skipped across all entries.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.0.iter().map(|entry| entry.skipped.len()).sum()
    }

    /// The unit to recommend instead of `forced`, if any.
    ///
    /// Returns `None` when no unit was forced or when the forced unit is
    /// already the best unit for the total size.
    #[must_use]
    pub fn recommendation(&self, forced: Option<Unit>) -> Option<Unit> {
        let forced = forced?;
        let best = Unit::best_for(self.get_total_size());

        (best != forced).then_some(best)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[FileEntry] {
        &self.0
    }

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, FileEntry> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Entries {
    type Item = &'a FileEntry;
    type IntoIter = std::slice::Iter<'a, FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
