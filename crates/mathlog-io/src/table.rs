//! Immutable, ordered table of attempt records

use crate::record::AttemptRecord;
use crate::schema::DataSchema;
use std::sync::Arc;

/// An ordered, read-only collection of attempts.
///
/// Cloning a table is cheap and never aliases mutable state: the rows are
/// shared behind an `Arc` and no API hands out `&mut` access. Every query
/// produces a fresh table.
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptTable {
    records: Arc<[AttemptRecord]>,
}

impl AttemptTable {
    pub fn new(records: Vec<AttemptRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[AttemptRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AttemptRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AttemptRecord> {
        self.records.get(index)
    }

    /// The first `n` rows (fewer if the table is shorter)
    pub fn head(&self, n: usize) -> &[AttemptRecord] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn schema(&self) -> DataSchema {
        DataSchema::attempts(self.len())
    }
}

impl Default for AttemptTable {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<AttemptRecord>> for AttemptTable {
    fn from(records: Vec<AttemptRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<AttemptRecord> for AttemptTable {
    fn from_iter<I: IntoIterator<Item = AttemptRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a AttemptTable {
    type Item = &'a AttemptRecord;
    type IntoIter = std::slice::Iter<'a, AttemptRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
