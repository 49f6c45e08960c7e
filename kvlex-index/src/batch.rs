//! Pending index-table mutations grouped by destination index.

use rustc_hash::FxHashMap;

use crate::catalog;

/// Identity of one secondary index table.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IndexTableRef {
    name: String,
}

impl IndexTableRef {
    pub fn new(name: impl Into<String>) -> Self {
        IndexTableRef { name: name.into() }
    }

    /// Full table name, `schema.table` or bare table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Catalog row key of this index's metadata row.
    pub fn table_key(&self) -> Vec<u8> {
        catalog::table_key_from_name(&self.name)
    }
}

/// One pending mutation against an index table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowMutation {
    Put { row_key: Vec<u8>, value: Vec<u8> },
    Delete { row_key: Vec<u8> },
}

/// Mutations destined for one or more index tables, produced by the write
/// path when a primary-table mutation implies derived index updates.
///
/// Indexes iterate in first-insertion order so that failure-handling
/// messages come out deterministic.
#[derive(Debug, Default)]
pub struct IndexUpdateBatch {
    updates: FxHashMap<IndexTableRef, Vec<RowMutation>>,
    order: Vec<IndexTableRef>,
}

impl IndexUpdateBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, index: IndexTableRef, mutation: RowMutation) {
        let slot = self.updates.entry(index.clone()).or_default();
        if slot.is_empty() {
            self.order.push(index);
        }
        slot.push(mutation);
    }

    /// Distinct destination indexes, in first-insertion order.
    pub fn indexes(&self) -> impl Iterator<Item = &IndexTableRef> {
        self.order.iter()
    }

    /// Pending mutations for `index`, if any.
    pub fn mutations(&self, index: &IndexTableRef) -> Option<&[RowMutation]> {
        self.updates.get(index).map(|m| m.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of distinct destination indexes.
    pub fn index_count(&self) -> usize {
        self.order.len()
    }
}
