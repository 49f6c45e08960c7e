//! Client seam to the metadata authority, the service of record for catalog
//! state.

use kvlex_result::Result;

use crate::catalog::CatalogPut;

/// Outcome code of one metadata-authority mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationCode {
    /// The index-state row was rewritten as requested.
    IndexStateUpdated,
    /// The authority applied no mutation; the row already carried the
    /// requested state (or a state from which no transition was needed).
    AlreadyInTargetState,
    /// No catalog row exists for the given table key.
    TableNotFound,
    /// The requested transition is not legal from the row's current state.
    UnallowedStateTransition,
}

/// Result of one mutation inside an `update_index_state` round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationResult {
    pub code: MutationCode,
    /// Catalog row key the result refers to.
    pub table_key: Vec<u8>,
}

impl MutationResult {
    pub fn new(code: MutationCode, table_key: Vec<u8>) -> Self {
        MutationResult { code, table_key }
    }
}

/// Remote metadata-authority operations consumed by this crate.
///
/// `update_index_state` is a blocking round-trip; timeout and retry behavior
/// belong to the implementing client. Implementations serialize concurrent
/// state transitions for the same catalog row.
pub trait MetadataAuthority: Send + Sync {
    /// Apply `mutations` to the catalog rows under `table_key`, returning
    /// one result per affected row. An empty result vector means the
    /// authority did not process the request.
    fn update_index_state(
        &self,
        table_key: &[u8],
        mutations: &[CatalogPut],
    ) -> Result<Vec<MutationResult>>;
}
