//! Escalation policy for index write failures.
//!
//! Dual-writing a primary table and its secondary indexes has no cross-table
//! transaction, so a failed index write leaves the index possibly stale. The
//! policy here runs once per failed batch: it marks every affected index
//! [`IndexState::Disable`] in the catalog, and when any disable cannot be
//! confirmed it stops the whole server. In every case the caller gets a
//! non-retryable error; this path never reports success.

use std::sync::Arc;

use kvlex_result::{Error, Result};

use crate::batch::IndexUpdateBatch;
use crate::catalog::{CatalogPut, IndexState};
use crate::metadata::{MetadataAuthority, MutationCode};

/// Last-resort escalation primitive: stop this server for the given cause.
///
/// Process termination and alerting mechanics belong to the implementation;
/// the policy only decides when to invoke it.
pub trait ServerStopper: Send + Sync {
    fn escalate(&self, attempted: &IndexUpdateBatch, cause: &Error);
}

/// Handler invoked when a batch of index updates cannot be written to their
/// region server.
///
/// First attempts to disable each affected index through the metadata
/// authority and, failing that, falls back to stopping the server via the
/// owned [`ServerStopper`].
pub struct IndexFailurePolicy {
    authority: Arc<dyn MetadataAuthority>,
    stopper: Arc<dyn ServerStopper>,
}

impl IndexFailurePolicy {
    pub fn new(authority: Arc<dyn MetadataAuthority>, stopper: Arc<dyn ServerStopper>) -> Self {
        IndexFailurePolicy { authority, stopper }
    }

    /// Handle one failed batch.
    ///
    /// Always returns `Err`: either every affected index was disabled, or
    /// the server is being stopped, and in both cases the batch must not be
    /// resubmitted. The error names the indexes that were disabled and
    /// carries the original cause as its source.
    pub fn handle_failure(&self, attempted: &IndexUpdateBatch, cause: Error) -> Result<()> {
        let mut disabled: Vec<String> = Vec::new();
        if let Err(err) = self.disable_all(attempted, &mut disabled) {
            tracing::warn!(
                error = %err,
                "failed to disable index set; falling back to server stop"
            );
            self.stopper.escalate(attempted, &cause);
        }
        let message = format!(
            "Disabled index(es) {} due to an exception while writing updates",
            disabled.join(", ")
        );
        Err(Error::index_write_failure(message, cause))
    }

    /// Disable every index in the batch, recording each confirmed disable in
    /// `disabled`. Stops at the first index whose disable is not definitive.
    fn disable_all(&self, attempted: &IndexUpdateBatch, disabled: &mut Vec<String>) -> Result<()> {
        for index in attempted.indexes() {
            let table_key = index.table_key();
            let put = CatalogPut::index_state(table_key.clone(), IndexState::Disable);
            let results = self.authority.update_index_state(&table_key, &[put])?;
            let result = results.first().ok_or_else(|| {
                Error::remote("empty result set from update_index_state")
            })?;
            if result.code == MutationCode::AlreadyInTargetState {
                tracing::warn!(
                    index = %index.name(),
                    code = ?result.code,
                    "attempt to disable index applied no mutation"
                );
                return Err(Error::CatalogError(format!(
                    "index {} not disabled (code {:?})",
                    index.name(),
                    result.code
                )));
            }
            tracing::info!(index = %index.name(), "successfully disabled index");
            disabled.push(index.name().to_string());
        }
        Ok(())
    }
}
