//! Secondary-index write-path types and the write-failure escalation policy.
//!
//! Secondary indexes are kept consistent with their primary table by dual
//! writes, with no cross-table transaction. When a batch of derived index
//! mutations cannot be durably applied, serving the index would return stale
//! results, so the write path hands the batch to [`IndexFailurePolicy`]: it
//! disables each affected index through the metadata authority and, when a
//! disable cannot be confirmed, stops the server outright. Either way the
//! caller receives a non-retryable error and must not resubmit the batch.

#![forbid(unsafe_code)]

pub mod batch;
pub mod catalog;
pub mod failure_policy;
pub mod metadata;

pub use batch::{IndexTableRef, IndexUpdateBatch, RowMutation};
pub use catalog::{CatalogPut, IndexState};
pub use failure_policy::{IndexFailurePolicy, ServerStopper};
pub use metadata::{MetadataAuthority, MutationCode, MutationResult};
