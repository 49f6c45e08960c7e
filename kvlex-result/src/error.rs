use std::{fmt, io};
use thiserror::Error;

/// Unified error type for all KVLEX operations.
///
/// This enum covers the failure modes of the index subsystem, from transport
/// errors against the metadata authority up to the non-retryable signal the
/// write path receives after an index has been disabled. Internal code can
/// match on specific variants; boundary code usually only needs
/// [`Error::is_retryable`].
///
/// # Thread Safety
///
/// `Error` is `Send + Sync` so failures can cross the write-path worker
/// boundary intact.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error from the hosting store or its transport.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A remote call to the metadata authority failed.
    ///
    /// This covers transport failures, malformed responses, and empty result
    /// sets. The escalation policy treats every `Remote` error uniformly: it
    /// never inspects the message to decide between remediation paths.
    #[error("metadata authority call failed: {0}")]
    Remote(String),

    /// System catalog metadata error.
    ///
    /// Raised when catalog contents are inconsistent with what an operation
    /// requires (e.g. an index row that cannot be decoded). Catalog errors
    /// are serious: they affect the engine's understanding of its own
    /// schema.
    #[error("{0}")]
    CatalogError(String),

    /// Invalid user input or API parameter.
    #[error("Invalid argument: {0}")]
    InvalidArgumentError(String),

    /// Internal error indicating a bug or unexpected state.
    ///
    /// This should never occur during normal operation; it indicates a
    /// violated invariant inside KVLEX itself.
    #[error("An internal operation failed: {0}")]
    Internal(String),

    /// A batch of secondary-index updates could not be applied and the
    /// affected indexes have been dealt with (disabled, or the server is
    /// being stopped).
    ///
    /// Callers MUST NOT resubmit the batch: the underlying cause (for
    /// example an unreachable index region) is not resolved by disabling
    /// the index, so a retry would fail the same way indefinitely. The
    /// message names the indexes that were disabled; the original failure
    /// is preserved as the error source.
    #[error("{message}")]
    IndexWriteFailure {
        message: String,
        #[source]
        cause: Box<Error>,
    },
}

impl Error {
    /// Create a remote-call error from any displayable error.
    #[inline]
    pub fn remote<E: fmt::Display>(err: E) -> Self {
        Error::Remote(err.to_string())
    }

    /// Create the non-retryable error raised after index write failure
    /// handling, wrapping the original cause.
    #[inline]
    pub fn index_write_failure(message: impl Into<String>, cause: Error) -> Self {
        Error::IndexWriteFailure {
            message: message.into(),
            cause: Box::new(cause),
        }
    }

    /// Whether the write path may resubmit the operation that produced this
    /// error. [`Error::IndexWriteFailure`] is the only permanently
    /// non-retryable variant.
    #[inline]
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Error::IndexWriteFailure { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn index_write_failure_is_not_retryable() {
        let cause = Error::Remote("region unreachable".into());
        let err = Error::index_write_failure("Disabled index IDX1", cause);
        assert!(!err.is_retryable());
        assert!(Error::Remote("x".into()).is_retryable());
        assert!(Error::Io(io::Error::other("disk")).is_retryable());
    }

    #[test]
    fn index_write_failure_preserves_cause_chain() {
        let cause = Error::Remote("region unreachable".into());
        let err = Error::index_write_failure("Disabled index IDX1", cause);
        assert_eq!(err.to_string(), "Disabled index IDX1");
        let source = err.source().expect("cause retained");
        assert!(source.to_string().contains("region unreachable"));
    }
}
