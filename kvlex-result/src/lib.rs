//! Error types and result definitions for the KVLEX index subsystem.
//!
//! This crate provides a unified error type ([`Error`]) and result type alias
//! ([`Result<T>`]) shared by the other KVLEX crates. All fallible operations
//! return `Result<T>` and propagate upward with the `?` operator; at the
//! write-path boundary the [`Error::IndexWriteFailure`] variant tells callers
//! a batch must not be resubmitted.

pub mod error;
pub mod result;

pub use error::Error;
pub use result::Result;
