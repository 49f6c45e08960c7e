use crate::error::Error;

/// Convenience alias used across all KVLEX crates.
pub type Result<T> = std::result::Result<T, Error>;
