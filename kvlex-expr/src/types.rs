//! Identifiers and type tags shared across the expression surface.

/// Identifier of a column within its table.
pub type FieldId = u32;

/// A tag for the declared physical type of an expression's output.
///
/// This is a simple, C-like enum that is cheap to store and copy. The
/// descending transform never changes it: only the byte order of the encoded
/// value is affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// Raw order-preserving bytes.
    Binary,
    /// Order-preserving UTF-8 string.
    Utf8,
    /// Big-endian 64-bit unsigned integer.
    U64,
    /// Boolean (0 for false, 1 for true).
    Bool,
}
