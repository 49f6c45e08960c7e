//! Scalar expression seam and the descending transform.
//!
//! The evaluation framework itself lives elsewhere; this module defines the
//! minimal surface KVLEX needs from it ([`Row`], [`ScalarExpr`]) plus the one
//! expression this subsystem contributes: [`InvertExpr`], which re-encodes
//! its child's bytes into the complementary sort order.

use std::sync::Arc;

use kvlex_result::Result;

use crate::key_part::{InvertKeyPart, KeyPartRef};
use crate::sort_order::{self, SortOrder};
use crate::types::{DataType, FieldId};

/// A row visible to expression evaluation.
///
/// `get` returns `None` when the column is not available in this row (for
/// example a partial projection that has not yet gathered it). A present but
/// NULL value is the empty byte slice.
pub trait Row {
    fn get(&self, field: FieldId) -> Option<&[u8]>;
}

/// A value-producing expression evaluated per row.
///
/// `evaluate` appends the encoded value to `out` and returns `Ok(true)`, or
/// returns `Ok(false)` without touching `out` when the row cannot yet
/// produce a value. Appending lets callers assemble composite keys from
/// adjacent encoded columns without intermediate buffers.
pub trait ScalarExpr: Send + Sync {
    fn evaluate(&self, row: &dyn Row, out: &mut Vec<u8>) -> Result<bool>;

    /// Declared physical type of the produced bytes.
    fn data_type(&self) -> DataType;

    /// Direction marker of the produced encoding.
    fn sort_order(&self) -> SortOrder {
        SortOrder::Ascending
    }

    /// Declared maximum value length, if any.
    fn max_length(&self) -> Option<usize> {
        None
    }

    /// Fixed encoded byte size, if the type has one.
    fn byte_size(&self) -> Option<usize> {
        None
    }

    fn nullable(&self) -> bool {
        true
    }

    /// Whether output order tracks input order, making the expression safe
    /// to push beneath an ORDER BY or a range scan.
    fn order_preserving(&self) -> bool {
        false
    }

    /// Child position through which a key range may be pushed, or `None`
    /// when the expression cannot participate in key formation.
    fn key_formation_traversal_index(&self) -> Option<usize> {
        None
    }
}

/// Shared handle to an expression node.
pub type ExprRef = Arc<dyn ScalarExpr>;

/// Comparison operator of a predicate being pushed into a key range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

/// Unary transform flipping its child's byte order between ascending and
/// descending encodings.
///
/// The transform changes byte order only: type, length and nullability are
/// the child's. Wrapping twice is order-neutral and evaluates back to the
/// child's original bytes.
pub struct InvertExpr {
    child: ExprRef,
}

impl InvertExpr {
    /// SQL-level function name this expression is registered under.
    pub const NAME: &'static str = "INVERT";

    pub fn new(child: ExprRef) -> Self {
        InvertExpr { child }
    }

    pub fn child(&self) -> &ExprRef {
        &self.child
    }

    /// Wrap a child column's key-part capability so that ranges derived from
    /// predicates are rewritten into the complemented encoding.
    pub fn new_key_part(&self, child_part: KeyPartRef) -> InvertKeyPart {
        InvertKeyPart::new(child_part)
    }
}

impl ScalarExpr for InvertExpr {
    fn evaluate(&self, row: &dyn Row, out: &mut Vec<u8>) -> Result<bool> {
        let start = out.len();
        if !self.child.evaluate(row, out)? {
            return Ok(false);
        }
        // Empty child output (NULL) is left untouched; the complement of a
        // zero-length region is itself.
        sort_order::invert_in_place(&mut out[start..]);
        Ok(true)
    }

    fn data_type(&self) -> DataType {
        self.child.data_type()
    }

    fn sort_order(&self) -> SortOrder {
        self.child.sort_order().flip()
    }

    fn max_length(&self) -> Option<usize> {
        self.child.max_length()
    }

    fn byte_size(&self) -> Option<usize> {
        self.child.byte_size()
    }

    fn nullable(&self) -> bool {
        self.child.nullable()
    }

    fn order_preserving(&self) -> bool {
        true
    }

    fn key_formation_traversal_index(&self) -> Option<usize> {
        Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapRow(HashMap<FieldId, Vec<u8>>);

    impl Row for MapRow {
        fn get(&self, field: FieldId) -> Option<&[u8]> {
            self.0.get(&field).map(|v| v.as_slice())
        }
    }

    /// Toy column reference reading one field's raw bytes.
    struct ColExpr {
        field: FieldId,
        max_length: Option<usize>,
    }

    impl ScalarExpr for ColExpr {
        fn evaluate(&self, row: &dyn Row, out: &mut Vec<u8>) -> Result<bool> {
            match row.get(self.field) {
                Some(bytes) => {
                    out.extend_from_slice(bytes);
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        fn data_type(&self) -> DataType {
            DataType::Utf8
        }

        fn max_length(&self) -> Option<usize> {
            self.max_length
        }

        fn nullable(&self) -> bool {
            false
        }
    }

    fn col(field: FieldId) -> ExprRef {
        Arc::new(ColExpr {
            field,
            max_length: Some(16),
        })
    }

    fn row(field: FieldId, value: &[u8]) -> MapRow {
        let mut m = HashMap::new();
        m.insert(field, value.to_vec());
        MapRow(m)
    }

    #[test]
    fn evaluate_complements_child_bytes() {
        let expr = InvertExpr::new(col(1));
        let mut out = Vec::new();
        assert!(expr.evaluate(&row(1, b"\x01\x02"), &mut out).unwrap());
        assert_eq!(out, b"\xfe\xfd");
    }

    #[test]
    fn evaluate_appends_after_existing_bytes() {
        // Composite-key assembly: a prior column already wrote into `out`.
        let expr = InvertExpr::new(col(1));
        let mut out = b"prefix".to_vec();
        assert!(expr.evaluate(&row(1, b"\x10"), &mut out).unwrap());
        assert_eq!(out, b"prefix\xef");
    }

    #[test]
    fn missing_column_propagates_without_transform() {
        let expr = InvertExpr::new(col(1));
        let mut out = Vec::new();
        assert!(!expr.evaluate(&row(2, b"elsewhere"), &mut out).unwrap());
        assert!(out.is_empty());
    }

    #[test]
    fn null_value_passes_through_unchanged() {
        let expr = InvertExpr::new(col(1));
        let mut out = Vec::new();
        assert!(expr.evaluate(&row(1, b""), &mut out).unwrap());
        assert!(out.is_empty());
    }

    #[test]
    fn single_wrap_marks_descending() {
        let expr = InvertExpr::new(col(1));
        assert_eq!(expr.sort_order(), SortOrder::Descending);
        assert!(expr.order_preserving());
        assert_eq!(expr.key_formation_traversal_index(), Some(0));
    }

    #[test]
    fn double_wrap_is_order_neutral() {
        let inner = InvertExpr::new(col(1));
        let outer = InvertExpr::new(Arc::new(inner));
        assert_eq!(outer.sort_order(), SortOrder::Ascending);

        let mut out = Vec::new();
        assert!(outer.evaluate(&row(1, b"\x01\x02\x03"), &mut out).unwrap());
        assert_eq!(out, b"\x01\x02\x03");
    }

    #[test]
    fn metadata_delegates_to_child() {
        let expr = InvertExpr::new(col(1));
        assert_eq!(expr.data_type(), DataType::Utf8);
        assert_eq!(expr.max_length(), Some(16));
        assert_eq!(expr.byte_size(), None);
        assert!(!expr.nullable());
    }
}
