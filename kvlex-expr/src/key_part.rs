//! Key-part capabilities: per-column logic for deriving scan bounds.
//!
//! A key part knows how to turn a comparison predicate into a [`KeyRange`],
//! which predicate nodes it fully accounts for, and which column it belongs
//! to. Base column key parts are supplied by the planner; this module adds
//! the descending wrapper that [`InvertExpr`](crate::InvertExpr) exposes
//! through `new_key_part`.

use std::ops::Bound;
use std::sync::Arc;

use kvlex_result::Result;

use crate::expr::{CompareOp, ExprRef, ScalarExpr};
use crate::key_range::KeyRange;
use crate::sort_order;
use crate::types::FieldId;

/// Column identity as seen by the planner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnRef {
    pub name: String,
    pub field_id: FieldId,
}

/// Capability for pushing a predicate over one column into a scan range.
pub trait KeyPart: Send + Sync {
    /// Derive the key range implied by `op` against the right-hand side.
    fn key_range(&self, op: CompareOp, rhs: &dyn ScalarExpr) -> Result<KeyRange>;

    /// The predicate sub-expressions this key part fully accounts for, which
    /// the planner may remove from post-scan filtering.
    fn extract_nodes(&self) -> Vec<ExprRef>;

    /// The owning column.
    fn column(&self) -> &ColumnRef;
}

/// Shared handle to a key-part capability.
pub type KeyPartRef = Arc<dyn KeyPart>;

/// Key part over a descending-encoded column.
///
/// Wraps the child's capability: ranges are derived as if no transform
/// existed, then each bound's bytes are complemented. Bound roles and
/// inclusivity flags are kept exactly as the child produced them; only the
/// byte representation of each bound changes.
pub struct InvertKeyPart {
    child: KeyPartRef,
}

impl InvertKeyPart {
    pub fn new(child: KeyPartRef) -> Self {
        InvertKeyPart { child }
    }
}

fn invert_bound(bound: Bound<Vec<u8>>) -> Bound<Vec<u8>> {
    match bound {
        Bound::Included(b) => Bound::Included(sort_order::invert(&b)),
        Bound::Excluded(b) => Bound::Excluded(sort_order::invert(&b)),
        Bound::Unbounded => Bound::Unbounded,
    }
}

impl KeyPart for InvertKeyPart {
    fn key_range(&self, op: CompareOp, rhs: &dyn ScalarExpr) -> Result<KeyRange> {
        let range = self.child.key_range(op, rhs)?;
        Ok(KeyRange::new(
            invert_bound(range.lower),
            invert_bound(range.upper),
        ))
    }

    fn extract_nodes(&self) -> Vec<ExprRef> {
        self.child.extract_nodes()
    }

    fn column(&self) -> &ColumnRef {
        self.child.column()
    }
}
