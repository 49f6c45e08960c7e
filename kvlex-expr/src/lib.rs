//! Expression-side surface of the KVLEX index subsystem.
//!
//! This crate hosts the order-preserving byte codec ([`sort_order`]), the
//! scalar-expression seam the row evaluator plugs into ([`expr`]), and the
//! key-range protocol the planner uses to push predicates into scan bounds
//! ([`key_range`], [`key_part`]). The descending transform ([`InvertExpr`])
//! ties the three together: it re-encodes one column's bytes so that
//! ascending byte order over the output matches descending order over the
//! input, both per-row and at query-range rewriting time.

#![forbid(unsafe_code)]

pub mod expr;
pub mod key_part;
pub mod key_range;
pub mod sort_order;
pub mod types;

pub use expr::{CompareOp, ExprRef, InvertExpr, Row, ScalarExpr};
pub use key_part::{ColumnRef, InvertKeyPart, KeyPart, KeyPartRef};
pub use key_range::KeyRange;
pub use sort_order::SortOrder;
pub use types::{DataType, FieldId};
