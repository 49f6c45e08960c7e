//! System-catalog constants and the client-style disable mutation.
//!
//! Table and index metadata live in a reserved catalog table keyed by the
//! encoded table name. The only catalog write this crate issues is the one
//! that marks an index row [`IndexState::Disable`]; it is constructed to be
//! byte-identical to the put a client would send for the same transition.

/// Name of the reserved system catalog table.
pub const CATALOG_TABLE_NAME: &str = "__kvlex_catalog";

/// Catalog column holding each index's lifecycle state.
pub const INDEX_STATE_COLUMN: &[u8] = b"INDEX_STATE";

/// Separator between schema and table name inside a catalog row key.
pub const TABLE_KEY_SEPARATOR: u8 = 0x00;

/// Lifecycle state of a secondary index as recorded in the catalog.
///
/// Indexes are created [`IndexState::Active`] once built. The escalation
/// policy moves an index to [`IndexState::Disable`] when its updates cannot
/// be applied; re-enable and rebuild transitions are driven elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexState {
    /// Initial population from the primary table is still running.
    Building,
    /// Serving reads and receiving dual writes.
    Active,
    /// Temporarily not serving reads; still receiving writes.
    Inactive,
    /// Not consistent with the primary table; must be rebuilt before use.
    Disable,
}

impl IndexState {
    /// One-byte catalog encoding of this state.
    pub fn serialized_byte(self) -> u8 {
        match self {
            IndexState::Building => b'b',
            IndexState::Active => b'a',
            IndexState::Inactive => b'i',
            IndexState::Disable => b'x',
        }
    }

    pub fn from_serialized(byte: u8) -> Option<IndexState> {
        match byte {
            b'b' => Some(IndexState::Building),
            b'a' => Some(IndexState::Active),
            b'i' => Some(IndexState::Inactive),
            b'x' => Some(IndexState::Disable),
            _ => None,
        }
    }
}

/// Catalog row key for a full table name.
///
/// `"S.T"` encodes as `S 0x00 T`; a schema-less name keeps the leading
/// separator so keys remain prefix-comparable by schema.
pub fn table_key_from_name(full_name: &str) -> Vec<u8> {
    let (schema, table) = match full_name.split_once('.') {
        Some((schema, table)) => (schema, table),
        None => ("", full_name),
    };
    let mut key = Vec::with_capacity(schema.len() + 1 + table.len());
    key.extend_from_slice(schema.as_bytes());
    key.push(TABLE_KEY_SEPARATOR);
    key.extend_from_slice(table.as_bytes());
    key
}

/// A single-row put against the system catalog, in the shape the metadata
/// authority expects from clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPut {
    pub row_key: Vec<u8>,
    pub column: Vec<u8>,
    pub value: Vec<u8>,
}

impl CatalogPut {
    /// The exact put a client issues to move the index at `table_key` into
    /// `state`.
    pub fn index_state(table_key: Vec<u8>, state: IndexState) -> Self {
        CatalogPut {
            row_key: table_key,
            column: INDEX_STATE_COLUMN.to_vec(),
            value: vec![state.serialized_byte()],
        }
    }
}
