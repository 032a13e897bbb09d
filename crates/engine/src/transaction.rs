//! Pending write buffer for an open transaction
//!
//! A [`WriteSet`] holds the writes staged inside the currently open
//! transaction. Writes are buffered here and are not applied to committed
//! state until commit; a rollback simply drops the whole buffer.
//!
//! ## Semantics
//!
//! - Upsert-only: staging a key that is already staged overwrites it
//!   (latest value wins within the transaction).
//! - Reads through the store consult the write set before committed state,
//!   giving read-your-writes visibility while the transaction is open.
//! - There is no way to remove a single entry: key deletion is not part of
//!   the store's surface.

use overlay_core::Value;
use std::collections::HashMap;

/// Writes staged inside the currently open transaction
///
/// The store holds a `WriteSet` only while a transaction is open and
/// consumes it on commit or rollback, so a write set never outlives its
/// transaction. An empty write set is legal: a transaction that stages
/// nothing commits zero entries.
#[derive(Debug, Default)]
pub struct WriteSet {
    staged: HashMap<String, Value>,
}

impl WriteSet {
    /// Create an empty write set
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a write, overwriting any prior staged value for the key
    ///
    /// Returns the value this write replaced, if the key was already staged
    /// in this transaction.
    pub fn stage(&mut self, key: &str, value: Value) -> Option<Value> {
        self.staged.insert(key.to_string(), value)
    }

    /// Get the staged value for a key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.staged.get(key)
    }

    /// Check whether a key has a staged write
    pub fn contains(&self, key: &str) -> bool {
        self.staged.contains_key(key)
    }

    /// Number of staged entries
    pub fn len(&self) -> usize {
        self.staged.len()
    }

    /// Check if nothing has been staged
    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Consume the write set, yielding the staged entries for commit
    pub fn into_entries(self) -> HashMap<String, Value> {
        self.staged
    }
}
