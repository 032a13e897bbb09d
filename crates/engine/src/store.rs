//! TransactionalStore: the transaction state machine
//!
//! The store owns two key-value mappings and routes every read and write
//! between them:
//!
//! - **committed state**: the durable mapping visible to readers; mutated
//!   only by `commit`
//! - **pending overlay**: a [`WriteSet`] holding the writes staged inside
//!   the currently open transaction
//!
//! The overlay is held as `Option<WriteSet>`: it exists exactly while a
//! transaction is open. `commit` and `rollback` consume it, so stale
//! pending entries can never leak into the next transaction.
//!
//! ## State machine
//!
//! Two states, Idle (no overlay) and InTransaction (overlay present):
//!
//! - Idle --`begin`--> InTransaction
//! - InTransaction --`commit`--> Idle (committed state updated)
//! - InTransaction --`rollback`--> Idle (committed state unchanged)
//! - InTransaction --`put`--> InTransaction (overlay updated)
//! - `begin` while InTransaction, or `put`/`commit`/`rollback` while Idle,
//!   fail without any state change
//! - `get` is a pure query, permitted in either state
//!
//! There is no terminal state: the store is reusable indefinitely.
//!
//! ## Single-writer model
//!
//! Mutations take `&mut self`, so a `TransactionalStore` has exactly one
//! writer at a time. For a handle shared across callers, see
//! [`SharedStore`](crate::SharedStore), which wraps the whole state machine
//! in one lock.

use crate::transaction::WriteSet;
use overlay_core::{Result, StoreError, Value};
use std::collections::HashMap;
use tracing::debug;

/// Single-writer key-value store with one-level transactional updates
///
/// All state lives in the instance: independent stores never interfere,
/// and a fresh instance starts Idle with empty committed state.
///
/// # Example
///
/// ```
/// use overlay_engine::TransactionalStore;
/// use overlay_core::Value;
///
/// # fn main() -> overlay_core::Result<()> {
/// let mut store = TransactionalStore::new();
///
/// store.begin()?;
/// store.put("user:1", Value::String("alice".into()))?;
/// store.commit()?;
///
/// assert_eq!(store.get("user:1"), Some(&Value::String("alice".into())));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct TransactionalStore {
    /// Committed state, mutated only by `commit`
    committed: HashMap<String, Value>,
    /// Pending overlay; `Some` iff a transaction is open
    overlay: Option<WriteSet>,
}

impl TransactionalStore {
    /// Create an empty store in the Idle state
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Reads ==========

    /// Get the value visible for a key
    ///
    /// While a transaction is open, staged writes shadow committed entries
    /// for the keys they contain; all other keys read through to committed
    /// state. `None` means "no such key" and is a legitimate result, not an
    /// error.
    ///
    /// Safe to call in either state; never mutates.
    pub fn get(&self, key: &str) -> Option<&Value> {
        if let Some(overlay) = &self.overlay {
            if let Some(value) = overlay.get(key) {
                return Some(value);
            }
        }
        self.committed.get(key)
    }

    /// Check whether a key is visible (overlay-aware)
    pub fn exists(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of committed entries
    ///
    /// Staged writes for brand-new keys do not count until committed.
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    /// Check if committed state is empty
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    // ========== Writes ==========

    /// Stage a write in the open transaction
    ///
    /// Upserts into the pending overlay, overwriting any prior staged value
    /// for the key in the same transaction. Committed state is untouched
    /// until `commit`.
    ///
    /// # Errors
    /// Returns `StoreError::NoActiveTransaction` when idle; nothing is
    /// mutated in that case.
    pub fn put(&mut self, key: &str, value: Value) -> Result<()> {
        let overlay = self
            .overlay
            .as_mut()
            .ok_or(StoreError::NoActiveTransaction)?;
        overlay.stage(key, value);
        Ok(())
    }

    // ========== Transaction lifecycle ==========

    /// Open a transaction
    ///
    /// Installs a fresh, empty pending overlay. The previous overlay was
    /// consumed by the preceding `commit` or `rollback`, so no stale
    /// entries can be observed here.
    ///
    /// # Errors
    /// Returns `StoreError::TransactionAlreadyActive` if a transaction is
    /// open; nothing is mutated in that case.
    pub fn begin(&mut self) -> Result<()> {
        if self.overlay.is_some() {
            return Err(StoreError::TransactionAlreadyActive);
        }
        self.overlay = Some(WriteSet::new());
        debug!(target: "overlay::txn", "Transaction started");
        Ok(())
    }

    /// Commit the open transaction
    ///
    /// Merges every staged entry into committed state (staged entries
    /// overwrite committed entries for the same key; untouched keys are
    /// unaffected), then returns to Idle. Runs to completion without
    /// suspension, so no reader can observe a partially merged state.
    ///
    /// Returns the number of entries applied.
    ///
    /// # Errors
    /// Returns `StoreError::NoActiveTransaction` when idle; nothing is
    /// mutated in that case.
    pub fn commit(&mut self) -> Result<usize> {
        let overlay = self.overlay.take().ok_or(StoreError::NoActiveTransaction)?;
        let staged = overlay.into_entries();
        let applied = staged.len();
        self.committed.extend(staged);
        debug!(target: "overlay::txn", applied, "Transaction committed");
        Ok(applied)
    }

    /// Roll back the open transaction
    ///
    /// Discards the pending overlay entirely and returns to Idle.
    /// Committed state is unaffected.
    ///
    /// # Errors
    /// Returns `StoreError::NoActiveTransaction` when idle; nothing is
    /// mutated in that case.
    pub fn rollback(&mut self) -> Result<()> {
        let overlay = self.overlay.take().ok_or(StoreError::NoActiveTransaction)?;
        debug!(target: "overlay::txn", discarded = overlay.len(), "Transaction rolled back");
        Ok(())
    }

    /// Run a closure as one transaction
    ///
    /// Opens a transaction, runs `f`, commits on `Ok` and rolls back on
    /// `Err`. The closure must not call `begin`, `commit` or `rollback`
    /// itself.
    ///
    /// # Errors
    /// Propagates `begin` failures and the closure's error; the closure's
    /// error wins over any rollback bookkeeping.
    ///
    /// # Example
    ///
    /// ```
    /// use overlay_engine::TransactionalStore;
    /// use overlay_core::Value;
    ///
    /// # fn main() -> overlay_core::Result<()> {
    /// let mut store = TransactionalStore::new();
    /// store.transaction(|store| {
    ///     store.put("a", Value::Int(1))?;
    ///     store.put("b", Value::Int(2))
    /// })?;
    /// assert_eq!(store.len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn transaction<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.begin()?;
        match f(self) {
            Ok(value) => {
                self.commit()?;
                Ok(value)
            }
            Err(e) => {
                // Discard on error. The rollback can only fail if the
                // closure ended the transaction itself; the closure's error
                // still wins.
                let _ = self.rollback();
                Err(e)
            }
        }
    }

    // ========== Introspection ==========

    /// Check whether a transaction is open
    pub fn in_transaction(&self) -> bool {
        self.overlay.is_some()
    }

    /// Number of staged entries in the open transaction, 0 when idle
    pub fn pending_len(&self) -> usize {
        self.overlay.as_ref().map_or(0, WriteSet::len)
    }
}
