//! Shared handle over the transaction state machine
//!
//! `TransactionalStore` is single-writer by construction (`&mut self`).
//! When the store must be reachable from multiple callers, the entire
//! state machine has to sit behind a single mutual-exclusion lock: a read
//! racing a commit must never observe a partially merged state, so the
//! merge-then-clear sequence needs to be atomic to every observer.
//!
//! [`SharedStore`] is that port: a cloneable handle over
//! `Arc<Mutex<TransactionalStore>>`. Every clone addresses the same store
//! and the same (single) transaction; each operation takes the lock for
//! its whole duration. No operation blocks beyond lock acquisition,
//! retries, or times out.

use crate::store::TransactionalStore;
use overlay_core::{Result, Value};
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, lock-guarded handle to a [`TransactionalStore`]
///
/// Reads return owned values: a borrow into the store cannot escape the
/// lock.
///
/// # Example
///
/// ```
/// use overlay_engine::SharedStore;
/// use overlay_core::Value;
///
/// # fn main() -> overlay_core::Result<()> {
/// let store = SharedStore::new();
/// let handle = store.clone();
///
/// store.begin()?;
/// store.put("a", Value::Int(1))?;
/// store.commit()?;
///
/// assert_eq!(handle.get("a"), Some(Value::Int(1)));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<TransactionalStore>>,
}

impl SharedStore {
    /// Create a shared handle over a fresh, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value visible for a key
    pub fn get(&self, key: &str) -> Option<Value> {
        self.inner.lock().get(key).cloned()
    }

    /// Check whether a key is visible (overlay-aware)
    pub fn exists(&self, key: &str) -> bool {
        self.inner.lock().exists(key)
    }

    /// Stage a write in the open transaction
    ///
    /// # Errors
    /// Returns `StoreError::NoActiveTransaction` when idle.
    pub fn put(&self, key: &str, value: Value) -> Result<()> {
        self.inner.lock().put(key, value)
    }

    /// Open a transaction
    ///
    /// # Errors
    /// Returns `StoreError::TransactionAlreadyActive` if one is open.
    pub fn begin(&self) -> Result<()> {
        self.inner.lock().begin()
    }

    /// Commit the open transaction, returning the number of entries applied
    ///
    /// # Errors
    /// Returns `StoreError::NoActiveTransaction` when idle.
    pub fn commit(&self) -> Result<usize> {
        self.inner.lock().commit()
    }

    /// Roll back the open transaction
    ///
    /// # Errors
    /// Returns `StoreError::NoActiveTransaction` when idle.
    pub fn rollback(&self) -> Result<()> {
        self.inner.lock().rollback()
    }

    /// Run a closure as one transaction, holding the lock throughout
    ///
    /// The whole begin/run/commit-or-rollback sequence executes under one
    /// lock acquisition, so no other handle can observe an intermediate
    /// state. The closure must not call back into this handle (the lock is
    /// not reentrant); it receives the locked store instead.
    ///
    /// # Errors
    /// Propagates `begin` failures and the closure's error.
    pub fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut TransactionalStore) -> Result<T>,
    {
        self.inner.lock().transaction(f)
    }

    /// Check whether a transaction is open
    pub fn in_transaction(&self) -> bool {
        self.inner.lock().in_transaction()
    }

    /// Number of committed entries
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if committed state is empty
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Number of staged entries in the open transaction, 0 when idle
    pub fn pending_len(&self) -> usize {
        self.inner.lock().pending_len()
    }
}
