//! OverlayDB - single-writer in-memory key-value store with one-level
//! transactional updates
//!
//! Reads and writes are routed between a committed state and an
//! uncommitted pending overlay by a two-state transaction machine:
//! `begin` opens a transaction, `put` stages writes into the overlay,
//! `commit` merges the overlay into committed state, `rollback` discards
//! it. Reads see staged writes while the transaction is open and are never
//! an error: an absent key is `None`.
//!
//! # Quick Start
//!
//! ```
//! use overlaydb::{TransactionalStore, Value};
//!
//! # fn main() -> overlaydb::Result<()> {
//! let mut store = TransactionalStore::new();
//! assert_eq!(store.get("user:123"), None);
//!
//! store.begin()?;
//! store.put("user:123", Value::String("Alice".into()))?;
//! store.commit()?;
//!
//! assert_eq!(store.get("user:123"), Some(&Value::String("Alice".into())));
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`TransactionalStore`] is the single-writer state machine; mutations
//!   take `&mut self`.
//! - [`SharedStore`] is the multi-caller port: the same machine behind one
//!   lock, as cloneable handles.
//!
//! There is no persistence, no nesting, no per-key deletion: the entire
//! surface is `get`/`put`/`begin`/`commit`/`rollback` plus introspection.

pub use overlay_core::{Result, StoreError, Value};
pub use overlay_engine::{SharedStore, TransactionalStore, WriteSet};
