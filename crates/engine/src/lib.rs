//! Transaction state machine for OverlayDB
//!
//! This crate implements the store itself:
//! - [`TransactionalStore`]: committed state plus a pending overlay,
//!   driven by a two-state transaction machine (Idle / InTransaction)
//! - [`WriteSet`]: the pending overlay, a buffered upsert-only write set
//! - [`SharedStore`]: a cloneable handle that puts the whole state machine
//!   behind a single lock for multi-caller use

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod shared;
pub mod store;
pub mod transaction;

pub use shared::SharedStore;
pub use store::TransactionalStore;
pub use transaction::WriteSet;
