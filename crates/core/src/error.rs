//! Error types for OverlayDB
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! There are exactly two failure kinds, both meaning "operation invalid in the
//! current transaction state". A missing key is NOT an error: reads return
//! `Option::None` for absent keys.

use thiserror::Error;

/// Result type alias for OverlayDB operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Error types for the store
///
/// Errors are returned immediately to the caller with no retry and no partial
/// mutation: when a precondition fails, the operation performs no state
/// change at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A mutating or transaction-ending operation was invoked while idle
    #[error("no transaction in progress")]
    NoActiveTransaction,

    /// `begin` was invoked while a transaction was already open
    #[error("transaction already in progress")]
    TransactionAlreadyActive,
}
