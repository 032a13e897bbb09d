//! Core types for OverlayDB
//!
//! This crate defines the foundational types used throughout the system:
//! - Value: unified scalar value enum
//! - StoreError: error type hierarchy
//!
//! Keys are plain strings and are not given a dedicated type: they are
//! opaque identifiers with no internal structure.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod value;

// Re-export commonly used types
pub use error::{Result, StoreError};
pub use value::Value;
