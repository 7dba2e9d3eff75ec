//! gigbook Core - domain records and shared facilities
//!
//! This crate provides:
//! - Band, Venue and Concert records plus the projection rows of the join queries
//! - The greeting and hometown rules
//! - The structured error facility
//! - The structured logging facility
//!
//! It performs no I/O; storage lives in `gigbook-store`.

pub mod errors;
pub mod greeting;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, GigbookError, Result};
pub use model::{Band, Concert, Venue};
