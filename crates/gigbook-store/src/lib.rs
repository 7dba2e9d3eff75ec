//! gigbook Store - SQLite persistence for bands, venues and concerts
//!
//! Provides:
//! - `Db`, the storage handle every repository operation takes explicitly
//! - Idempotent, checksummed schema migrations
//! - Repositories for Band, Venue and Concert queries

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use db::Db;
pub use errors::Result;
pub use repo::{BandRepo, ConcertRepo, VenueRepo};
