//! Subcommand implementations
//!
//! Every command opens its own store handle, runs, and drops it before
//! returning.

pub mod band;
pub mod concert;
pub mod demo;
pub mod schedule;
pub mod venue;

use crate::output::Format;
use gigbook_core::errors::{GigbookError, Result};
use gigbook_core::model::{Band, BandId, Concert, ConcertId, Venue, VenueId};
use gigbook_store::{BandRepo, ConcertRepo, Db, VenueRepo};
use std::path::PathBuf;

/// Settings shared by every subcommand
#[derive(Debug)]
pub struct Context {
    pub db_path: Option<PathBuf>,
    pub format: Format,
}

impl Context {
    /// Open the configured store, falling back to an in-memory one
    pub fn open_db(&self) -> Result<Db> {
        match &self.db_path {
            Some(path) => Db::open(path),
            None => {
                tracing::debug!("no --db given, using an in-memory store");
                Db::open_in_memory()
            }
        }
    }
}

fn require_band(db: &Db, band_id: BandId) -> Result<Band> {
    BandRepo::get(db, band_id)?.ok_or_else(|| GigbookError::BandNotFound { band_id }.into())
}

fn require_venue(db: &Db, venue_id: VenueId) -> Result<Venue> {
    VenueRepo::get(db, venue_id)?.ok_or_else(|| GigbookError::VenueNotFound { venue_id }.into())
}

fn require_concert(db: &Db, concert_id: ConcertId) -> Result<Concert> {
    ConcertRepo::get(db, concert_id)?
        .ok_or_else(|| GigbookError::ConcertNotFound { concert_id }.into())
}
