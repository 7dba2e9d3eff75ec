//! Concert queries
//!
//! Read-only projections over the concerts/bands/venues join, plus the
//! insert used by scheduling.

use gigbook_core::errors::GigbookError;
use gigbook_core::greeting;
use gigbook_core::model::{Band, BandId, Concert, ConcertId, Venue, VenueId};
use rusqlite::Row;

use super::{BandRepo, VenueRepo};
use crate::db::Db;
use crate::errors::Result;

/// Repository for the `concerts` table
pub struct ConcertRepo;

impl ConcertRepo {
    /// Insert a concert row
    ///
    /// Only scheduling creates concerts, so the ids are assumed to exist.
    pub(crate) fn insert(
        db: &Db,
        band_id: BandId,
        venue_id: VenueId,
        date: &str,
        time: Option<&str>,
    ) -> Result<Concert> {
        let id = db.execute(
            "INSERT INTO concerts (band_id, venue_id, date, time) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![band_id, venue_id, date, time],
        )?;

        Ok(Concert {
            id,
            band_id,
            venue_id,
            date: date.to_string(),
            time: time.map(str::to_string),
        })
    }

    /// Get a concert by id
    pub fn get(db: &Db, concert_id: ConcertId) -> Result<Option<Concert>> {
        db.query_opt(
            "SELECT id, band_id, venue_id, date, time FROM concerts WHERE id = ?1",
            [concert_id],
            concert_from_row,
        )
    }

    /// All concerts in insertion order
    pub fn list(db: &Db) -> Result<Vec<Concert>> {
        db.query_rows(
            "SELECT id, band_id, venue_id, date, time FROM concerts ORDER BY id",
            [],
            concert_from_row,
        )
    }

    /// The band playing `concert`; `None` if its band row is gone
    pub fn band(db: &Db, concert: &Concert) -> Result<Option<Band>> {
        BandRepo::get(db, concert.band_id)
    }

    /// The venue hosting `concert`; `None` if its venue row is gone
    pub fn venue(db: &Db, concert: &Concert) -> Result<Option<Venue>> {
        VenueRepo::get(db, concert.venue_id)
    }

    /// Resolve both sides of `concert`, failing if either is missing
    ///
    /// # Errors
    ///
    /// - `ConstraintViolation`: the concert references a missing band or venue
    pub fn resolve(db: &Db, concert: &Concert) -> Result<(Band, Venue)> {
        let band = Self::band(db, concert)?.ok_or(GigbookError::DanglingConcert {
            concert_id: concert.id,
            missing: "band",
        })?;
        let venue = Self::venue(db, concert)?.ok_or(GigbookError::DanglingConcert {
            concert_id: concert.id,
            missing: "venue",
        })?;
        Ok((band, venue))
    }

    /// Whether concert `concert_id` is in its band's hometown
    ///
    /// `false` when the concert, its band or its venue cannot be found.
    pub fn hometown_show(db: &Db, concert_id: ConcertId) -> Result<bool> {
        let pair = Self::hometown_and_city(db, concert_id)?;
        Ok(pair.is_some_and(|(hometown, city)| greeting::is_hometown_show(&hometown, &city)))
    }

    /// The greeting for concert `concert_id`
    ///
    /// `None` when the concert, its band or its venue cannot be found.
    pub fn introduction(db: &Db, concert_id: ConcertId) -> Result<Option<String>> {
        db.query_opt(
            "SELECT b.name, v.city, b.hometown
             FROM concerts c
             JOIN bands b ON c.band_id = b.id
             JOIN venues v ON c.venue_id = v.id
             WHERE c.id = ?1",
            [concert_id],
            |row| {
                let name: String = row.get(0)?;
                let city: String = row.get(1)?;
                let hometown: String = row.get(2)?;
                Ok(greeting::introduction(&city, &name, &hometown))
            },
        )
    }

    fn hometown_and_city(db: &Db, concert_id: ConcertId) -> Result<Option<(String, String)>> {
        db.query_opt(
            "SELECT b.hometown, v.city
             FROM concerts c
             JOIN bands b ON c.band_id = b.id
             JOIN venues v ON c.venue_id = v.id
             WHERE c.id = ?1",
            [concert_id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
    }
}

pub(crate) fn concert_from_row(row: &Row<'_>) -> rusqlite::Result<Concert> {
    Ok(Concert {
        id: row.get(0)?,
        band_id: row.get(1)?,
        venue_id: row.get(2)?,
        date: row.get(3)?,
        time: row.get(4)?,
    })
}
