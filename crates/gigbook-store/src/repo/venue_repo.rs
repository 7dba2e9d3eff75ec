//! Venue queries

use gigbook_core::model::{Concert, Venue, VenueBand, VenueConcert, VenueId};
use gigbook_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::Row;

use super::concert_repo::concert_from_row;
use super::elapsed_ms;
use crate::db::Db;
use crate::errors::Result;

/// Repository for the `venues` table
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a venue and return it with its generated id
    ///
    /// # Errors
    ///
    /// - `ConstraintViolation`: the insert broke a column constraint
    /// - `Persistence`: any other SQLite failure
    pub fn create(db: &Db, title: &str, city: &str) -> Result<Venue> {
        log_op_start!("venue_create", title = title, city = city);
        let start = std::time::Instant::now();

        let id = db
            .execute(
                "INSERT INTO venues (title, city) VALUES (?1, ?2)",
                [title, city],
            )
            .map_err(|e| {
                log_op_error!("venue_create", e.clone(), duration_ms = elapsed_ms(start));
                e
            })?;

        log_op_end!("venue_create", duration_ms = elapsed_ms(start), venue_id = id);

        Ok(Venue::new(id, title, city))
    }

    /// Get a venue by id
    pub fn get(db: &Db, venue_id: VenueId) -> Result<Option<Venue>> {
        db.query_opt(
            "SELECT id, title, city FROM venues WHERE id = ?1",
            [venue_id],
            venue_from_row,
        )
    }

    /// All venues in insertion order
    pub fn list(db: &Db) -> Result<Vec<Venue>> {
        db.query_rows(
            "SELECT id, title, city FROM venues ORDER BY id",
            [],
            venue_from_row,
        )
    }

    /// First venue (lowest id) with exactly this title
    ///
    /// Titles are a natural key the schema does not keep unique; later
    /// venues sharing a title are unreachable through this lookup.
    pub fn find_by_title(db: &Db, title: &str) -> Result<Option<Venue>> {
        db.query_opt(
            "SELECT id, title, city FROM venues WHERE title = ?1 ORDER BY id LIMIT 1",
            [title],
            venue_from_row,
        )
    }

    /// Every concert at `venue`, with the band's name and hometown
    pub fn list_concerts(db: &Db, venue: &Venue) -> Result<Vec<VenueConcert>> {
        db.query_rows(
            "SELECT c.id, c.date, b.name, b.hometown
             FROM concerts c
             JOIN bands b ON c.band_id = b.id
             WHERE c.venue_id = ?1
             ORDER BY c.id",
            [venue.id],
            |row| {
                Ok(VenueConcert {
                    concert_id: row.get(0)?,
                    date: row.get(1)?,
                    band_name: row.get(2)?,
                    band_hometown: row.get(3)?,
                })
            },
        )
    }

    /// Bands that play at `venue`, each band once, in order of first concert
    pub fn list_bands(db: &Db, venue: &Venue) -> Result<Vec<VenueBand>> {
        db.query_rows(
            "SELECT b.name, b.hometown
             FROM bands b
             JOIN concerts c ON c.band_id = b.id
             WHERE c.venue_id = ?1
             GROUP BY b.id
             ORDER BY MIN(c.id)",
            [venue.id],
            |row| {
                Ok(VenueBand {
                    band_name: row.get(0)?,
                    band_hometown: row.get(1)?,
                })
            },
        )
    }

    /// First concert at `venue` on `date`, if any
    pub fn concert_on(db: &Db, venue: &Venue, date: &str) -> Result<Option<Concert>> {
        db.query_opt(
            "SELECT id, band_id, venue_id, date, time
             FROM concerts
             WHERE venue_id = ?1 AND date = ?2
             ORDER BY id
             LIMIT 1",
            rusqlite::params![venue.id, date],
            concert_from_row,
        )
    }

    /// Name of the band with the most concerts at `venue`
    ///
    /// Same tie-break caveat as `BandRepo::most_performances`: any band with
    /// the maximal count may be returned.
    pub fn most_frequent_band(db: &Db, venue: &Venue) -> Result<Option<String>> {
        let top = db.query_opt(
            "SELECT b.name, COUNT(c.id) AS performance_count
             FROM concerts c
             JOIN bands b ON c.band_id = b.id
             WHERE c.venue_id = ?1
             GROUP BY b.id
             ORDER BY performance_count DESC
             LIMIT 1",
            [venue.id],
            |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)),
        )?;

        tracing::debug!(op = "venue_most_frequent_band", venue_id = venue.id, top = ?top);

        Ok(top.map(|(name, _)| name))
    }
}

fn venue_from_row(row: &Row<'_>) -> rusqlite::Result<Venue> {
    Ok(Venue {
        id: row.get(0)?,
        title: row.get(1)?,
        city: row.get(2)?,
    })
}
