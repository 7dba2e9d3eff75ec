//! Band queries
//!
//! Creation, scheduling, the band-side join projections and the global
//! "most performances" aggregate.

use gigbook_core::model::{Band, BandConcert, BandId, BandVenue, Concert};
use gigbook_core::{log_op_end, log_op_error, log_op_miss, log_op_start};
use rusqlite::Row;

use super::{elapsed_ms, ConcertRepo, VenueRepo};
use crate::db::Db;
use crate::errors::Result;

/// Repository for the `bands` table
pub struct BandRepo;

impl BandRepo {
    /// Insert a band and return it with its generated id
    ///
    /// # Errors
    ///
    /// - `ConstraintViolation`: the insert broke a column constraint
    /// - `Persistence`: any other SQLite failure
    pub fn create(db: &Db, name: &str, hometown: &str) -> Result<Band> {
        log_op_start!("band_create", name = name, hometown = hometown);
        let start = std::time::Instant::now();

        let id = db
            .execute(
                "INSERT INTO bands (name, hometown) VALUES (?1, ?2)",
                [name, hometown],
            )
            .map_err(|e| {
                log_op_error!("band_create", e.clone(), duration_ms = elapsed_ms(start));
                e
            })?;

        log_op_end!("band_create", duration_ms = elapsed_ms(start), band_id = id);

        Ok(Band::new(id, name, hometown))
    }

    /// Get a band by id
    pub fn get(db: &Db, band_id: BandId) -> Result<Option<Band>> {
        db.query_opt(
            "SELECT id, name, hometown FROM bands WHERE id = ?1",
            [band_id],
            band_from_row,
        )
    }

    /// All bands in insertion order
    pub fn list(db: &Db) -> Result<Vec<Band>> {
        db.query_rows(
            "SELECT id, name, hometown FROM bands ORDER BY id",
            [],
            band_from_row,
        )
    }

    /// Schedule `band` to play the venue titled `venue_title`
    ///
    /// The venue is resolved by title and the first match wins; titles are
    /// not unique. Returns the new concert, or `None` without inserting
    /// anything when no venue has that title.
    pub fn schedule_at(
        db: &Db,
        band: &Band,
        venue_title: &str,
        date: &str,
        time: Option<&str>,
    ) -> Result<Option<Concert>> {
        log_op_start!(
            "band_schedule",
            band_id = band.id,
            venue_title = venue_title,
            date = date
        );
        let start = std::time::Instant::now();

        let result = Self::schedule_at_impl(db, band, venue_title, date, time).map_err(|e| {
            log_op_error!("band_schedule", e.clone(), duration_ms = elapsed_ms(start));
            e
        })?;

        match &result {
            Some(concert) => {
                log_op_end!(
                    "band_schedule",
                    duration_ms = elapsed_ms(start),
                    concert_id = concert.id
                );
            }
            None => {
                log_op_miss!("band_schedule", "Venue", venue_title);
                log_op_end!(
                    "band_schedule",
                    duration_ms = elapsed_ms(start),
                    scheduled = false
                );
            }
        }

        Ok(result)
    }

    fn schedule_at_impl(
        db: &Db,
        band: &Band,
        venue_title: &str,
        date: &str,
        time: Option<&str>,
    ) -> Result<Option<Concert>> {
        let Some(venue) = VenueRepo::find_by_title(db, venue_title)? else {
            return Ok(None);
        };

        ConcertRepo::insert(db, band.id, venue.id, date, time).map(Some)
    }

    /// Every concert `band` plays, with the venue's title and city
    pub fn list_concerts(db: &Db, band: &Band) -> Result<Vec<BandConcert>> {
        db.query_rows(
            "SELECT c.id, c.date, v.title, v.city
             FROM concerts c
             JOIN venues v ON c.venue_id = v.id
             WHERE c.band_id = ?1
             ORDER BY c.id",
            [band.id],
            |row| {
                Ok(BandConcert {
                    concert_id: row.get(0)?,
                    date: row.get(1)?,
                    venue_title: row.get(2)?,
                    city: row.get(3)?,
                })
            },
        )
    }

    /// Venues `band` plays at
    ///
    /// Without `distinct` a venue appears once per concert there. With
    /// `distinct` each venue row appears once, in order of first concert.
    pub fn list_venues(db: &Db, band: &Band, distinct: bool) -> Result<Vec<BandVenue>> {
        let sql = if distinct {
            "SELECT v.title, v.city
             FROM venues v
             JOIN concerts c ON c.venue_id = v.id
             WHERE c.band_id = ?1
             GROUP BY v.id
             ORDER BY MIN(c.id)"
        } else {
            "SELECT v.title, v.city
             FROM venues v
             JOIN concerts c ON c.venue_id = v.id
             WHERE c.band_id = ?1
             ORDER BY c.id"
        };

        db.query_rows(sql, [band.id], |row| {
            Ok(BandVenue {
                venue_title: row.get(0)?,
                city: row.get(1)?,
            })
        })
    }

    /// The greeting for every concert `band` plays, one per concert
    pub fn all_introductions(db: &Db, band: &Band) -> Result<Vec<String>> {
        let cities: Vec<String> = db.query_rows(
            "SELECT v.city
             FROM concerts c
             JOIN venues v ON c.venue_id = v.id
             WHERE c.band_id = ?1
             ORDER BY c.id",
            [band.id],
            |row| row.get(0),
        )?;

        Ok(cities
            .iter()
            .map(|city| band.introduction_in(city))
            .collect())
    }

    /// Name of the band with the most concerts across all venues
    ///
    /// Ties are broken by whatever order SQLite yields; any band with the
    /// maximal count is a valid answer. `None` when no concerts exist.
    pub fn most_performances(db: &Db) -> Result<Option<String>> {
        let top = db.query_opt(
            "SELECT b.name, COUNT(c.id) AS performance_count
             FROM concerts c
             JOIN bands b ON c.band_id = b.id
             GROUP BY b.id
             ORDER BY performance_count DESC
             LIMIT 1",
            [],
            |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)),
        )?;

        tracing::debug!(op = "band_most_performances", top = ?top);

        Ok(top.map(|(name, _)| name))
    }
}

fn band_from_row(row: &Row<'_>) -> rusqlite::Result<Band> {
    Ok(Band {
        id: row.get(0)?,
        name: row.get(1)?,
        hometown: row.get(2)?,
    })
}
