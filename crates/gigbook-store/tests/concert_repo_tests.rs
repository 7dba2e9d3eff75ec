//! Concert repository operations

mod common;

use common::{new_db, seed_fixture};
use gigbook_core::errors::ExErrorKind;
use gigbook_store::{BandRepo, ConcertRepo, Db, VenueRepo};
use tempfile::TempDir;

#[test]
fn test_band_and_venue_resolve_stored_ids() {
    let db = new_db();
    let fx = seed_fixture(&db);

    for concert in ConcertRepo::list(&db).unwrap() {
        let band = ConcertRepo::band(&db, &concert).unwrap().unwrap();
        let venue = ConcertRepo::venue(&db, &concert).unwrap().unwrap();
        assert_eq!(band.id, concert.band_id);
        assert_eq!(venue.id, concert.venue_id);
    }
    assert_eq!(ConcertRepo::list(&db).unwrap(), fx.concerts);
}

#[test]
fn test_get_round_trips_optional_time() {
    let db = new_db();
    let band = BandRepo::create(&db, "X", "Y").unwrap();
    VenueRepo::create(&db, "Hall", "Z").unwrap();
    let concert = BandRepo::schedule_at(&db, &band, "Hall", "2025-01-01", None)
        .unwrap()
        .unwrap();

    let loaded = ConcertRepo::get(&db, concert.id).unwrap().unwrap();
    assert_eq!(loaded.time, None);
    assert_eq!(loaded, concert);
    assert_eq!(ConcertRepo::get(&db, concert.id + 1).unwrap(), None);
}

#[test]
fn test_hometown_show() {
    let db = new_db();
    let fx = seed_fixture(&db);

    // London != New York, London != Cairo, Los Angeles != Cairo
    for concert in &fx.concerts {
        assert!(!ConcertRepo::hometown_show(&db, concert.id).unwrap());
    }

    let local = BandRepo::create(&db, "Cairokee", "Cairo").unwrap();
    let concert = BandRepo::schedule_at(&db, &local, "Stadium Cairo", "2025-07-01", None)
        .unwrap()
        .unwrap();
    assert!(ConcertRepo::hometown_show(&db, concert.id).unwrap());
}

#[test]
fn test_hometown_show_is_case_sensitive() {
    let db = new_db();
    let band = BandRepo::create(&db, "X", "cairo").unwrap();
    VenueRepo::create(&db, "Y", "Cairo").unwrap();
    let concert = BandRepo::schedule_at(&db, &band, "Y", "2025-01-01", None)
        .unwrap()
        .unwrap();

    assert!(!ConcertRepo::hometown_show(&db, concert.id).unwrap());
}

#[test]
fn test_missing_concert_is_not_an_error() {
    let db = new_db();

    assert!(!ConcertRepo::hometown_show(&db, 77).unwrap());
    assert_eq!(ConcertRepo::introduction(&db, 77).unwrap(), None);
}

#[test]
fn test_introduction() {
    let db = new_db();
    let fx = seed_fixture(&db);

    assert_eq!(
        ConcertRepo::introduction(&db, fx.concerts[1].id)
            .unwrap()
            .as_deref(),
        Some("Hello Cairo!!!!! We are The Rolling Stones and we're from London")
    );
}

#[test]
fn test_dangling_references() {
    let db = new_db();
    let band = BandRepo::create(&db, "X", "Cairo").unwrap();
    let id = db
        .execute(
            "INSERT INTO concerts (band_id, venue_id, date) VALUES (?1, ?2, ?3)",
            rusqlite::params![band.id, 999, "2025-01-01"],
        )
        .unwrap();
    let concert = ConcertRepo::get(&db, id).unwrap().unwrap();

    assert_eq!(ConcertRepo::band(&db, &concert).unwrap(), Some(band));
    assert_eq!(ConcertRepo::venue(&db, &concert).unwrap(), None);
    assert!(!ConcertRepo::hometown_show(&db, id).unwrap());
    assert_eq!(ConcertRepo::introduction(&db, id).unwrap(), None);

    let err = ConcertRepo::resolve(&db, &concert).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert!(err.message().contains("venue"));
}

#[test]
fn test_dangling_references_in_file_store() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("gigs.db");

    let concert_id = {
        let db = Db::open(&db_path).unwrap();
        let venue = VenueRepo::create(&db, "Stadium Cairo", "Cairo").unwrap();
        db.execute(
            "INSERT INTO concerts (band_id, venue_id, date) VALUES (?1, ?2, ?3)",
            rusqlite::params![404, venue.id, "2025-05-01"],
        )
        .unwrap()
    };

    let db = Db::open(&db_path).unwrap();
    let concert = ConcertRepo::get(&db, concert_id).unwrap().unwrap();
    assert_eq!(concert.band_id, 404);
    assert_eq!(ConcertRepo::band(&db, &concert).unwrap(), None);
    assert!(!ConcertRepo::hometown_show(&db, concert_id).unwrap());

    let err = ConcertRepo::resolve(&db, &concert).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert!(err.message().contains("band"));
}
