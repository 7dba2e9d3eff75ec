use gigbook_core::model::{Band, Concert, Venue};
use gigbook_store::{BandRepo, Db, VenueRepo};

/// Fresh in-memory store with the schema applied
#[allow(dead_code)]
pub fn new_db() -> Db {
    Db::open_in_memory().expect("in-memory store should open")
}

/// The fixture the legacy demo script builds: two bands, two venues and
/// three concerts.
#[allow(dead_code)]
pub struct Fixture {
    pub stones: Band,
    pub metallica: Band,
    pub garden: Venue,
    pub cairo: Venue,
    pub concerts: Vec<Concert>,
}

#[allow(dead_code)]
pub fn seed_fixture(db: &Db) -> Fixture {
    let stones = BandRepo::create(db, "The Rolling Stones", "London").unwrap();
    let metallica = BandRepo::create(db, "Metallica", "Los Angeles").unwrap();
    let garden = VenueRepo::create(db, "Madison Square Garden", "New York").unwrap();
    let cairo = VenueRepo::create(db, "Stadium Cairo", "Cairo").unwrap();

    let concerts = vec![
        BandRepo::schedule_at(db, &stones, "Madison Square Garden", "2025-04-01", Some("20:00"))
            .unwrap()
            .unwrap(),
        BandRepo::schedule_at(db, &stones, "Stadium Cairo", "2025-05-01", Some("18:00"))
            .unwrap()
            .unwrap(),
        BandRepo::schedule_at(db, &metallica, "Stadium Cairo", "2025-05-02", Some("19:00"))
            .unwrap()
            .unwrap(),
    ];

    Fixture {
        stones,
        metallica,
        garden,
        cairo,
        concerts,
    }
}

#[allow(dead_code)]
pub fn concert_count(db: &Db) -> i64 {
    db.conn()
        .query_row("SELECT COUNT(*) FROM concerts", [], |row| row.get(0))
        .unwrap()
}
