//! Demo command
//!
//! Usage: gigbook demo
//!
//! Builds two bands, two venues and three concerts, then prints one line per
//! query. Against a persistent `--db` each run adds another copy of the data.

use super::Context;
use gigbook_core::errors::GigbookError;
use gigbook_core::model::Concert;
use gigbook_store::{BandRepo, ConcertRepo, Db, VenueRepo};

pub fn execute(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let db = ctx.open_db()?;

    let stones = BandRepo::create(&db, "The Rolling Stones", "London")?;
    let metallica = BandRepo::create(&db, "Metallica", "Los Angeles")?;

    VenueRepo::create(&db, "Madison Square Garden", "New York")?;
    let cairo = VenueRepo::create(&db, "Stadium Cairo", "Cairo")?;

    let first = schedule(&db, &stones, "Madison Square Garden", "2025-04-01", "20:00")?;
    let second = schedule(&db, &stones, "Stadium Cairo", "2025-05-01", "18:00")?;
    schedule(&db, &metallica, "Stadium Cairo", "2025-05-02", "19:00")?;

    let (band, venue) = ConcertRepo::resolve(&db, &first)?;
    println!("Band for Concert {}: {}", first.id, band.name);
    println!("Venue for Concert {}: {}", first.id, venue.title);
    println!(
        "Hometown Show: {}",
        ConcertRepo::hometown_show(&db, first.id)?
    );
    println!(
        "Introduction: {}",
        display_opt(ConcertRepo::introduction(&db, second.id)?)
    );

    let on_date = match VenueRepo::concert_on(&db, &cairo, "2025-05-01")? {
        Some(concert) => ConcertRepo::introduction(&db, concert.id)?,
        None => None,
    };
    println!("Concert on Date: {}", display_opt(on_date));
    println!(
        "Most Frequent Band at {}: {}",
        cairo.title,
        display_opt(VenueRepo::most_frequent_band(&db, &cairo)?)
    );
    println!(
        "All Introductions for Band {}: {:?}",
        stones.id,
        BandRepo::all_introductions(&db, &stones)?
    );
    println!(
        "Band with Most Performances: {}",
        display_opt(BandRepo::most_performances(&db)?)
    );

    Ok(())
}

fn schedule(
    db: &Db,
    band: &gigbook_core::Band,
    venue_title: &str,
    date: &str,
    time: &str,
) -> Result<Concert, Box<dyn std::error::Error>> {
    BandRepo::schedule_at(db, band, venue_title, date, Some(time))?.ok_or_else(|| {
        GigbookError::VenueTitleNotFound {
            title: venue_title.to_string(),
        }
        .into()
    })
}

fn display_opt(value: Option<String>) -> String {
    value.unwrap_or_else(|| "None".to_string())
}
