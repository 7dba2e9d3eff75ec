//! Venue commands
//!
//! Usage: gigbook venue <add|list|concerts|bands|on|top>

use super::{require_venue, Context};
use crate::output::{print_json, print_list, print_opt, Format};
use clap::{Args, Subcommand};
use gigbook_core::model::VenueId;
use gigbook_store::{ConcertRepo, VenueRepo};

#[derive(Debug, Args)]
pub struct VenueArgs {
    #[command(subcommand)]
    pub command: VenueCommand,
}

#[derive(Debug, Subcommand)]
pub enum VenueCommand {
    /// Add a venue
    Add { title: String, city: String },
    /// List all venues
    List,
    /// Concerts at a venue, with band name and hometown
    Concerts { venue_id: VenueId },
    /// Bands that play at a venue, each once
    Bands { venue_id: VenueId },
    /// The first concert at a venue on a date
    On { venue_id: VenueId, date: String },
    /// The band with the most concerts at a venue
    Top { venue_id: VenueId },
}

pub fn execute(ctx: &Context, args: VenueArgs) -> Result<(), Box<dyn std::error::Error>> {
    let db = ctx.open_db()?;

    match args.command {
        VenueCommand::Add { title, city } => {
            let venue = VenueRepo::create(&db, &title, &city)?;
            println!("Venue {} created: {} ({})", venue.id, venue.title, venue.city);
        }
        VenueCommand::List => {
            let venues = VenueRepo::list(&db)?;
            print_list(ctx.format, &venues, |v| {
                format!("{}\t{}\t{}", v.id, v.title, v.city)
            })?;
        }
        VenueCommand::Concerts { venue_id } => {
            let venue = require_venue(&db, venue_id)?;
            let concerts = VenueRepo::list_concerts(&db, &venue)?;
            print_list(ctx.format, &concerts, |c| {
                format!(
                    "{}\t{}\t{}\t{}",
                    c.concert_id, c.date, c.band_name, c.band_hometown
                )
            })?;
        }
        VenueCommand::Bands { venue_id } => {
            let venue = require_venue(&db, venue_id)?;
            let bands = VenueRepo::list_bands(&db, &venue)?;
            print_list(ctx.format, &bands, |b| {
                format!("{}\t{}", b.band_name, b.band_hometown)
            })?;
        }
        VenueCommand::On { venue_id, date } => {
            let venue = require_venue(&db, venue_id)?;
            let concert = VenueRepo::concert_on(&db, &venue, &date)?;
            match (ctx.format, concert) {
                (Format::Json, concert) => print_json(&concert)?,
                (Format::Text, Some(concert)) => {
                    let intro = ConcertRepo::introduction(&db, concert.id)?;
                    println!(
                        "{}\t{}",
                        concert.id,
                        intro.unwrap_or_else(|| "None".to_string())
                    );
                }
                (Format::Text, None) => println!("None"),
            }
        }
        VenueCommand::Top { venue_id } => {
            let venue = require_venue(&db, venue_id)?;
            let top = VenueRepo::most_frequent_band(&db, &venue)?;
            print_opt(ctx.format, top.as_ref())?;
        }
    }

    Ok(())
}
