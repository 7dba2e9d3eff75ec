//! Concert commands
//!
//! Usage: gigbook concert <show|list>

use super::{require_concert, Context};
use crate::output::{print_json, print_list, Format};
use clap::{Args, Subcommand};
use gigbook_core::model::ConcertId;
use gigbook_core::Concert;
use gigbook_store::ConcertRepo;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct ConcertArgs {
    #[command(subcommand)]
    pub command: ConcertCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConcertCommand {
    /// Band, venue, hometown flag and greeting for one concert
    Show { concert_id: ConcertId },
    /// List all concerts
    List,
}

#[derive(Debug, Serialize)]
struct ConcertDetail {
    concert: Concert,
    band: String,
    venue: String,
    hometown_show: bool,
    introduction: String,
}

pub fn execute(ctx: &Context, args: ConcertArgs) -> Result<(), Box<dyn std::error::Error>> {
    let db = ctx.open_db()?;

    match args.command {
        ConcertCommand::Show { concert_id } => {
            let concert = require_concert(&db, concert_id)?;
            let (band, venue) = ConcertRepo::resolve(&db, &concert)?;
            let detail = ConcertDetail {
                band: band.name.clone(),
                venue: venue.title.clone(),
                hometown_show: Concert::is_hometown_show_for(&band, &venue),
                introduction: Concert::introduction_for(&band, &venue),
                concert,
            };

            match ctx.format {
                Format::Json => print_json(&detail)?,
                Format::Text => {
                    println!("Concert: {}", detail.concert.id);
                    println!("Date: {}", detail.concert.date);
                    if let Some(time) = &detail.concert.time {
                        println!("Time: {}", time);
                    }
                    println!("Band: {}", detail.band);
                    println!("Venue: {}", detail.venue);
                    println!("Hometown Show: {}", detail.hometown_show);
                    println!("Introduction: {}", detail.introduction);
                }
            }
        }
        ConcertCommand::List => {
            let concerts = ConcertRepo::list(&db)?;
            print_list(ctx.format, &concerts, |c| {
                format!(
                    "{}\t{}\t{}\t{}\t{}",
                    c.id,
                    c.band_id,
                    c.venue_id,
                    c.date,
                    c.time.as_deref().unwrap_or("-")
                )
            })?;
        }
    }

    Ok(())
}
