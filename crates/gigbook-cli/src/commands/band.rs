//! Band commands
//!
//! Usage: gigbook band <add|list|concerts|venues|intros|top>

use super::{require_band, Context};
use crate::output::{print_list, print_opt};
use clap::{Args, Subcommand};
use gigbook_core::model::BandId;
use gigbook_store::BandRepo;

#[derive(Debug, Args)]
pub struct BandArgs {
    #[command(subcommand)]
    pub command: BandCommand,
}

#[derive(Debug, Subcommand)]
pub enum BandCommand {
    /// Add a band
    Add { name: String, hometown: String },
    /// List all bands
    List,
    /// Concerts a band plays, with venue and city
    Concerts { band_id: BandId },
    /// Venues a band plays at, once per concert
    Venues {
        band_id: BandId,
        /// List each venue once
        #[arg(long)]
        distinct: bool,
    },
    /// The greeting for every concert a band plays
    Intros { band_id: BandId },
    /// The band with the most concerts overall
    Top,
}

pub fn execute(ctx: &Context, args: BandArgs) -> Result<(), Box<dyn std::error::Error>> {
    let db = ctx.open_db()?;

    match args.command {
        BandCommand::Add { name, hometown } => {
            let band = BandRepo::create(&db, &name, &hometown)?;
            println!("Band {} created: {} ({})", band.id, band.name, band.hometown);
        }
        BandCommand::List => {
            let bands = BandRepo::list(&db)?;
            print_list(ctx.format, &bands, |b| {
                format!("{}\t{}\t{}", b.id, b.name, b.hometown)
            })?;
        }
        BandCommand::Concerts { band_id } => {
            let band = require_band(&db, band_id)?;
            let concerts = BandRepo::list_concerts(&db, &band)?;
            print_list(ctx.format, &concerts, |c| {
                format!("{}\t{}\t{}\t{}", c.concert_id, c.date, c.venue_title, c.city)
            })?;
        }
        BandCommand::Venues { band_id, distinct } => {
            let band = require_band(&db, band_id)?;
            let venues = BandRepo::list_venues(&db, &band, distinct)?;
            print_list(ctx.format, &venues, |v| {
                format!("{}\t{}", v.venue_title, v.city)
            })?;
        }
        BandCommand::Intros { band_id } => {
            let band = require_band(&db, band_id)?;
            let intros = BandRepo::all_introductions(&db, &band)?;
            print_list(ctx.format, &intros, String::clone)?;
        }
        BandCommand::Top => {
            let top = BandRepo::most_performances(&db)?;
            print_opt(ctx.format, top.as_ref())?;
        }
    }

    Ok(())
}
