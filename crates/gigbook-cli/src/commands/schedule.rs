//! Schedule command
//!
//! Usage: gigbook schedule <BAND_ID> <VENUE_TITLE> <DATE> [--time <TIME>]

use super::{require_band, Context};
use clap::Args;
use gigbook_core::errors::GigbookError;
use gigbook_core::model::BandId;
use gigbook_store::BandRepo;

#[derive(Debug, Args)]
pub struct ScheduleArgs {
    pub band_id: BandId,

    /// Venue title; the first venue with this exact title is used
    pub venue_title: String,

    pub date: String,

    #[arg(long)]
    pub time: Option<String>,
}

/// Execute schedule command
///
/// An unknown venue title is reported on stdout and is not a failure.
pub fn execute(ctx: &Context, args: ScheduleArgs) -> Result<(), Box<dyn std::error::Error>> {
    let db = ctx.open_db()?;
    let band = require_band(&db, args.band_id)?;

    match BandRepo::schedule_at(
        &db,
        &band,
        &args.venue_title,
        &args.date,
        args.time.as_deref(),
    )? {
        Some(concert) => println!(
            "Concert {} scheduled: {} on {}",
            concert.id, band.name, concert.date
        ),
        None => println!(
            "{}",
            GigbookError::VenueTitleNotFound {
                title: args.venue_title
            }
        ),
    }

    Ok(())
}
