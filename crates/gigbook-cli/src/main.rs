//! gigbook CLI
//!
//! Command-line interface for the band/venue/concert book

use clap::{Parser, Subcommand};
use gigbook_core::logging_facility::{self, Profile};
use std::path::PathBuf;

mod commands;
mod output;

#[derive(Debug, Parser)]
#[command(name = "gigbook")]
#[command(about = "gigbook - Bands, venues and the concerts between them", long_about = None)]
struct Cli {
    /// SQLite file to use; an in-memory store when omitted
    #[arg(long, global = true, env = "GIGBOOK_DB")]
    db: Option<PathBuf>,

    /// Print list results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log output format (dev or prod); RUST_LOG sets the level
    #[arg(long, global = true, default_value = "dev")]
    log_format: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build the sample bands, venues and concerts and print the query results
    Demo,
    /// Band operations
    Band(commands::band::BandArgs),
    /// Venue operations
    Venue(commands::venue::VenueArgs),
    /// Schedule a band at a venue (looked up by title)
    Schedule(commands::schedule::ScheduleArgs),
    /// Concert operations
    Concert(commands::concert::ConcertArgs),
}

fn main() {
    let cli = Cli::parse();

    logging_facility::init(cli.log_format);

    let ctx = commands::Context {
        db_path: cli.db,
        format: output::Format::from_json_flag(cli.json),
    };

    let result = match cli.command {
        Commands::Demo => commands::demo::execute(&ctx),
        Commands::Band(args) => commands::band::execute(&ctx, args),
        Commands::Venue(args) => commands::venue::execute(&ctx, args),
        Commands::Schedule(args) => commands::schedule::execute(&ctx, args),
        Commands::Concert(args) => commands::concert::execute(&ctx, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
