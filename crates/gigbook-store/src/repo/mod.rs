//! Repository layer
//!
//! One unit struct per entity; every operation takes the storage handle
//! explicitly and issues at most two statements.

pub mod band_repo;
pub mod concert_repo;
pub mod venue_repo;

pub use band_repo::BandRepo;
pub use concert_repo::ConcertRepo;
pub use venue_repo::VenueRepo;

fn elapsed_ms(start: std::time::Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
