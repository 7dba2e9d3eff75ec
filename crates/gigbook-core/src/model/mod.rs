//! Domain records
//!
//! Read models reconstructed from storage on each query. No record holds a
//! reference to another; relationships are resolved by fresh queries.

pub mod band;
pub mod concert;
pub mod records;
pub mod venue;

pub use band::{Band, BandId};
pub use concert::{Concert, ConcertId};
pub use records::{BandConcert, BandVenue, VenueBand, VenueConcert};
pub use venue::{Venue, VenueId};
