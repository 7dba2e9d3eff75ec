//! Projection rows returned by the join queries
//!
//! These are plain records, not entities: they carry only the columns the
//! query selected.

use serde::{Deserialize, Serialize};

use super::ConcertId;

/// One concert from a band's point of view (concerts joined to venues)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandConcert {
    pub concert_id: ConcertId,
    pub date: String,
    pub venue_title: String,
    pub city: String,
}

/// A venue a band plays at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandVenue {
    pub venue_title: String,
    pub city: String,
}

/// One concert from a venue's point of view (concerts joined to bands)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueConcert {
    pub concert_id: ConcertId,
    pub date: String,
    pub band_name: String,
    pub band_hometown: String,
}

/// A band that plays at a venue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueBand {
    pub band_name: String,
    pub band_hometown: String,
}
