use serde::{Deserialize, Serialize};

use super::{Band, BandId, Venue, VenueId};

/// Surrogate key of a `concerts` row
pub type ConcertId = i64;

/// Concert - one band scheduled to play one venue on a date
///
/// `date` and `time` are stored as free text. Nothing prevents two concerts
/// with the same band, venue and date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concert {
    pub id: ConcertId,
    pub band_id: BandId,
    pub venue_id: VenueId,
    pub date: String,
    pub time: Option<String>,
}

impl Concert {
    /// Hometown rule applied to an already resolved band and venue
    pub fn is_hometown_show_for(band: &Band, venue: &Venue) -> bool {
        band.is_from(&venue.city)
    }

    /// Greeting for an already resolved band and venue
    pub fn introduction_for(band: &Band, venue: &Venue) -> String {
        band.introduction_in(&venue.city)
    }
}
