use serde::{Deserialize, Serialize};

/// Surrogate key of a `venues` row
pub type VenueId = i64;

/// Venue - a place in a city that hosts concerts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    /// Auto-incremented primary key
    pub id: VenueId,

    /// Display title; used as a lookup key when scheduling, but not unique
    pub title: String,

    /// City the venue is in
    pub city: String,
}

impl Venue {
    pub fn new(id: VenueId, title: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            city: city.into(),
        }
    }
}
