use serde::{Deserialize, Serialize};

use crate::greeting;

/// Surrogate key of a `bands` row
pub type BandId = i64;

/// Band - a performing act with a home city
///
/// Immutable once inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    /// Auto-incremented primary key
    pub id: BandId,

    /// Display name; not guaranteed unique
    pub name: String,

    /// City the band comes from
    pub hometown: String,
}

impl Band {
    pub fn new(id: BandId, name: impl Into<String>, hometown: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hometown: hometown.into(),
        }
    }

    /// The greeting this band opens with when playing in `city`
    pub fn introduction_in(&self, city: &str) -> String {
        greeting::introduction(city, &self.name, &self.hometown)
    }

    /// Whether playing in `city` would be a hometown show
    pub fn is_from(&self, city: &str) -> bool {
        greeting::is_hometown_show(&self.hometown, city)
    }
}
