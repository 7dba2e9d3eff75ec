//! Stage greetings and the hometown rule
//!
//! Both are pure functions of the three strings a concert brings together:
//! the venue's city, the band's name and the band's hometown.

/// The greeting a band opens a concert with.
///
/// Always exactly `Hello {city}!!!!! We are {name} and we're from {hometown}`.
pub fn introduction(city: &str, band_name: &str, hometown: &str) -> String {
    format!(
        "Hello {}!!!!! We are {} and we're from {}",
        city, band_name, hometown
    )
}

/// A hometown show is one where the band's hometown equals the venue's city.
///
/// Exact, case-sensitive comparison with no normalization.
pub fn is_hometown_show(hometown: &str, city: &str) -> bool {
    hometown == city
}
