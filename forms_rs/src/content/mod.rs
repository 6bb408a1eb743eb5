//! Static and mocked site content.
//!
//! Nothing here is fetched; the views render these values directly.

pub mod guides;
pub mod home;
pub mod profile;

pub use guides::{Guide, GUIDES, find_guide};
pub use home::{CountUp, Stats, format_thousands};
pub use profile::{ProfileData, TravelStat, Trip};

/// Company contact details shown in footers and on auth pages.
pub const SUPPORT_EMAIL: &str = "support@travelworld.com";
pub const SUPPORT_PHONE: &str = "+880 1234-567890";
pub const LOCATION: &str = "Dhaka, Bangladesh";

/// `n` star glyphs, capped at five.
pub fn stars(rating: u8) -> String {
    "⭐️".repeat(usize::from(rating.min(5)))
}
