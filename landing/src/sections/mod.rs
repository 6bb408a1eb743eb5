// Site sections shared by the pages
// Developed with 🌍 by The TravelWorld Team (c)2025

mod footer;
mod hero;
mod nav;
mod newsletter;
mod services;
mod stats;
mod testimonials;

pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use newsletter::{Newsletter, Subscriptions, open_subscriptions};
pub use services::Services;
pub use stats::ExperienceStats;
pub use testimonials::Testimonials;
