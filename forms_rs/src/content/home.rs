//! Home and About page content, plus the experience counter animation.

use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub trips: u64,
    pub clients: u64,
    pub years: u64,
}

pub const EXPERIENCE: Stats = Stats {
    trips: 12_000,
    clients: 2_000,
    years: 15,
};

/// Linear count from zero to `target` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    pub target: Stats,
    pub duration: Duration,
}

impl Default for CountUp {
    fn default() -> Self {
        Self {
            target: EXPERIENCE,
            duration: Duration::from_millis(1200),
        }
    }
}

impl CountUp {
    /// Progress in `0.0..=1.0`.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_nanos() as f64 / self.duration.as_nanos() as f64).min(1.0)
    }

    /// Values shown `elapsed` after the start; each is `floor(target * progress)`.
    pub fn at(&self, elapsed: Duration) -> Stats {
        let p = self.progress(elapsed);
        let scale = |n: u64| (n as f64 * p).floor() as u64;
        Stats {
            trips: scale(self.target.trips),
            clients: scale(self.target.clients),
            years: scale(self.target.years),
        }
    }

    pub fn is_done(&self, elapsed: Duration) -> bool {
        self.progress(elapsed) >= 1.0
    }
}

/// `12000` -> `"12,000"`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "☁️",
        title: "Weather Insights",
        text: "Check the weather before planning your trips anywhere in the world.",
    },
    Service {
        icon: "📋",
        title: "Expert Tour Guides",
        text: "Our professional guides make sure your trip is memorable.",
    },
    Service {
        icon: "⚙️",
        title: "Customization",
        text: "Plan your itinerary your way with our customizable options.",
    },
    Service {
        icon: "🔒",
        title: "Safe Payments",
        text: "Secure checkout and flexible cancellation policies.",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Amazing guide — showed us hidden gems and local food. Highly recommend!",
        author: "Ayesha, Dhaka",
    },
    Testimonial {
        quote: "Smooth booking and great support. Trip of a lifetime.",
        author: "John, London",
    },
];

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub photo: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "John Doe",
        role: "Founder & CEO",
        photo: "/images/team1.jpg",
    },
    TeamMember {
        name: "Jane Smith",
        role: "Tour Manager",
        photo: "/images/team2.jpg",
    },
    TeamMember {
        name: "Mike Lee",
        role: "Marketing Head",
        photo: "/images/team3.jpg",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_up_is_linear_and_floored() {
        let count = CountUp::default();
        assert_eq!(count.at(Duration::ZERO), Stats::default());
        assert_eq!(
            count.at(Duration::from_millis(600)),
            Stats {
                trips: 6000,
                clients: 1000,
                years: 7
            }
        );
        assert_eq!(count.at(Duration::from_millis(1200)), EXPERIENCE);
        assert_eq!(count.at(Duration::from_secs(5)), EXPERIENCE);
        assert!(!count.is_done(Duration::from_millis(1199)));
        assert!(count.is_done(Duration::from_millis(1200)));
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let count = CountUp {
            target: EXPERIENCE,
            duration: Duration::ZERO,
        };
        assert_eq!(count.at(Duration::ZERO), EXPERIENCE);
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(12_000), "12,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }
}
