//! Mocked signed-in user for the profile page.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileData {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub photo: String,
}

impl Default for ProfileData {
    fn default() -> Self {
        Self {
            full_name: "John Traveler".into(),
            username: "johntraveler".into(),
            email: "john.traveler@email.com".into(),
            phone: "+1 234 567 8900".into(),
            address: "123 Adventure Street, New York, NY 10001".into(),
            photo: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&w=200&q=80"
                .into(),
        }
    }
}

impl ProfileData {
    /// Values keyed like the profile editor schema (`fullName`, `email`, ...).
    pub fn to_values(&self) -> HashMap<String, String> {
        HashMap::from([
            ("fullName".to_string(), self.full_name.clone()),
            ("email".to_string(), self.email.clone()),
            ("phone".to_string(), self.phone.clone()),
            ("address".to_string(), self.address.clone()),
        ])
    }

    /// Copy edited values back; keys not present are left unchanged.
    pub fn apply_values(&mut self, values: &HashMap<String, String>) {
        let fields = [
            ("fullName", &mut self.full_name),
            ("email", &mut self.email),
            ("phone", &mut self.phone),
            ("address", &mut self.address),
        ];
        for (key, slot) in fields {
            if let Some(value) = values.get(key) {
                *slot = value.trim().to_string();
            }
        }
    }
}

pub struct TravelStat {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

pub const TRAVEL_STATS: &[TravelStat] = &[
    TravelStat {
        icon: "✈️",
        label: "Trips Booked",
        value: "12",
    },
    TravelStat {
        icon: "❤️",
        label: "Favorites",
        value: "28",
    },
    TravelStat {
        icon: "🌍",
        label: "Countries Visited",
        value: "8",
    },
    TravelStat {
        icon: "⭐",
        label: "Reviews",
        value: "15",
    },
];

pub struct Trip {
    pub destination: &'static str,
    pub date: &'static str,
    pub status: &'static str,
}

pub const TRAVEL_HISTORY: &[Trip] = &[
    Trip {
        destination: "Bali, Indonesia",
        date: "Dec 2024",
        status: "Completed",
    },
    Trip {
        destination: "Paris, France",
        date: "Oct 2024",
        status: "Completed",
    },
    Trip {
        destination: "Tokyo, Japan",
        date: "Aug 2024",
        status: "Completed",
    },
];

pub const QUICK_ACTIONS: &[(&str, &str)] = &[
    ("🎯", "Book New Trip"),
    ("❤️", "My Favorites"),
    ("💳", "Payment Methods"),
    ("🔔", "Notifications"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::profile_schema;
    use crate::validate::validate;

    #[test]
    fn default_profile_passes_editor_schema() {
        let values = ProfileData::default().to_values();
        assert!(validate(&profile_schema(), &values).is_empty());
    }

    #[test]
    fn apply_values_round_trips_edits() {
        let mut profile = ProfileData::default();
        let mut values = profile.to_values();
        values.insert("phone".into(), "  +880 1711 000000 ".into());
        values.remove("address");
        profile.apply_values(&values);

        assert_eq!(profile.phone, "+880 1711 000000");
        assert_eq!(profile.address, ProfileData::default().address);
        assert_eq!(profile.username, "johntraveler");
    }
}
