//! Tour guides.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// 0..=100
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guide {
    pub id: u32,
    pub name: &'static str,
    pub photo: &'static str,
    /// One-line card blurb
    pub description: &'static str,
    /// "About me" on the details page
    pub details: &'static str,
    pub rating: u8,
    pub email: &'static str,
    pub skills: &'static [Skill],
}

impl Guide {
    pub fn details_href(&self) -> String {
        format!("/guide/{}", self.id)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

const CORE_SKILLS: &[Skill] = &[
    Skill {
        name: "Local Knowledge",
        level: 90,
    },
    Skill {
        name: "Communication",
        level: 85,
    },
    Skill {
        name: "Tour Planning",
        level: 80,
    },
];

pub const GUIDES: &[Guide] = &[
    Guide {
        id: 1,
        name: "Rahim Uddin",
        photo: "/images/guide1.jpg",
        description: "Born in Old Dhaka; river cruises, street food and Mughal history.",
        details: "I have guided travellers through Old Dhaka and the Buriganga for twelve years. \
                  Expect hidden food stalls, boat rides at dawn and stories behind every gate.",
        rating: 5,
        email: "rahim@travelworld.com",
        skills: CORE_SKILLS,
    },
    Guide {
        id: 2,
        name: "Nusrat Jahan",
        photo: "/images/guide2.jpg",
        description: "Sundarbans specialist with a sharp eye for wildlife.",
        details: "Mangrove forests are my second home. I lead small-group expeditions into \
                  the Sundarbans with a focus on safety and responsible tourism.",
        rating: 5,
        email: "nusrat@travelworld.com",
        skills: &[
            Skill {
                name: "Wildlife Spotting",
                level: 95,
            },
            Skill {
                name: "Communication",
                level: 80,
            },
            Skill {
                name: "Tour Planning",
                level: 85,
            },
        ],
    },
    Guide {
        id: 3,
        name: "Tanvir Hasan",
        photo: "/images/guide3.jpg",
        description: "Tea gardens, hill trails and waterfalls around Sylhet.",
        details: "From Srimangal's tea estates to the Jaflong riverbanks, I plan relaxed \
                  itineraries for walkers and photographers alike.",
        rating: 4,
        email: "tanvir@travelworld.com",
        skills: CORE_SKILLS,
    },
    Guide {
        id: 4,
        name: "Maya Chakma",
        photo: "/images/guide4.jpg",
        description: "Hill tracts trekking and indigenous culture in Bandarban.",
        details: "I grew up in the Chittagong Hill Tracts and guide multi-day treks with \
                  homestays in local villages.",
        rating: 4,
        email: "maya@travelworld.com",
        skills: CORE_SKILLS,
    },
];

pub fn find_guide(id: u32) -> Option<&'static Guide> {
    GUIDES.iter().find(|g| g.id == id)
}

/// Route parameter form of [`find_guide`]; non-numeric ids find nothing.
pub fn find_guide_param(id: &str) -> Option<&'static Guide> {
    id.trim().parse().ok().and_then(find_guide)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<u32> = GUIDES.iter().map(|g| g.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), GUIDES.len());
    }

    #[test]
    fn lookup_by_param() {
        assert_eq!(find_guide_param("2").map(|g| g.name), Some("Nusrat Jahan"));
        assert!(find_guide_param("99").is_none());
        assert!(find_guide_param("abc").is_none());
    }

    #[test]
    fn links() {
        let guide = find_guide(1).unwrap();
        assert_eq!(guide.details_href(), "/guide/1");
        assert_eq!(guide.mailto(), "mailto:rahim@travelworld.com");
    }

    #[test]
    fn ratings_and_skills_in_range() {
        for guide in GUIDES {
            assert!(guide.rating <= 5);
            assert!(guide.skills.iter().all(|s| s.level <= 100));
        }
    }
}
