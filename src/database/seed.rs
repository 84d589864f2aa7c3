use crate::models::Activity;

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: usize,
    participants: &'static [&'static str],
}

const SEED_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Soccer Team",
        description: "Train and play matches against other schools in the district league",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 22,
        participants: &["liam@mergington.edu", "noah@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Team",
        description: "Practice drills and compete in the regional basketball tournament",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 15,
        participants: &["ava@mergington.edu", "mia@mergington.edu"],
    },
    SeedActivity {
        name: "Tennis Club",
        description: "Improve your serve and play friendly singles and doubles matches",
        schedule: "Saturdays, 9:00 AM - 11:00 AM",
        max_participants: 10,
        participants: &["lucas@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Act, direct and stage the spring school play",
        schedule: "Wednesdays, 3:30 PM - 5:30 PM",
        max_participants: 25,
        participants: &["amelia@mergington.edu", "harper@mergington.edu"],
    },
    SeedActivity {
        name: "Art Studio",
        description: "Explore painting, drawing and sculpture with guided projects",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 18,
        participants: &["ella@mergington.edu"],
    },
    SeedActivity {
        name: "Math Club",
        description: "Solve challenging problems and prepare for math competitions",
        schedule: "Tuesdays, 3:30 PM - 4:30 PM",
        max_participants: 15,
        participants: &["james@mergington.edu", "benjamin@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Build public speaking skills and argue current topics in tournaments",
        schedule: "Fridays, 4:00 PM - 5:30 PM",
        max_participants: 16,
        participants: &[],
    },
];

/// Activities the school offers at startup, in catalogue order.
pub fn seed_activities() -> Vec<(String, Activity)> {
    SEED_ACTIVITIES
        .iter()
        .map(|seed| {
            (
                seed.name.to_string(),
                Activity {
                    description: seed.description.to_string(),
                    schedule: seed.schedule.to_string(),
                    max_participants: seed.max_participants,
                    participants: seed.participants.iter().map(|p| p.to_string()).collect(),
                },
            )
        })
        .collect()
}
