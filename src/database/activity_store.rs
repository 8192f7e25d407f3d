use std::collections::HashSet;
use std::path::Path;

use parking_lot::RwLock;

use crate::error::{ConfigError, DirectoryError};
use crate::models::{Activity, ActivityDirectory};

/// In-memory activity directory, owned by the process and shared with
/// handlers behind an `Arc`.
///
/// One lock covers the whole directory. Mutations run their
/// check-then-modify sequence while holding the write guard.
#[derive(Debug)]
pub struct ActivityStore {
    activities: RwLock<Vec<Activity>>,
}

impl ActivityStore {
    /// Builds a store from seed data, rejecting anything that breaks the
    /// directory invariants: unique names, positive capacity, unique roster emails.
    pub fn from_activities(activities: Vec<Activity>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for activity in &activities {
            if !seen.insert(activity.name.as_str()) {
                return Err(ConfigError::DuplicateActivity {
                    name: activity.name.clone(),
                });
            }
            if activity.max_participants == 0 {
                return Err(ConfigError::InvalidCapacity {
                    name: activity.name.clone(),
                });
            }
            let mut roster = HashSet::new();
            for email in &activity.participants {
                if !roster.insert(email.as_str()) {
                    return Err(ConfigError::DuplicateParticipant {
                        activity: activity.name.clone(),
                        email: email.clone(),
                    });
                }
            }
        }
        Ok(Self {
            activities: RwLock::new(activities),
        })
    }

    /// Store holding the default Mergington High School activities.
    pub fn seeded() -> Self {
        Self {
            activities: RwLock::new(default_activities()),
        }
    }

    /// Reads a JSON array of activities (same fields as the listing, plus `name`).
    pub fn from_seed_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::SeedRead {
            path: path.to_path_buf(),
            source,
        })?;
        let activities: Vec<Activity> =
            serde_json::from_str(&raw).map_err(|source| ConfigError::SeedParse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_activities(activities)
    }

    pub fn snapshot(&self) -> ActivityDirectory {
        ActivityDirectory(self.activities.read().clone())
    }

    pub fn len(&self) -> usize {
        self.activities.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.read().is_empty()
    }

    /// Runs `f` on the named activity under the write lock.
    pub fn update<T>(
        &self,
        name: &str,
        f: impl FnOnce(&mut Activity) -> Result<T, DirectoryError>,
    ) -> Result<T, DirectoryError> {
        let mut activities = self.activities.write();
        let activity = activities
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or(DirectoryError::ActivityNotFound)?;
        f(activity)
    }
}

pub fn default_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        Activity::new(
            "Basketball Team",
            "Competitive basketball team practice and games",
            "Mondays and Thursdays, 4:00 PM - 6:00 PM",
            15,
            &["alex@mergington.edu", "nina@mergington.edu"],
        ),
        Activity::new(
            "Soccer Club",
            "Recreational soccer practices and weekend scrimmages",
            "Wednesdays, 4:00 PM - 5:30 PM",
            22,
            &["carlos@mergington.edu", "leah@mergington.edu"],
        ),
        Activity::new(
            "Art Club",
            "Explore drawing, painting, and mixed media projects",
            "Tuesdays, 4:00 PM - 5:30 PM",
            18,
            &["isabella@mergington.edu", "matt@mergington.edu"],
        ),
        Activity::new(
            "Drama Club",
            "Acting workshops, play rehearsals, and stage production",
            "Fridays, 4:00 PM - 6:00 PM",
            25,
            &["oliver@mergington.edu", "mia@mergington.edu"],
        ),
        Activity::new(
            "Debate Team",
            "Public speaking and competitive debating skills",
            "Wednesdays, 3:30 PM - 5:00 PM",
            16,
            &["noah@mergington.edu", "anna@mergington.edu"],
        ),
        Activity::new(
            "Robotics Club",
            "Design, build, and program robots for competitions",
            "Thursdays, 4:00 PM - 6:00 PM",
            12,
            &["ethan@mergington.edu", "grace@mergington.edu"],
        ),
    ]
}
