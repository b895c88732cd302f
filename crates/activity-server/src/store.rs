//! Activity Store
//!
//! In-memory catalog with the signup rules. Contents live for the lifetime of
//! the process.

use activity_core::{Activity, ActivityCatalog};
use thiserror::Error;

/// Signup rejections; the `Display` text is sent to the client as `detail`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student already signed up for this activity")]
    AlreadySignedUp,

    #[error("Activity full")]
    ActivityFull,

    #[error("email query parameter is required")]
    MissingEmail,
}

/// In-memory activity store
#[derive(Clone, Debug, Default)]
pub struct ActivityStore {
    catalog: ActivityCatalog,
}

impl ActivityStore {
    pub const fn new(catalog: ActivityCatalog) -> Self {
        Self { catalog }
    }

    /// Store pre-filled with the school's activities
    pub fn seeded() -> Self {
        Self::new(seed_catalog())
    }

    pub const fn catalog(&self) -> &ActivityCatalog {
        &self.catalog
    }

    /// Add `email` to the roster of `name`, returning the confirmation text
    pub fn signup(&mut self, name: &str, email: &str) -> Result<String, StoreError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(StoreError::MissingEmail);
        }

        let activity = self
            .catalog
            .get_mut(name)
            .ok_or(StoreError::ActivityNotFound)?;

        if activity.details.participants.contains(email) {
            return Err(StoreError::AlreadySignedUp);
        }
        if activity.is_full() {
            return Err(StoreError::ActivityFull);
        }

        activity.details.participants.push(email);
        Ok(format!("Signed up {email} for {name}"))
    }
}

/// Mergington High School's extracurricular activities
pub fn seed_catalog() -> ActivityCatalog {
    [
        Activity::new("Chess Club")
            .description("Learn strategies and compete in chess tournaments")
            .schedule("Fridays, 3:30 PM - 5:00 PM")
            .max_participants(12)
            .participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        Activity::new("Programming Class")
            .description("Learn programming fundamentals and build software projects")
            .schedule("Tuesdays and Thursdays, 3:30 PM - 4:30 PM")
            .max_participants(20)
            .participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        Activity::new("Gym Class")
            .description("Physical education and sports activities")
            .schedule("Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM")
            .max_participants(30)
            .participants(["john@mergington.edu", "olivia@mergington.edu"]),
        Activity::new("Basketball Team")
            .description("Competitive basketball team for intramural and inter-school matches")
            .schedule("Tuesdays and Thursdays, 4:00 PM - 5:30 PM")
            .max_participants(15)
            .participants(["alex@mergington.edu"]),
        Activity::new("Tennis Club")
            .description("Tennis practice and tournament participation")
            .schedule("Mondays and Wednesdays, 3:30 PM - 5:00 PM")
            .max_participants(10)
            .participants(["grace@mergington.edu"]),
        Activity::new("Art Studio")
            .description("Painting, drawing, and visual arts exploration")
            .schedule("Wednesdays, 3:30 PM - 5:00 PM")
            .max_participants(16)
            .participants(["isabella@mergington.edu", "noah@mergington.edu"]),
        Activity::new("Music Band")
            .description("Join the school band and perform at concerts and events")
            .schedule("Fridays, 4:00 PM - 5:30 PM")
            .max_participants(25)
            .participants(["liam@mergington.edu"]),
        Activity::new("Debate Club")
            .description("Develop public speaking and argumentation skills")
            .schedule("Mondays, 3:30 PM - 4:30 PM")
            .max_participants(18)
            .participants(["ava@mergington.edu", "mason@mergington.edu"]),
        Activity::new("Science Olympiad")
            .description("Compete in science competitions and STEM challenges")
            .schedule("Thursdays, 3:30 PM - 5:00 PM")
            .max_participants(14)
            .participants(["ethan@mergington.edu"]),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_order() {
        let store = ActivityStore::seeded();
        let names: Vec<_> = store.catalog().names().collect();
        assert_eq!(names.len(), 9);
        assert_eq!(names[0], "Chess Club");
        assert_eq!(names[8], "Science Olympiad");
    }

    #[test]
    fn test_signup_appends_participant() {
        let mut store = ActivityStore::seeded();
        let message = store.signup("Chess Club", "new@mergington.edu").unwrap();
        assert_eq!(message, "Signed up new@mergington.edu for Chess Club");

        let chess = store.catalog().get("Chess Club").unwrap();
        assert_eq!(chess.details.participants.as_slice().last().unwrap(), "new@mergington.edu");
    }

    #[test]
    fn test_signup_rules() {
        let tennis = Activity::new("Tennis Club")
            .max_participants(1)
            .participants(["grace@mergington.edu"]);
        let mut store = ActivityStore::new([tennis].into_iter().collect());

        assert_eq!(store.signup("Polo", "a@mergington.edu"), Err(StoreError::ActivityNotFound));
        assert_eq!(
            store.signup("Tennis Club", "grace@mergington.edu"),
            Err(StoreError::AlreadySignedUp)
        );
        assert_eq!(store.signup("Tennis Club", "a@mergington.edu"), Err(StoreError::ActivityFull));
        assert_eq!(store.signup("Tennis Club", " "), Err(StoreError::MissingEmail));
    }

    #[test]
    fn test_signup_trims_email() {
        let mut store = ActivityStore::seeded();
        assert_eq!(
            store.signup("Chess Club", " michael@mergington.edu "),
            Err(StoreError::AlreadySignedUp)
        );

        let message = store.signup("Chess Club", "  new@mergington.edu\t").unwrap();
        assert_eq!(message, "Signed up new@mergington.edu for Chess Club");

        let chess = store.catalog().get("Chess Club").unwrap();
        assert_eq!(chess.details.participants.as_slice().last().unwrap(), "new@mergington.edu");
        assert_eq!(
            store.signup("Chess Club", "new@mergington.edu"),
            Err(StoreError::AlreadySignedUp)
        );
    }
}
