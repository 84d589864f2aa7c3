use std::collections::BTreeMap;

use parking_lot::Mutex;
use thiserror::Error;
use tracing::debug;

use crate::database::seed;
use crate::models::Activity;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Activity not found")]
    NotFound,

    #[error("Student is already signed up for this activity")]
    AlreadyEnrolled,

    #[error("Activity is full")]
    CapacityExceeded,

    #[error("Student is not signed up for this activity")]
    NotEnrolled,

    #[error("Activity {0} is listed more than once")]
    DuplicateActivity(String),

    #[error("Activity {0} must allow at least one participant")]
    ZeroCapacity(String),

    #[error("Activity {0} starts with more participants than it allows")]
    OverCapacity(String),

    #[error("Activity {name} lists {email} more than once")]
    DuplicateParticipant { name: String, email: String },
}

/// In-memory roster of every activity, keyed by activity name.
///
/// All reads and writes go through one lock, so the check and the mutation in
/// [`ActivityStore::enroll`] and [`ActivityStore::withdraw`] happen as a unit.
#[derive(Debug)]
pub struct ActivityStore {
    activities: Mutex<BTreeMap<String, Activity>>,
}

impl ActivityStore {
    /// Builds a store from `(name, activity)` records, rejecting any record
    /// that already breaks a roster invariant.
    pub fn new<I>(records: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = (String, Activity)>,
    {
        let mut activities = BTreeMap::new();

        for (name, activity) in records {
            validate_record(&name, &activity)?;
            if activities.contains_key(&name) {
                return Err(RosterError::DuplicateActivity(name));
            }
            activities.insert(name, activity);
        }

        Ok(Self {
            activities: Mutex::new(activities),
        })
    }

    /// Store holding the school's activity catalogue.
    pub fn seeded() -> Result<Self, RosterError> {
        Self::new(seed::seed_activities())
    }

    pub fn len(&self) -> usize {
        self.activities.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.lock().is_empty()
    }

    /// Snapshot of every activity and its current roster.
    pub fn list_activities(&self) -> BTreeMap<String, Activity> {
        self.activities.lock().clone()
    }

    pub fn get_activity(&self, activity_name: &str) -> Option<Activity> {
        self.activities.lock().get(activity_name).cloned()
    }

    pub fn enroll(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut activities = self.activities.lock();
        let activity = activities
            .get_mut(activity_name)
            .ok_or(RosterError::NotFound)?;

        if activity.has_participant(email) {
            return Err(RosterError::AlreadyEnrolled);
        }
        if activity.is_full() {
            return Err(RosterError::CapacityExceeded);
        }

        activity.participants.push(email.to_string());
        debug!(
            activity = activity_name,
            email,
            spots_left = activity.spots_left(),
            "Participant added"
        );
        Ok(())
    }

    pub fn withdraw(&self, activity_name: &str, email: &str) -> Result<(), RosterError> {
        let mut activities = self.activities.lock();
        let activity = activities
            .get_mut(activity_name)
            .ok_or(RosterError::NotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(RosterError::NotEnrolled)?;

        activity.participants.remove(position);
        debug!(
            activity = activity_name,
            email,
            spots_left = activity.spots_left(),
            "Participant removed"
        );
        Ok(())
    }
}

fn validate_record(name: &str, activity: &Activity) -> Result<(), RosterError> {
    if activity.max_participants == 0 {
        return Err(RosterError::ZeroCapacity(name.to_string()));
    }
    if activity.participants.len() > activity.max_participants {
        return Err(RosterError::OverCapacity(name.to_string()));
    }
    for (i, email) in activity.participants.iter().enumerate() {
        if activity.participants[..i].contains(email) {
            return Err(RosterError::DuplicateParticipant {
                name: name.to_string(),
                email: email.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    fn record(name: &str, max_participants: usize, participants: &[&str]) -> (String, Activity) {
        (
            name.to_string(),
            Activity {
                description: format!("{name} description"),
                schedule: "Mondays, 3:00 PM".to_string(),
                max_participants,
                participants: participants.iter().map(|p| p.to_string()).collect(),
            },
        )
    }

    fn store() -> ActivityStore {
        ActivityStore::new([
            record("Chess Club", 3, &["michael@mergington.edu"]),
            record("Choir", 1, &[]),
        ])
        .unwrap()
    }

    #[test]
    fn lists_every_activity() {
        let listed = store().list_activities();
        assert_eq!(listed.len(), 2);
        assert_eq!(
            listed["Chess Club"].participants,
            vec!["michael@mergington.edu"]
        );
    }

    #[test]
    fn listing_is_a_snapshot() {
        let store = store();
        let before = store.list_activities();
        store.enroll("Choir", "ana@mergington.edu").unwrap();
        assert!(before["Choir"].participants.is_empty());
        assert_eq!(store.list_activities()["Choir"].participants.len(), 1);
    }

    #[test]
    fn enroll_appends_in_signup_order() {
        let store = store();
        store.enroll("Chess Club", "ana@mergington.edu").unwrap();
        store.enroll("Chess Club", "ben@mergington.edu").unwrap();
        assert_eq!(
            store.get_activity("Chess Club").unwrap().participants,
            vec![
                "michael@mergington.edu",
                "ana@mergington.edu",
                "ben@mergington.edu"
            ]
        );
    }

    #[test]
    fn enroll_rejects_unknown_activity() {
        assert_eq!(
            store().enroll("Knitting", "ana@mergington.edu"),
            Err(RosterError::NotFound)
        );
    }

    #[test]
    fn enroll_rejects_duplicate_signup() {
        let store = store();
        assert_eq!(
            store.enroll("Chess Club", "michael@mergington.edu"),
            Err(RosterError::AlreadyEnrolled)
        );
        assert_eq!(store.get_activity("Chess Club").unwrap().participants.len(), 1);
    }

    #[test]
    fn duplicate_is_reported_before_capacity() {
        let store = store();
        store.enroll("Choir", "ana@mergington.edu").unwrap();
        assert_eq!(
            store.enroll("Choir", "ana@mergington.edu"),
            Err(RosterError::AlreadyEnrolled)
        );
    }

    #[test]
    fn enroll_rejects_full_activity() {
        let store = store();
        store.enroll("Choir", "ana@mergington.edu").unwrap();
        assert_eq!(
            store.enroll("Choir", "ben@mergington.edu"),
            Err(RosterError::CapacityExceeded)
        );
        assert_eq!(store.get_activity("Choir").unwrap().participants.len(), 1);
    }

    #[test]
    fn withdraw_removes_participant_and_frees_a_spot() {
        let store = store();
        store.enroll("Choir", "ana@mergington.edu").unwrap();
        store.withdraw("Choir", "ana@mergington.edu").unwrap();
        assert!(store.get_activity("Choir").unwrap().participants.is_empty());
        store.enroll("Choir", "ben@mergington.edu").unwrap();
    }

    #[test]
    fn withdraw_keeps_remaining_order() {
        let store = store();
        store.enroll("Chess Club", "ana@mergington.edu").unwrap();
        store.enroll("Chess Club", "ben@mergington.edu").unwrap();
        store.withdraw("Chess Club", "ana@mergington.edu").unwrap();
        assert_eq!(
            store.get_activity("Chess Club").unwrap().participants,
            vec!["michael@mergington.edu", "ben@mergington.edu"]
        );
    }

    #[test]
    fn withdraw_twice_fails() {
        let store = store();
        store.withdraw("Chess Club", "michael@mergington.edu").unwrap();
        assert_eq!(
            store.withdraw("Chess Club", "michael@mergington.edu"),
            Err(RosterError::NotEnrolled)
        );
    }

    #[test]
    fn withdraw_rejects_unknown_activity() {
        assert_eq!(
            store().withdraw("Knitting", "michael@mergington.edu"),
            Err(RosterError::NotFound)
        );
    }

    #[test]
    fn rejects_invalid_records() {
        assert_eq!(
            ActivityStore::new([record("Choir", 0, &[])]).unwrap_err(),
            RosterError::ZeroCapacity("Choir".to_string())
        );
        assert_eq!(
            ActivityStore::new([record("Choir", 1, &["a@x", "b@x"])]).unwrap_err(),
            RosterError::OverCapacity("Choir".to_string())
        );
        assert_eq!(
            ActivityStore::new([record("Choir", 3, &["a@x", "a@x"])]).unwrap_err(),
            RosterError::DuplicateParticipant {
                name: "Choir".to_string(),
                email: "a@x".to_string()
            }
        );
        assert_eq!(
            ActivityStore::new([record("Choir", 3, &[]), record("Choir", 5, &[])]).unwrap_err(),
            RosterError::DuplicateActivity("Choir".to_string())
        );
    }

    #[test]
    fn seeded_store_loads_catalogue() {
        let store = ActivityStore::seeded().unwrap();
        assert_eq!(store.len(), seed::seed_activities().len());
        assert!(store.get_activity("Programming Class").is_some());
    }

    #[test]
    fn concurrent_signups_never_overfill() {
        let store = Arc::new(
            ActivityStore::new([record("Robotics", 5, &[])]).unwrap(),
        );

        let accepted: usize = thread::scope(|scope| {
            let handles: Vec<_> = (0..20)
                .map(|i| {
                    let store = Arc::clone(&store);
                    scope.spawn(move || {
                        store
                            .enroll("Robotics", &format!("student{i}@mergington.edu"))
                            .is_ok() as usize
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).sum()
        });

        assert_eq!(accepted, 5);
        assert_eq!(store.get_activity("Robotics").unwrap().participants.len(), 5);
    }
}
