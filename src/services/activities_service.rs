use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::database::{ActivityStore, RosterError};
use crate::error::AppError;
use crate::models::Activity;

pub fn list_activities(store: &ActivityStore) -> BTreeMap<String, Activity> {
    store.list_activities()
}

pub fn load_activity(store: &ActivityStore, activity_name: &str) -> Result<Activity, AppError> {
    store
        .get_activity(activity_name)
        .ok_or(AppError::Roster(RosterError::NotFound))
}

/// Signs `email` up for `activity_name` and returns the confirmation message.
pub fn signup(
    store: &ActivityStore,
    activity_name: &str,
    email: Option<&str>,
) -> Result<String, AppError> {
    let email = normalize_email(email)?;

    store.enroll(activity_name, email).map_err(|e| {
        warn!(activity = activity_name, email, error = %e, "Signup rejected");
        e
    })?;

    info!(activity = activity_name, email, "Student signed up");
    Ok(format!("Signed up {} for {}", email, activity_name))
}

pub fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: Option<&str>,
) -> Result<String, AppError> {
    let email = normalize_email(email)?;

    store.withdraw(activity_name, email).map_err(|e| {
        warn!(activity = activity_name, email, error = %e, "Unregister rejected");
        e
    })?;

    info!(activity = activity_name, email, "Student unregistered");
    Ok(format!("Unregistered {} from {}", email, activity_name))
}

// Query decoding replaces bytes that are not UTF-8 with U+FFFD; such an email
// was never what the student typed.
fn normalize_email(email: Option<&str>) -> Result<&str, AppError> {
    match email.map(str::trim) {
        Some(e) if e.contains(char::REPLACEMENT_CHARACTER) => Err(AppError::InvalidEmail),
        Some(e) if !e.is_empty() => Ok(e),
        _ => Err(AppError::MissingEmail),
    }
}
