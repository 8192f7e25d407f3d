use crate::database::activity_store::ActivityStore;
use crate::error::DirectoryError;
use crate::models::ActivityDirectory;

pub fn list_activities(store: &ActivityStore) -> ActivityDirectory {
    store.snapshot()
}

/// Appends `email` to the roster of `activity_name`.
///
/// Emails are opaque and capacity is not checked.
pub fn enroll(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    let result = store.update(activity_name, |activity| {
        if activity.is_enrolled(email) {
            return Err(DirectoryError::AlreadySignedUp);
        }
        activity.participants.push(email.to_string());
        Ok(format!("Signed up {} for {}", email, activity_name))
    });

    // Emails stay out of the default (info) log output.
    match &result {
        Ok(_) => {
            tracing::info!(activity = %activity_name, "participant_signed_up");
            tracing::debug!(activity = %activity_name, email = %email, "participant_signed_up");
        }
        Err(e) => tracing::info!(activity = %activity_name, reason = %e, "signup_rejected"),
    }
    result
}

/// Removes `email` from the roster of `activity_name`, keeping the order of the rest.
pub fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    let result = store.update(activity_name, |activity| {
        let idx = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(DirectoryError::ParticipantNotFound)?;
        activity.participants.remove(idx);
        Ok(format!("Removed {} from {}", email, activity_name))
    });

    match &result {
        Ok(_) => {
            tracing::info!(activity = %activity_name, "participant_removed");
            tracing::debug!(activity = %activity_name, email = %email, "participant_removed");
        }
        Err(e) => tracing::info!(activity = %activity_name, reason = %e, "unregister_rejected"),
    }
    result
}
