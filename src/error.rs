use std::path::PathBuf;

use thiserror::Error;

/// Failures of roster operations against the directory.
///
/// The `Display` text is the `detail` string returned to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Participant not found")]
    ParticipantNotFound,

    #[error("Student already signed up for this activity")]
    AlreadySignedUp,
}

/// Startup failures: environment and seed loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}")]
    InvalidPort { value: String },

    #[error("failed to read seed file {path}: {source}")]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}: {source}")]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate activity name {name:?} in seed")]
    DuplicateActivity { name: String },

    #[error("activity {name:?} must allow at least one participant")]
    InvalidCapacity { name: String },

    #[error("participant {email:?} listed more than once for {activity:?}")]
    DuplicateParticipant { activity: String, email: String },
}
