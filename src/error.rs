use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid {field}: '{value}' is not a positive number")]
    Validation { field: &'static str, value: String },
    #[error("Unknown workout type '{0}'")]
    UnknownKind(String),
    #[error("Geolocation unavailable: {0}")]
    GeolocationUnavailable(String),
    #[error("Form submitted without a selected map location")]
    MissingPendingLocation,
    #[error("Storage unavailable: {0}")]
    Storage(#[from] rusqlite::Error),
    #[error("Stored workouts are corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("Stored workout {id} is invalid: {reason}")]
    CorruptRecord { id: String, reason: String },
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
    #[error("Cannot read configuration: {0}")]
    Config(#[from] config::ConfigError)
}

impl TrackerError {
    pub fn validation(field: &'static str, value: impl ToString) -> Self {
        Self::Validation { field, value: value.to_string() }
    }
}
