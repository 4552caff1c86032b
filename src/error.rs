use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the assistant
///
/// The suggestion engine itself never fails; these errors come from the
/// layers around it (configuration, snapshot loading, the calendar store).
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(meeting_suggester::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(meeting_suggester::config))]
    Config(String),

    #[error("Calendar snapshot error: {0}")]
    #[diagnostic(code(meeting_suggester::snapshot))]
    Snapshot(String),

    #[error("Calendar store error: {0}")]
    #[diagnostic(code(meeting_suggester::calendar_store))]
    CalendarStore(String),

    #[error(transparent)]
    #[diagnostic(code(meeting_suggester::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(meeting_suggester::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(meeting_suggester::other))]
    Other(String),
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type AssistantResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Invalid environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create snapshot errors
pub fn snapshot_error(message: &str) -> Error {
    Error::Snapshot(message.to_string())
}

/// Helper to create calendar store errors
pub fn calendar_store_error(message: &str) -> Error {
    Error::CalendarStore(message.to_string())
}

/// Helper to create other errors
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
