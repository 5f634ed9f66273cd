//! Logging errors

/// Everything that can go wrong while setting up logging.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("invalid log filter `{filter}`: {reason}")]
    Filter { filter: String, reason: String },

    #[error("a global subscriber is already installed: {0}")]
    AlreadyInitialized(String),

    #[error("unknown log format `{0}` (expected pretty, compact or json)")]
    UnknownFormat(String),

    #[error("unknown log level `{0}`")]
    UnknownLevel(String),
}

pub type LogResult<T> = Result<T, LogError>;
