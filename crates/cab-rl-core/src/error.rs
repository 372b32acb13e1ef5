//! Error types for the RL core library

use thiserror::Error;

/// Core error type for RL operations
#[derive(Error, Debug)]
pub enum RLError {
    /// More requests were drawn than there are distinct non-idle actions
    #[error("Insufficient actions: requested {requested}, only {available} available")]
    InsufficientActions {
        /// Number of requests drawn
        requested: usize,
        /// Number of distinct non-idle actions
        available: usize,
    },

    /// Location outside `[0, locations)`
    #[error("Invalid location {location}: must be below {locations}")]
    InvalidLocation {
        /// Offending location
        location: usize,
        /// Number of locations
        locations: usize,
    },

    /// Hour-of-day outside `[0, hours)`
    #[error("Invalid time slot {time}: must be below {hours}")]
    InvalidTime {
        /// Offending time slot
        time: usize,
        /// Number of hourly slots
        hours: usize,
    },

    /// Day-of-week outside `[0, days)`
    #[error("Invalid day {day}: must be below {days}")]
    InvalidDay {
        /// Offending day
        day: usize,
        /// Number of days
        days: usize,
    },

    /// Invalid state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Invalid action
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed travel-time table
    #[error("Travel time table error: {0}")]
    TravelTable(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for RL operations
pub type Result<T> = std::result::Result<T, RLError>;
