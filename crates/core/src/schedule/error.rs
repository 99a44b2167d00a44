//! Schedule error types.

use thiserror::Error;

/// Schedule-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The schedule carries a type value the engine does not recognize.
    #[error("Invalid schedule type: {0}")]
    InvalidScheduleType(String),
}
