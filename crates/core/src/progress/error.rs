//! Progress evaluation error types.

use thiserror::Error;

use crate::schedule::ScheduleError;

/// Errors from evaluating a single schedule.
///
/// Failures are local to the schedule being evaluated; `evaluate_all`
/// collects them per schedule instead of aborting the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressError {
    /// The schedule's type value is not recognized.
    #[error("Invalid schedule type: {0}")]
    InvalidScheduleType(String),
}

impl From<ScheduleError> for ProgressError {
    fn from(err: ScheduleError) -> Self {
        match err {
            ScheduleError::InvalidScheduleType(value) => Self::InvalidScheduleType(value),
        }
    }
}
