//! Budget schedule types and category limits.

pub mod error;
pub mod types;

pub use error::ScheduleError;
pub use types::{CategoryBudget, Schedule, ScheduleType};
