//! Traits naming the external expense/schedule collaborator.
//!
//! The engine never performs I/O. The surrounding application fetches
//! schedules and expenses from its REST backend, then hands the loaded
//! data to `ScheduleProgressService`. These traits name that seam so the
//! presentation layer can be written against an interface, and so tests
//! can substitute an in-memory double.

pub mod error;
pub mod memory;

pub use error::StoreError;
pub use memory::InMemoryStore;

use chrono::{DateTime, Utc};
use spendtrack_shared::types::UserId;

use crate::expense::Expense;
use crate::schedule::Schedule;

/// A closed date window used to narrow expense fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Earliest instant included.
    pub from: DateTime<Utc>,
    /// Latest instant included.
    pub to: DateTime<Utc>,
}

impl DateRange {
    /// Returns true if the instant falls inside the range.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.from && instant <= self.to
    }
}

/// Source of budget schedules.
pub trait ScheduleStore {
    /// Lists the schedules owned by a user.
    fn list_schedules(&self, user: UserId) -> Result<Vec<Schedule>, StoreError>;
}

/// Source of expense records.
pub trait ExpenseStore {
    /// Lists expenses, optionally narrowed to a date range.
    fn list_expenses(&self, range: Option<DateRange>) -> Result<Vec<Expense>, StoreError>;
}
