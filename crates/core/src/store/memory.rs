//! In-memory store double for tests and examples.

use spendtrack_shared::types::UserId;

use super::{DateRange, ExpenseStore, ScheduleStore, StoreError};
use crate::expense::Expense;
use crate::schedule::Schedule;

/// A store backed by vectors. Every user sees the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    schedules: Vec<Schedule>,
    expenses: Vec<Expense>,
}

impl InMemoryStore {
    /// Creates a store preloaded with schedules and expenses.
    #[must_use]
    pub fn new(schedules: Vec<Schedule>, expenses: Vec<Expense>) -> Self {
        Self {
            schedules,
            expenses,
        }
    }
}

impl ScheduleStore for InMemoryStore {
    fn list_schedules(&self, _user: UserId) -> Result<Vec<Schedule>, StoreError> {
        Ok(self.schedules.clone())
    }
}

impl ExpenseStore for InMemoryStore {
    fn list_expenses(&self, range: Option<DateRange>) -> Result<Vec<Expense>, StoreError> {
        let expenses = match range {
            Some(range) => self
                .expenses
                .iter()
                .filter(|e| e.date.is_some_and(|d| range.contains(d)))
                .cloned()
                .collect(),
            None => self.expenses.clone(),
        };
        Ok(expenses)
    }
}
