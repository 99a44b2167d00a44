//! Expense records and period aggregation.

pub mod aggregate;
pub mod types;

pub use aggregate::ExpenseAggregate;
pub use types::Expense;
