//! Core business logic for Spendtrack.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, period arithmetic, and progress
//! calculations live here.
//!
//! # Modules
//!
//! - `schedule` - Budget schedule types and category limits
//! - `expense` - Expense records and period aggregation
//! - `period` - Active period resolution per schedule type
//! - `progress` - Spend-vs-target progress and end-of-period projection
//! - `store` - Traits naming the external expense/schedule collaborator

pub mod expense;
pub mod period;
pub mod progress;
pub mod schedule;
pub mod store;
