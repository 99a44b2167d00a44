//! Shared types for Spendtrack.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Money display helpers with decimal precision

pub mod types;

pub use types::{ExpenseId, ScheduleId, UserId};
