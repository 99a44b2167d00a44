//! Budget schedule data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use spendtrack_shared::types::ScheduleId;

use super::error::ScheduleError;

/// Target period classification for a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleType {
    /// Budget resets every day at midnight.
    Daily,
    /// Budget covers Monday through Sunday.
    Weekly,
    /// Budget covers a calendar month.
    Monthly,
    /// Budget covers a calendar year.
    Yearly,
}

impl ScheduleType {
    /// Returns the lowercase wire representation of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl std::fmt::Display for ScheduleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ScheduleType {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(ScheduleError::InvalidScheduleType(s.to_string())),
        }
    }
}

/// A per-category spending limit within a schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBudget {
    /// Category name (unique within its schedule).
    pub name: String,
    /// Spending limit for the category over the schedule's period.
    pub limit: Decimal,
}

/// A recurring budget schedule.
///
/// Field names follow the camelCase JSON the backend serves. The type field
/// stays as the raw wire value until evaluation so an unrecognized value
/// fails only that schedule's evaluation, never the whole batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Schedule ID.
    pub id: ScheduleId,
    /// Raw period type as received from the backend.
    #[serde(rename = "type")]
    pub schedule_type: String,
    /// Total spending target for the period.
    pub target_amount: Decimal,
    /// Ordered per-category limits.
    pub categories: Vec<CategoryBudget>,
    /// Whether over-budget reminders are enabled.
    pub reminders_enabled: bool,
    /// Whether the schedule is active.
    pub is_enabled: bool,
}

impl Schedule {
    /// Parses the raw type value into a [`ScheduleType`].
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidScheduleType` if the value is not one
    /// of `daily`, `weekly`, `monthly`, `yearly` (case-insensitive).
    pub fn parsed_type(&self) -> Result<ScheduleType, ScheduleError> {
        self.schedule_type.parse()
    }
}
