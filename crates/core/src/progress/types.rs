//! Progress result types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use spendtrack_shared::types::money::round_display;
use spendtrack_shared::types::ScheduleId;

use super::error::ProgressError;
use crate::period::Period;
use crate::schedule::ScheduleType;

/// Severity band for a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressLevel {
    /// Comfortably under target (below 50%).
    Ok,
    /// Approaching the target (50% to just under 100%).
    Warning,
    /// At or past the target (100% and above).
    Over,
}

impl ProgressLevel {
    /// Bands an unclamped percent. `None` (no target set) reads as ok.
    #[must_use]
    pub fn from_percent(percent: Option<Decimal>) -> Self {
        match percent {
            Some(p) if p >= Decimal::ONE_HUNDRED => Self::Over,
            Some(p) if p >= Decimal::from(50) => Self::Warning,
            _ => Self::Ok,
        }
    }
}

/// Progress of one category against its limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProgress {
    /// Category name as spelled in the schedule.
    pub name: String,
    /// The category's spending limit.
    pub limit: Decimal,
    /// Spend matched to this category in the period.
    pub spent: Decimal,
    /// Unclamped percent of the limit spent; `None` when the limit is zero.
    pub percent: Option<Decimal>,
    /// Percent clamped to [0, 100] for progress-bar rendering.
    pub display_percent: Option<Decimal>,
    /// Budget left in the category, floored at zero.
    pub remaining: Decimal,
    /// Amount spent past the limit, zero when under.
    pub overage: Decimal,
    /// Severity band from the unclamped percent.
    pub level: ProgressLevel,
}

/// Linear extrapolation of the current spend rate to period end.
///
/// Informational only; nothing here is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    /// Average spend per elapsed day.
    pub avg_daily_spent: Decimal,
    /// Expected period-end total at the current rate.
    pub projected_total: Decimal,
    /// Daily spend still allowed to finish on target.
    pub allowed_per_day_to_stay_on_track: Decimal,
}

impl Projection {
    /// Returns a copy rounded to display precision.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            avg_daily_spent: round_display(self.avg_daily_spent),
            projected_total: round_display(self.projected_total),
            allowed_per_day_to_stay_on_track: round_display(
                self.allowed_per_day_to_stay_on_track,
            ),
        }
    }
}

/// Full progress picture for one schedule over its active period.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleProgress {
    /// Schedule ID.
    pub schedule_id: ScheduleId,
    /// Resolved period type.
    pub schedule_type: ScheduleType,
    /// The period the numbers cover.
    pub period: Period,
    /// Total spending target.
    pub target_amount: Decimal,
    /// Sum of every in-period expense, matched to a category or not.
    pub total_spent: Decimal,
    /// Unclamped percent of the target spent; `None` when the target is zero.
    pub total_percent: Option<Decimal>,
    /// Total percent clamped to [0, 100] for rendering.
    pub total_display_percent: Option<Decimal>,
    /// Budget left for the period, floored at zero.
    pub total_remaining: Decimal,
    /// Amount spent past the target, zero when under.
    pub overspend: Decimal,
    /// Severity band from the unclamped total percent.
    pub level: ProgressLevel,
    /// Whether the schedule has reminders enabled.
    pub reminders_enabled: bool,
    /// Per-category progress, in schedule category order.
    pub categories: Vec<CategoryProgress>,
    /// Projection of period-end spend; `None` on day zero of a period.
    pub projection: Option<Projection>,
    /// Malformed expense records skipped during aggregation.
    pub skipped_expenses: usize,
}

impl ScheduleProgress {
    /// Returns true if total spend has passed the target.
    #[must_use]
    pub fn is_over_target(&self) -> bool {
        self.overspend > Decimal::ZERO
    }

    /// Returns true if a reminder should fire: reminders are enabled and
    /// the total or any category is at or past 100% unclamped.
    #[must_use]
    pub fn reminder_due(&self) -> bool {
        self.reminders_enabled
            && (self.level == ProgressLevel::Over
                || self.categories.iter().any(|c| c.level == ProgressLevel::Over))
    }

    /// Returns a copy with all monetary amounts rounded to display
    /// precision. Percentages are already rounded at computation.
    #[must_use]
    pub fn rounded_for_display(&self) -> Self {
        let mut display = self.clone();
        display.total_spent = round_display(self.total_spent);
        display.total_remaining = round_display(self.total_remaining);
        display.overspend = round_display(self.overspend);
        display.projection = self.projection.as_ref().map(Projection::rounded);
        for category in &mut display.categories {
            category.spent = round_display(category.spent);
            category.remaining = round_display(category.remaining);
            category.overage = round_display(category.overage);
        }
        display
    }
}

/// One schedule that could not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleFailure {
    /// The schedule that failed.
    pub schedule_id: ScheduleId,
    /// Why evaluation failed.
    pub error: ProgressError,
}

/// Result of evaluating a set of schedules.
///
/// Successes keep the input schedule order; failures are isolated per
/// schedule so one bad record never hides the rest.
#[derive(Debug, Clone, Default)]
pub struct EvaluationBatch {
    /// Progress for every schedule that evaluated cleanly.
    pub progresses: Vec<ScheduleProgress>,
    /// Schedules that failed, with their failure reasons.
    pub failures: Vec<ScheduleFailure>,
}
