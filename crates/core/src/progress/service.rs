//! Schedule progress evaluation service.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use tracing::debug;

use super::calculator::ProgressCalculator;
use super::error::ProgressError;
use super::projection::ProjectionEngine;
use super::types::{EvaluationBatch, ProgressLevel, ScheduleFailure, ScheduleProgress};
use crate::expense::{Expense, ExpenseAggregate};
use crate::period::Period;
use crate::schedule::Schedule;

/// Service orchestrating the progress pipeline.
///
/// Pure computation: resolve period, aggregate expenses, compute progress,
/// project period-end spend, assemble. Same inputs always produce the same
/// output; the caller owns fetching and refreshing the data.
pub struct ScheduleProgressService;

impl ScheduleProgressService {
    /// Evaluates one schedule against the supplied expenses.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::InvalidScheduleType` when the schedule's raw
    /// type value is unrecognized. Zero targets, zero limits, and empty
    /// expense sets are ordinary inputs, not errors.
    pub fn evaluate(
        schedule: &Schedule,
        expenses: &[Expense],
        reference: DateTime<Utc>,
    ) -> Result<ScheduleProgress, ProgressError> {
        let schedule_type = schedule.parsed_type()?;
        let period = Period::resolve(schedule_type, reference);
        let aggregate = ExpenseAggregate::collect(expenses, &period);

        let total_percent = ProgressCalculator::percent(aggregate.total, schedule.target_amount);
        let categories = ProgressCalculator::categories(&schedule.categories, &aggregate);
        let projection =
            ProjectionEngine::project(&period, schedule.target_amount, aggregate.total);

        debug!(
            schedule_id = %schedule.id,
            %schedule_type,
            total_spent = %aggregate.total,
            skipped = aggregate.skipped,
            "evaluated schedule progress"
        );

        Ok(ScheduleProgress {
            schedule_id: schedule.id,
            schedule_type,
            period,
            target_amount: schedule.target_amount,
            total_spent: aggregate.total,
            total_percent,
            total_display_percent: ProgressCalculator::display_percent(total_percent),
            total_remaining: ProgressCalculator::remaining(
                schedule.target_amount,
                aggregate.total,
            ),
            overspend: ProgressCalculator::overage(schedule.target_amount, aggregate.total),
            level: ProgressLevel::from_percent(total_percent),
            reminders_enabled: schedule.reminders_enabled,
            categories,
            projection,
            skipped_expenses: aggregate.skipped,
        })
    }

    /// Evaluates one schedule at the current instant.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::evaluate`].
    pub fn evaluate_now(
        schedule: &Schedule,
        expenses: &[Expense],
    ) -> Result<ScheduleProgress, ProgressError> {
        Self::evaluate(schedule, expenses, Utc::now())
    }

    /// Evaluates every enabled schedule independently.
    ///
    /// Schedules never interact: each one only reads its own categories,
    /// so evaluation runs in parallel. A schedule that fails lands in
    /// `failures` without touching the others. Successes keep input order.
    /// Disabled schedules are skipped entirely.
    ///
    /// Pass one `reference` for the whole set so the resulting percentages
    /// and projections are mutually comparable.
    #[must_use]
    pub fn evaluate_all(
        schedules: &[Schedule],
        expenses: &[Expense],
        reference: DateTime<Utc>,
    ) -> EvaluationBatch {
        let results: Vec<_> = schedules
            .par_iter()
            .filter(|schedule| schedule.is_enabled)
            .map(|schedule| (schedule.id, Self::evaluate(schedule, expenses, reference)))
            .collect();

        let mut batch = EvaluationBatch::default();
        for (schedule_id, result) in results {
            match result {
                Ok(progress) => batch.progresses.push(progress),
                Err(error) => batch.failures.push(ScheduleFailure { schedule_id, error }),
            }
        }
        batch
    }
}
