//! Progress calculation against schedule targets.

use rust_decimal::Decimal;

use super::types::{CategoryProgress, ProgressLevel};
use crate::expense::ExpenseAggregate;
use crate::schedule::CategoryBudget;

/// Calculator for spend-vs-limit progress figures.
pub struct ProgressCalculator;

impl ProgressCalculator {
    /// Percent of `limit` consumed by `spent`, rounded to two places.
    ///
    /// Returns `None` when the limit is zero: "no target set" must reach
    /// the presentation layer explicitly, never as 0% or infinity.
    #[must_use]
    pub fn percent(spent: Decimal, limit: Decimal) -> Option<Decimal> {
        if limit > Decimal::ZERO {
            Some((spent / limit * Decimal::ONE_HUNDRED).round_dp(2))
        } else {
            None
        }
    }

    /// Clamps an unclamped percent into [0, 100] for progress bars.
    #[must_use]
    pub fn display_percent(percent: Option<Decimal>) -> Option<Decimal> {
        percent.map(|p| p.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED))
    }

    /// Budget left against a limit, floored at zero for display.
    #[must_use]
    pub fn remaining(limit: Decimal, spent: Decimal) -> Decimal {
        (limit - spent).max(Decimal::ZERO)
    }

    /// Signed over-limit amount, zero when under.
    #[must_use]
    pub fn overage(limit: Decimal, spent: Decimal) -> Decimal {
        (spent - limit).max(Decimal::ZERO)
    }

    /// Computes progress for one category of a schedule.
    ///
    /// A category with no matching expenses this period has simply spent
    /// zero; that is not an error.
    #[must_use]
    pub fn category(budget: &CategoryBudget, aggregate: &ExpenseAggregate) -> CategoryProgress {
        let spent = aggregate.spent_for(&budget.name);
        let percent = Self::percent(spent, budget.limit);

        CategoryProgress {
            name: budget.name.clone(),
            limit: budget.limit,
            spent,
            percent,
            display_percent: Self::display_percent(percent),
            remaining: Self::remaining(budget.limit, spent),
            overage: Self::overage(budget.limit, spent),
            level: ProgressLevel::from_percent(percent),
        }
    }

    /// Computes per-category progress in schedule category order.
    ///
    /// Output order follows the schedule's category list, not aggregate
    /// iteration order.
    #[must_use]
    pub fn categories(
        budgets: &[CategoryBudget],
        aggregate: &ExpenseAggregate,
    ) -> Vec<CategoryProgress> {
        budgets
            .iter()
            .map(|budget| Self::category(budget, aggregate))
            .collect()
    }
}
