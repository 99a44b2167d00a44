//! Expense aggregation over a period.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::warn;

use super::types::Expense;
use crate::period::Period;

/// Spend totals for one period.
///
/// Category keys are lowercased at this boundary; the backend stores both
/// "Food" and "food" depending on which flow created the expense, so the
/// join against schedule categories is case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseAggregate {
    /// Sum of every in-period expense, matched to a category or not.
    pub total: Decimal,
    /// Per-category sums keyed by lowercased category name.
    pub by_category: HashMap<String, Decimal>,
    /// Count of malformed records (missing amount or date) that were skipped.
    pub skipped: usize,
}

impl ExpenseAggregate {
    /// Aggregates the expenses falling inside the period.
    ///
    /// Amounts are summed as exact decimals; no rounding happens here.
    /// An empty or fully-filtered input produces zero totals, not an error.
    #[must_use]
    pub fn collect(expenses: &[Expense], period: &Period) -> Self {
        let mut aggregate = Self::default();

        for expense in expenses {
            let (Some(amount), Some(date)) = (expense.amount, expense.date) else {
                aggregate.skipped += 1;
                continue;
            };

            if !period.contains(date) {
                continue;
            }

            aggregate.total += amount;
            *aggregate
                .by_category
                .entry(expense.category.to_lowercase())
                .or_insert(Decimal::ZERO) += amount;
        }

        if aggregate.skipped > 0 {
            warn!(
                skipped = aggregate.skipped,
                "skipped malformed expense records during aggregation"
            );
        }

        aggregate
    }

    /// Returns the spend recorded against a category, zero if none.
    #[must_use]
    pub fn spent_for(&self, category: &str) -> Decimal {
        self.by_category
            .get(&category.to_lowercase())
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}
