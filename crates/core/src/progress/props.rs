//! Property-based tests for schedule progress evaluation.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use spendtrack_shared::types::{ExpenseId, ScheduleId};

use super::service::ScheduleProgressService;
use crate::expense::Expense;
use crate::schedule::{CategoryBudget, Schedule};

/// Mixed-case spellings on purpose: the join is case-insensitive.
const CATEGORY_POOL: [&str; 4] = ["Food", "transport", "RENT", "misc"];

fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 15, 12, 0, 0).unwrap()
}

/// Strategy for monetary amounts (0.00 to 100,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a well-formed expense somewhere in April 2025.
fn expense() -> impl Strategy<Value = Expense> {
    (amount(), 1u32..=30, 0u32..24, 0usize..CATEGORY_POOL.len()).prop_map(
        |(amount, day, hour, category)| Expense {
            id: ExpenseId::new(),
            category: CATEGORY_POOL[category].to_string(),
            amount: Some(amount),
            date: Some(Utc.with_ymd_and_hms(2025, 4, day, hour, 0, 0).unwrap()),
            receipt_url: None,
        },
    )
}

fn expenses(max: usize) -> impl Strategy<Value = Vec<Expense>> {
    prop::collection::vec(expense(), 0..=max)
}

/// Strategy for a monthly schedule with Food and Rent categories.
fn schedule() -> impl Strategy<Value = Schedule> {
    (amount(), amount(), amount()).prop_map(|(target, food_limit, rent_limit)| Schedule {
        id: ScheduleId::new(),
        schedule_type: "monthly".to_string(),
        target_amount: target,
        categories: vec![
            CategoryBudget {
                name: "Food".to_string(),
                limit: food_limit,
            },
            CategoryBudget {
                name: "Rent".to_string(),
                limit: rent_limit,
            },
        ],
        reminders_enabled: false,
        is_enabled: true,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* set of in-period expenses, total spend SHALL equal the
    /// exact decimal sum of their amounts.
    #[test]
    fn prop_total_is_exact_sum(
        schedule in schedule(),
        expenses in expenses(40),
    ) {
        let progress =
            ScheduleProgressService::evaluate(&schedule, &expenses, reference()).unwrap();

        let expected: Decimal = expenses.iter().filter_map(|e| e.amount).sum();
        prop_assert_eq!(progress.total_spent, expected);
    }

    /// *For any* inputs, `total_remaining - overspend` SHALL equal
    /// `target_amount - total_spent` (the two floored values carry the
    /// signed remainder between them).
    #[test]
    fn prop_remaining_and_overspend_balance(
        schedule in schedule(),
        expenses in expenses(40),
    ) {
        let progress =
            ScheduleProgressService::evaluate(&schedule, &expenses, reference()).unwrap();

        prop_assert_eq!(
            progress.total_remaining - progress.overspend,
            progress.target_amount - progress.total_spent
        );
    }

    /// *For any* inputs, category buckets SHALL be disjoint subsets of the
    /// total: their sum never exceeds it, while unmatched expenses still
    /// count toward the total.
    #[test]
    fn prop_category_buckets_never_exceed_total(
        schedule in schedule(),
        expenses in expenses(40),
    ) {
        let progress =
            ScheduleProgressService::evaluate(&schedule, &expenses, reference()).unwrap();

        let bucket_sum: Decimal = progress.categories.iter().map(|c| c.spent).sum();
        prop_assert!(bucket_sum <= progress.total_spent);
    }

    /// *For any* inputs, evaluation SHALL be deterministic.
    #[test]
    fn prop_evaluate_is_deterministic(
        schedule in schedule(),
        expenses in expenses(20),
    ) {
        let first =
            ScheduleProgressService::evaluate(&schedule, &expenses, reference()).unwrap();
        let second =
            ScheduleProgressService::evaluate(&schedule, &expenses, reference()).unwrap();

        prop_assert_eq!(first.total_spent, second.total_spent);
        prop_assert_eq!(first.total_percent, second.total_percent);
        prop_assert_eq!(first.projection, second.projection);
        prop_assert_eq!(first.categories.len(), second.categories.len());
    }

    /// *For any* inputs, display percents SHALL sit inside [0, 100] while
    /// the raw percent stays unclamped and non-negative.
    #[test]
    fn prop_display_percent_is_clamped(
        schedule in schedule(),
        expenses in expenses(40),
    ) {
        let progress =
            ScheduleProgressService::evaluate(&schedule, &expenses, reference()).unwrap();

        for percent in progress
            .categories
            .iter()
            .filter_map(|c| c.display_percent)
            .chain(progress.total_display_percent)
        {
            prop_assert!(percent >= Decimal::ZERO && percent <= Decimal::ONE_HUNDRED);
        }
        for percent in progress
            .categories
            .iter()
            .filter_map(|c| c.percent)
            .chain(progress.total_percent)
        {
            prop_assert!(percent >= Decimal::ZERO);
        }
    }

    /// *For any* mid-month evaluation, the projection SHALL extrapolate
    /// linearly: projected total equals the daily average times the day
    /// count, and the allowed daily rate is never negative.
    #[test]
    fn prop_projection_is_linear(
        schedule in schedule(),
        expenses in expenses(40),
    ) {
        let progress =
            ScheduleProgressService::evaluate(&schedule, &expenses, reference()).unwrap();

        let projection = progress.projection.unwrap();
        prop_assert_eq!(
            projection.projected_total,
            projection.avg_daily_spent * Decimal::from(progress.period.total_days)
        );
        prop_assert!(projection.allowed_per_day_to_stay_on_track >= Decimal::ZERO);
    }

    /// *For any* spend against a zero target, the percent SHALL surface as
    /// `None`, never zero or a division blowup.
    #[test]
    fn prop_zero_target_yields_no_percent(
        expenses in expenses(10),
    ) {
        let schedule = Schedule {
            id: ScheduleId::new(),
            schedule_type: "monthly".to_string(),
            target_amount: Decimal::ZERO,
            categories: vec![CategoryBudget {
                name: "Food".to_string(),
                limit: Decimal::ZERO,
            }],
            reminders_enabled: false,
            is_enabled: true,
        };

        let progress =
            ScheduleProgressService::evaluate(&schedule, &expenses, reference()).unwrap();

        prop_assert_eq!(progress.total_percent, None);
        prop_assert_eq!(progress.categories[0].percent, None);
    }
}
