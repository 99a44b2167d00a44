//! Period boundary arithmetic.
//!
//! A period is the concrete date range a schedule is currently measured
//! against, derived fresh from `(schedule type, reference instant)` on every
//! evaluation. Boundaries are half-open: `[start, end)`. An instant landing
//! exactly on a boundary belongs to the period starting there.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schedule::ScheduleType;

/// The active period of a schedule at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Start of the period (inclusive).
    pub start: DateTime<Utc>,
    /// End of the period (exclusive).
    pub end: DateTime<Utc>,
    /// Total number of days in the period.
    pub total_days: u32,
    /// Days elapsed including the in-progress day.
    pub elapsed_days: u32,
    /// Days left after the in-progress day, never negative.
    pub remaining_days: u32,
}

impl Period {
    /// Resolves the active period for a schedule type at a reference instant.
    ///
    /// Week starts are Monday. Monthly periods span the calendar month of
    /// the reference (28-31 days); yearly periods honor leap years.
    #[must_use]
    pub fn resolve(schedule_type: ScheduleType, reference: DateTime<Utc>) -> Self {
        let today = reference.date_naive();

        let (start_date, end_date, elapsed_days) = match schedule_type {
            ScheduleType::Daily => (today, today + Days::new(1), 1),
            ScheduleType::Weekly => {
                let offset = today.weekday().num_days_from_monday();
                let monday = today - Days::new(u64::from(offset));
                (monday, monday + Days::new(7), offset + 1)
            }
            ScheduleType::Monthly => {
                let first = first_of_month(today.year(), today.month());
                let next = if today.month() == 12 {
                    first_of_month(today.year() + 1, 1)
                } else {
                    first_of_month(today.year(), today.month() + 1)
                };
                (first, next, today.day())
            }
            ScheduleType::Yearly => {
                let jan1 = first_of_month(today.year(), 1);
                (jan1, first_of_month(today.year() + 1, 1), today.ordinal())
            }
        };

        let total_days = u32::try_from((end_date - start_date).num_days()).unwrap_or(0);
        // remaining_days must never go negative
        let elapsed_days = elapsed_days.min(total_days);

        Self {
            start: midnight(start_date),
            end: midnight(end_date),
            total_days,
            elapsed_days,
            remaining_days: total_days - elapsed_days,
        }
    }

    /// Returns true if the instant falls inside the half-open period.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}
