//! Linear end-of-period spend projection.

use rust_decimal::Decimal;

use super::types::Projection;
use crate::period::Period;

/// Engine extrapolating the current spend rate to period end.
///
/// Works for any period with a known day count; monthly is the primary
/// consumer but daily, weekly, and yearly periods project the same way.
pub struct ProjectionEngine;

impl ProjectionEngine {
    /// Projects period-end spend from the average daily rate so far.
    ///
    /// Returns `None` when no day has elapsed: there is no average to
    /// extrapolate on day zero, and dividing by zero is not an answer.
    /// With no remaining days the allowed daily rate is zero.
    #[must_use]
    pub fn project(period: &Period, target_amount: Decimal, total_spent: Decimal) -> Option<Projection> {
        if period.elapsed_days == 0 {
            return None;
        }

        let avg_daily_spent = total_spent / Decimal::from(period.elapsed_days);
        let projected_total = avg_daily_spent * Decimal::from(period.total_days);

        let remaining_budget = (target_amount - total_spent).max(Decimal::ZERO);
        let allowed_per_day_to_stay_on_track = if period.remaining_days > 0 {
            remaining_budget / Decimal::from(period.remaining_days)
        } else {
            Decimal::ZERO
        };

        Some(Projection {
            avg_daily_spent,
            projected_total,
            allowed_per_day_to_stay_on_track,
        })
    }
}
