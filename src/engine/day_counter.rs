use crate::engine::calendar::{count_calendar_days, count_weekdays, is_weekend};
use crate::error::Result;
use crate::model::leave_policy::LeavePolicy;
use crate::model::leave_request::{LeaveDuration, LeaveRequest};

const HALF_DAY: f64 = 0.5;

/// Rounds to one decimal place.
pub fn round_days(days: f64) -> f64 {
    (days * 10.0).round() / 10.0
}

/// Chargeable days for `request` under `policy`. Zero means the range holds
/// no chargeable day and must be treated as an invalid selection.
pub fn compute_days(request: &LeaveRequest, policy: &LeavePolicy) -> Result<f64> {
    let days = match request.duration {
        LeaveDuration::HalfDay => {
            if !policy.includes_weekends && is_weekend(request.from_date) {
                0.0
            } else {
                HALF_DAY
            }
        }
        LeaveDuration::FullDay => {
            let total = count_calendar_days(request.from_date, request.to_date)?;
            let weekdays = count_weekdays(request.from_date, request.to_date)?;

            let charged = if policy.includes_weekends {
                total
            } else if policy.is_sandwich_leave && total > weekdays {
                // any weekend day in the range, enclosed or at an edge
                total
            } else {
                weekdays
            };
            f64::from(charged)
        }
    };

    Ok(round_days(days))
}
