use crate::engine::day_counter::{compute_days, round_days};
use crate::error::Result;
use crate::model::balance::{Allowance, BalanceSnapshot};
use crate::model::leave_policy::LeavePolicy;
use crate::model::leave_request::LeaveRequest;
use crate::model::verdict::{RejectionReason, Verdict};

/// Slack for comparing sums of half days.
const EPSILON: f64 = 1e-4;

pub fn format_days(days: f64) -> String {
    let days = round_days(days);
    let unit = if days == 1.0 { "day" } else { "days" };
    if days.fract() == 0.0 {
        format!("{days:.0} {unit}")
    } else {
        format!("{days} {unit}")
    }
}

/// Counts the request's days and decides it against `balance`.
///
/// Only malformed requests fail; every business rejection comes back as an
/// unaccepted verdict.
pub fn validate(
    request: &LeaveRequest,
    policy: &LeavePolicy,
    balance: &BalanceSnapshot,
) -> Result<Verdict> {
    let days = compute_days(request, policy)?;
    Ok(decide(days, balance))
}

/// The decision rules on an already computed day count. First match wins.
pub fn decide(days: f64, balance: &BalanceSnapshot) -> Verdict {
    if days <= 0.0 {
        return Verdict::rejected(
            days,
            RejectionReason::InvalidDateSelection,
            "invalid date selection".to_string(),
        );
    }

    let remaining = match balance.remaining {
        Allowance::Unlimited => {
            return Verdict::accepted(days, format!("{} requested", format_days(days)), None);
        }
        Allowance::Limited(remaining) => remaining,
    };

    if remaining <= 0.0 {
        return Verdict::rejected(
            days,
            RejectionReason::BalanceExhausted,
            "no balance remaining for this leave type".to_string(),
        );
    }

    if days > remaining + EPSILON {
        return Verdict::rejected(
            days,
            RejectionReason::BalanceExceeded,
            format!(
                "requested {} exceeds the available balance, only {} available for this leave type",
                format_days(days),
                format_days(remaining)
            ),
        );
    }

    let after = round_days((remaining - days).max(0.0));
    Verdict::accepted(
        days,
        format!(
            "{} requested, {} remaining after this request",
            format_days(days),
            format_days(after)
        ),
        Some(after),
    )
}
