//! Day counting and balance arithmetic.
//!
//! Every function here is a pure computation over its arguments: the policy
//! catalog and the leave history are always passed in. Nothing is cached, so
//! a caller committing a request must re-read history and evaluate again
//! inside its own transaction; two submissions evaluated against the same
//! stale history can both be accepted.

pub mod balance_calculator;
pub mod calendar;
pub mod day_counter;
pub mod policy_resolver;
pub mod request_validator;

use serde::Serialize;
use utoipa::ToSchema;

pub use balance_calculator::compute_balance;
pub use day_counter::compute_days;
pub use policy_resolver::resolve;
pub use request_validator::validate;

use crate::error::Result;
use crate::model::balance::BalanceSnapshot;
use crate::model::leave_policy::{LeavePolicy, PolicyCatalog};
use crate::model::leave_record::{EditContext, LeaveRecord};
use crate::model::leave_request::LeaveRequest;
use crate::model::verdict::Verdict;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Evaluation {
    pub policy: LeavePolicy,
    pub balance: BalanceSnapshot,
    pub verdict: Verdict,
}

/// Resolves the policy, computes the balance and decides the request.
pub fn evaluate(
    request: &LeaveRequest,
    catalog: &PolicyCatalog,
    history: &[LeaveRecord],
    edit: Option<&EditContext>,
) -> Result<Evaluation> {
    let policy = resolve(&request.leave_type_id, catalog)?;
    let balance = compute_balance(&request.leave_type_id, policy, history, edit)?;
    let verdict = validate(request, policy, &balance)?;

    Ok(Evaluation {
        policy: policy.clone(),
        balance,
        verdict,
    })
}

/// One snapshot per leave type in the catalog, in catalog order.
pub fn summarize_balances(
    catalog: &PolicyCatalog,
    history: &[LeaveRecord],
) -> Result<Vec<BalanceSnapshot>> {
    catalog
        .iter()
        .map(|policy| compute_balance(&policy.leave_type_id, policy, history, None))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::error::LeaveError;
    use crate::model::balance::Allowance;
    use crate::model::leave_record::LeaveStatus;
    use crate::model::leave_request::LeaveDuration;
    use crate::model::verdict::RejectionReason;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn catalog() -> PolicyCatalog {
        vec![
            LeavePolicy::new("annual").max_days(10.0),
            LeavePolicy::new("sick").max_days(14.0).with_weekends(),
            LeavePolicy::new("unpaid").unpaid(),
        ]
        .into()
    }

    #[test]
    fn over_balance_request_is_rejected_with_remainder() {
        // Mon..Wed, 3 days against 2 remaining
        let request = LeaveRequest::new(
            "annual",
            date("2026-03-02"),
            date("2026-03-04"),
            LeaveDuration::FullDay,
        )
        .unwrap();
        let history = vec![LeaveRecord::new("annual", 8.0, LeaveStatus::Approved)];

        let evaluation = evaluate(&request, &catalog(), &history, None).unwrap();

        assert_eq!(evaluation.balance.remaining, Allowance::Limited(2.0));
        assert_eq!(evaluation.verdict.days, 3.0);
        assert!(!evaluation.verdict.accepted);
        assert_eq!(evaluation.verdict.reason, Some(RejectionReason::BalanceExceeded));
        assert!(evaluation.verdict.message.contains("2 days available"));
    }

    #[test]
    fn editing_down_an_approved_leave_is_accepted() {
        let request = LeaveRequest::new(
            "annual",
            date("2026-03-03"),
            date("2026-03-03"),
            LeaveDuration::FullDay,
        )
        .unwrap();
        let history = vec![
            LeaveRecord::new("annual", 6.0, LeaveStatus::Approved),
            LeaveRecord::new("annual", 2.0, LeaveStatus::Approved),
        ];
        let edit = EditContext {
            prior_days: 2.0,
            prior_status: LeaveStatus::Approved,
        };

        let evaluation = evaluate(&request, &catalog(), &history, Some(&edit)).unwrap();

        assert_eq!(evaluation.balance.consumed_approved, 6.0);
        assert_eq!(evaluation.balance.remaining, Allowance::Limited(4.0));
        assert!(evaluation.verdict.accepted);
        assert_eq!(evaluation.verdict.remaining_after, Some(3.0));
    }

    #[test]
    fn unknown_leave_type_propagates() {
        let request = LeaveRequest::new(
            "maternity",
            date("2026-03-02"),
            date("2026-03-02"),
            LeaveDuration::FullDay,
        )
        .unwrap();
        assert_eq!(
            evaluate(&request, &catalog(), &[], None).unwrap_err(),
            LeaveError::UnknownLeaveType("maternity".into())
        );
    }

    #[test]
    fn summary_covers_every_catalog_entry() {
        let history = vec![
            LeaveRecord::new("annual", 2.0, LeaveStatus::Pending),
            LeaveRecord::new("sick", 1.0, LeaveStatus::Approved),
        ];
        let summary = summarize_balances(&catalog(), &history).unwrap();

        let ids: Vec<_> = summary.iter().map(|b| b.leave_type_id.to_string()).collect();
        assert_eq!(ids, vec!["annual", "sick", "unpaid"]);
        assert_eq!(summary[0].remaining, Allowance::Limited(8.0));
        assert_eq!(summary[1].remaining, Allowance::Limited(13.0));
        assert_eq!(summary[2].remaining, Allowance::Unlimited);
    }
}
