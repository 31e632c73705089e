use crate::engine::day_counter::round_days;
use crate::error::{LeaveError, Result};
use crate::model::balance::{Allowance, BalanceSnapshot};
use crate::model::leave_policy::{LeavePolicy, LeaveTypeId};
use crate::model::leave_record::{EditContext, LeaveRecord, LeaveStatus};

/// Slack for comparing sums of half days.
const EPSILON: f64 = 1e-4;

/// Takes the edited record's prior amount back out of its bucket. The prior
/// amount has to be on file, otherwise the edit context does not belong to
/// this history.
fn remove_prior(bucket: f64, prior_days: f64) -> Result<f64> {
    if prior_days > bucket + EPSILON {
        return Err(LeaveError::EditMismatch {
            prior_days,
            on_file: round_days(bucket),
        });
    }
    Ok(bucket - prior_days)
}

/// Remaining balance of one leave type given the user's history.
///
/// Rejected records never consume balance. When `edit` is present the
/// record being edited is taken back out of the bucket it was counted in,
/// so it is not charged against itself.
pub fn compute_balance(
    leave_type_id: &LeaveTypeId,
    policy: &LeavePolicy,
    history: &[LeaveRecord],
    edit: Option<&EditContext>,
) -> Result<BalanceSnapshot> {
    policy.check()?;

    let mut approved = 0.0;
    let mut pending = 0.0;
    for record in history.iter().filter(|record| &record.leave_type_id == leave_type_id) {
        record.check()?;
        match record.status {
            LeaveStatus::Approved => approved += record.days,
            LeaveStatus::Pending => pending += record.days,
            LeaveStatus::Rejected => {}
        }
    }

    if let Some(edit) = edit {
        edit.check()?;
        match edit.prior_status {
            LeaveStatus::Approved => approved = remove_prior(approved, edit.prior_days)?,
            LeaveStatus::Pending => pending = remove_prior(pending, edit.prior_days)?,
            LeaveStatus::Rejected => {}
        }
    }

    let allowed = Allowance::from_max(policy.max_days_allowed);
    let remaining = match allowed {
        Allowance::Limited(max) => {
            Allowance::Limited(round_days((max - approved - pending).max(0.0)))
        }
        Allowance::Unlimited => Allowance::Unlimited,
    };

    Ok(BalanceSnapshot {
        leave_type_id: leave_type_id.clone(),
        allowed,
        consumed_approved: round_days(approved),
        consumed_pending: round_days(pending),
        remaining,
    })
}
