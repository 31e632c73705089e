use utoipa::OpenApi;

use crate::api::leave::{
    BalanceBody, BalancesBody, ComputeDaysBody, ComputeDaysResponse, EvaluateBody,
    LeaveRequestBody,
};
use crate::engine::Evaluation;
use crate::model::balance::BalanceSnapshot;
use crate::model::leave_policy::LeavePolicy;
use crate::model::leave_record::{EditContext, LeaveRecord, LeaveStatus};
use crate::model::leave_request::LeaveDuration;
use crate::model::verdict::{RejectionReason, Verdict};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave Engine API",
        version = "0.1.0",
        description = r#"
## Leave day-counting and balance engine

Computes how many days a leave request charges under its leave type's policy,
what balance the user has left, and whether the request fits.

### 🔹 Policies
- **Weekends**: counted only when the policy includes them
- **Sandwich leave**: weekend days inside a range with working days are charged
- **Caps**: `max_days_allowed` or `null` for unlimited

### 📦 Request model
- The caller supplies the leave history on every call; nothing is stored
- Policies come from the server catalog unless the call sends its own
- Rejected requests return **200** with `accepted: false` and a reason
- Malformed input returns **400**, unknown leave types **404**

### ⚠️ Committing
Re-evaluate against freshly read history inside the same transaction that
stores the leave, otherwise two concurrent submissions can overshoot the cap.
"#,
    ),
    paths(
        crate::api::leave::list_policies,
        crate::api::leave::compute_days,
        crate::api::leave::balance,
        crate::api::leave::balances,
        crate::api::leave::evaluate,
    ),
    components(
        schemas(
            LeavePolicy,
            LeaveRecord,
            LeaveStatus,
            LeaveDuration,
            EditContext,
            BalanceSnapshot,
            Verdict,
            RejectionReason,
            Evaluation,
            LeaveRequestBody,
            ComputeDaysBody,
            ComputeDaysResponse,
            BalanceBody,
            BalancesBody,
            EvaluateBody
        )
    ),
    tags(
        (name = "Leave", description = "Leave day counting and balance APIs"),
    )
)]
pub struct ApiDoc;
