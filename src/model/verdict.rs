use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Why a well-formed request was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// The range has no chargeable day under the policy
    InvalidDateSelection,
    BalanceExhausted,
    BalanceExceeded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Verdict {
    #[schema(example = true)]
    pub accepted: bool,
    #[schema(example = 2.0)]
    pub days: f64,
    #[schema(example = "2 days requested, 6 days remaining after this request")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectionReason>,
    /// Balance left once an accepted request is taken. `None` when the leave
    /// type is uncapped or the request was rejected.
    #[schema(example = 6.0, nullable = true)]
    #[serde(default)]
    pub remaining_after: Option<f64>,
}

impl Verdict {
    pub fn accepted(days: f64, message: String, remaining_after: Option<f64>) -> Self {
        Self {
            accepted: true,
            days,
            message,
            reason: None,
            remaining_after,
        }
    }

    pub fn rejected(days: f64, reason: RejectionReason, message: String) -> Self {
        Self {
            accepted: false,
            days,
            message,
            reason: Some(reason),
            remaining_after: None,
        }
    }
}
