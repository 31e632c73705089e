use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use chrono::NaiveDate;
use serde_json::json;
use thiserror::Error;

use crate::model::leave_policy::LeaveTypeId;

/// Hard faults. Business rejections are never represented here, they come
/// back as an unaccepted [`Verdict`](crate::model::verdict::Verdict).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LeaveError {
    #[error("invalid date range: {to} is before {from}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    #[error("malformed date '{value}', expected YYYY-MM-DD")]
    MalformedDate { value: String },

    #[error("unknown leave type: {0}")]
    UnknownLeaveType(LeaveTypeId),

    #[error("leave days must be a finite, non-negative number, got {value}")]
    InvalidDays { value: f64 },

    #[error("leave type {leave_type_id} has an invalid max_days_allowed: {value}")]
    InvalidAllowance { leave_type_id: LeaveTypeId, value: f64 },

    #[error("edited record had {prior_days} days but only {on_file} are on file for its status")]
    EditMismatch { prior_days: f64, on_file: f64 },
}

pub type Result<T> = std::result::Result<T, LeaveError>;

impl ResponseError for LeaveError {
    fn status_code(&self) -> StatusCode {
        match self {
            LeaveError::InvalidRange { .. }
            | LeaveError::MalformedDate { .. }
            | LeaveError::InvalidDays { .. }
            | LeaveError::InvalidAllowance { .. }
            | LeaveError::EditMismatch { .. } => StatusCode::BAD_REQUEST,
            LeaveError::UnknownLeaveType(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.to_string()
        }))
    }
}
