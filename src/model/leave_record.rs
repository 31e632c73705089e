use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

use crate::error::{LeaveError, Result as LeaveResult};
use crate::model::leave_policy::LeaveTypeId;

/// Day amounts on file are finite and never negative.
pub fn check_days(value: f64) -> LeaveResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LeaveError::InvalidDays { value })
    }
}

/// Accepts any casing on input (`"Approved"`, `"APPROVED"`, `"approved"`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl<'de> Deserialize<'de> for LeaveStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("unknown leave status '{raw}'")))
    }
}

/// A leave already on file for the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaveRecord {
    #[schema(example = "annual", value_type = String)]
    pub leave_type_id: LeaveTypeId,
    /// May be fractional in half-day steps
    #[schema(example = 2.5)]
    pub days: f64,
    #[schema(example = "APPROVED")]
    pub status: LeaveStatus,
}

impl LeaveRecord {
    pub fn new(leave_type_id: impl Into<LeaveTypeId>, days: f64, status: LeaveStatus) -> Self {
        Self {
            leave_type_id: leave_type_id.into(),
            days,
            status,
        }
    }
}

impl LeaveRecord {
    pub fn check(&self) -> LeaveResult<()> {
        check_days(self.days).map(|_| ())
    }
}

/// What the record being edited looked like before the edit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EditContext {
    #[schema(example = 2.0)]
    pub prior_days: f64,
    #[schema(example = "APPROVED")]
    pub prior_status: LeaveStatus,
}

impl EditContext {
    pub fn check(&self) -> LeaveResult<()> {
        check_days(self.prior_days).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_spelling_drift_is_absorbed() {
        for raw in [r#""Approved""#, r#""APPROVED""#, r#""approved""#] {
            let status: LeaveStatus = serde_json::from_str(raw).unwrap();
            assert_eq!(status, LeaveStatus::Approved);
        }
        assert!(serde_json::from_str::<LeaveStatus>(r#""cancelled""#).is_err());
    }

    #[test]
    fn record_from_json() {
        let record: LeaveRecord = serde_json::from_str(
            r#"{"leave_type_id": "sick", "days": 0.5, "status": "Pending"}"#,
        )
        .unwrap();
        assert_eq!(record, LeaveRecord::new("sick", 0.5, LeaveStatus::Pending));
    }

    #[test]
    fn negative_or_non_finite_days_are_refused() {
        assert_eq!(check_days(0.0), Ok(0.0));
        assert_eq!(
            LeaveRecord::new("annual", -50.0, LeaveStatus::Approved).check(),
            Err(LeaveError::InvalidDays { value: -50.0 })
        );
        assert!(LeaveRecord::new("annual", f64::INFINITY, LeaveStatus::Pending)
            .check()
            .is_err());
        let edit = EditContext {
            prior_days: f64::NAN,
            prior_status: LeaveStatus::Approved,
        };
        assert!(edit.check().is_err());
    }
}
