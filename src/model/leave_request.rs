use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

use crate::error::{LeaveError, Result};
use crate::model::leave_policy::LeaveTypeId;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString,
    ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum LeaveDuration {
    #[default]
    FullDay,
    HalfDay,
}

impl<'de> Deserialize<'de> for LeaveDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "unknown leave duration '{raw}', expected FULL_DAY or HALF_DAY"
            ))
        })
    }
}

/// A candidate leave request. Dates are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaveRequest {
    pub leave_type_id: LeaveTypeId,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub duration: LeaveDuration,
}

impl LeaveRequest {
    /// Builds a request, collapsing a half day onto `from` and rejecting
    /// ranges that end before they start.
    pub fn new(
        leave_type_id: impl Into<LeaveTypeId>,
        from_date: NaiveDate,
        to_date: NaiveDate,
        duration: LeaveDuration,
    ) -> Result<Self> {
        let to_date = match duration {
            LeaveDuration::HalfDay => from_date,
            LeaveDuration::FullDay => to_date,
        };

        if to_date < from_date {
            return Err(LeaveError::InvalidRange {
                from: from_date,
                to: to_date,
            });
        }

        Ok(Self {
            leave_type_id: leave_type_id.into(),
            from_date,
            to_date,
            duration,
        })
    }

    /// Same as [`LeaveRequest::new`] but from `YYYY-MM-DD` strings.
    pub fn parse(
        leave_type_id: impl Into<LeaveTypeId>,
        from_date: &str,
        to_date: &str,
        duration: LeaveDuration,
    ) -> Result<Self> {
        let from = parse_date(from_date)?;
        // a half day ignores whatever was typed into the end date
        let to = match duration {
            LeaveDuration::HalfDay => from,
            LeaveDuration::FullDay => parse_date(to_date)?,
        };
        Self::new(leave_type_id, from, to, duration)
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| LeaveError::MalformedDate {
        value: value.to_string(),
    })
}
