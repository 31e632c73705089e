use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

use crate::model::leave_policy::LeaveTypeId;

/// A day quantity that may be uncapped. Serialized as a number or the
/// string `"unlimited"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Allowance {
    Limited(f64),
    Unlimited,
}

impl Allowance {
    pub fn from_max(max_days_allowed: Option<f64>) -> Self {
        match max_days_allowed {
            Some(max) => Allowance::Limited(max),
            None => Allowance::Unlimited,
        }
    }

    pub fn is_unlimited(&self) -> bool {
        matches!(self, Allowance::Unlimited)
    }

    pub fn limit(&self) -> Option<f64> {
        match self {
            Allowance::Limited(days) => Some(*days),
            Allowance::Unlimited => None,
        }
    }
}

impl fmt::Display for Allowance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Allowance::Limited(days) => write!(f, "{days}"),
            Allowance::Unlimited => f.write_str("unlimited"),
        }
    }
}

impl Serialize for Allowance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Allowance::Limited(days) => serializer.serialize_f64(*days),
            Allowance::Unlimited => serializer.serialize_str("unlimited"),
        }
    }
}

impl<'de> Deserialize<'de> for Allowance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Days(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Days(days) => Ok(Allowance::Limited(days)),
            Raw::Text(text) if text.eq_ignore_ascii_case("unlimited") => Ok(Allowance::Unlimited),
            Raw::Text(text) => Err(serde::de::Error::custom(format!(
                "expected a number of days or \"unlimited\", got '{text}'"
            ))),
        }
    }
}

/// Balance of one leave type at one evaluation instant. Always recomputed
/// from history, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BalanceSnapshot {
    #[schema(example = "annual", value_type = String)]
    pub leave_type_id: LeaveTypeId,
    #[schema(value_type = Object, example = 20.0)]
    pub allowed: Allowance,
    #[schema(example = 8.0)]
    pub consumed_approved: f64,
    #[schema(example = 1.5)]
    pub consumed_pending: f64,
    #[schema(value_type = Object, example = 10.5)]
    pub remaining: Allowance,
}
