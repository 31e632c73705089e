use std::collections::BTreeMap;

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{LeaveError, Result};

/// Identifier of a leave type, e.g. `annual`, `sick`, `unpaid`.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, From,
    ToSchema,
)]
#[serde(transparent)]
pub struct LeaveTypeId(String);

impl LeaveTypeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LeaveTypeId {
    fn from(value: &str) -> Self {
        LeaveTypeId(value.to_string())
    }
}

fn default_paid() -> bool {
    true
}

/// Day-counting rules for one leave type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeavePolicy {
    #[schema(example = "annual", value_type = String)]
    pub leave_type_id: LeaveTypeId,
    /// `null` means the leave type has no cap
    #[schema(example = 20.0, nullable = true)]
    #[serde(default)]
    pub max_days_allowed: Option<f64>,
    /// Saturdays and Sundays are charged like any other day
    #[schema(example = false)]
    #[serde(default)]
    pub includes_weekends: bool,
    /// A weekend inside a range of working days is charged as well
    #[schema(example = false)]
    #[serde(default)]
    pub is_sandwich_leave: bool,
    /// Informational only, never affects the day count
    #[schema(example = true)]
    #[serde(default = "default_paid")]
    pub is_paid: bool,
}

impl LeavePolicy {
    pub fn new(leave_type_id: impl Into<LeaveTypeId>) -> Self {
        Self {
            leave_type_id: leave_type_id.into(),
            max_days_allowed: None,
            includes_weekends: false,
            is_sandwich_leave: false,
            is_paid: true,
        }
    }

    pub fn max_days(mut self, max: f64) -> Self {
        self.max_days_allowed = Some(max);
        self
    }

    pub fn with_weekends(mut self) -> Self {
        self.includes_weekends = true;
        self
    }

    pub fn sandwich(mut self) -> Self {
        self.is_sandwich_leave = true;
        self
    }

    pub fn unpaid(mut self) -> Self {
        self.is_paid = false;
        self
    }

    /// A cap, when present, is a finite non-negative number of days.
    pub fn check(&self) -> Result<()> {
        match self.max_days_allowed {
            Some(max) if !max.is_finite() || max < 0.0 => Err(LeaveError::InvalidAllowance {
                leave_type_id: self.leave_type_id.clone(),
                value: max,
            }),
            _ => Ok(()),
        }
    }
}

/// Policies keyed by leave type. On the wire this is a plain list of
/// policies; a later entry replaces an earlier one with the same id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<LeavePolicy>", into = "Vec<LeavePolicy>")]
pub struct PolicyCatalog {
    policies: BTreeMap<LeaveTypeId, LeavePolicy>,
}

impl PolicyCatalog {
    pub fn get(&self, leave_type_id: &LeaveTypeId) -> Option<&LeavePolicy> {
        self.policies.get(leave_type_id)
    }

    pub fn insert(&mut self, policy: LeavePolicy) -> Option<LeavePolicy> {
        self.policies.insert(policy.leave_type_id.clone(), policy)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LeavePolicy> {
        self.policies.values()
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    pub fn check(&self) -> Result<()> {
        self.iter().try_for_each(LeavePolicy::check)
    }
}

impl FromIterator<LeavePolicy> for PolicyCatalog {
    fn from_iter<I: IntoIterator<Item = LeavePolicy>>(iter: I) -> Self {
        let mut catalog = PolicyCatalog::default();
        for policy in iter {
            catalog.insert(policy);
        }
        catalog
    }
}

impl From<Vec<LeavePolicy>> for PolicyCatalog {
    fn from(policies: Vec<LeavePolicy>) -> Self {
        policies.into_iter().collect()
    }
}

impl From<PolicyCatalog> for Vec<LeavePolicy> {
    fn from(catalog: PolicyCatalog) -> Self {
        catalog.policies.into_values().collect()
    }
}
