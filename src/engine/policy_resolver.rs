use crate::error::{LeaveError, Result};
use crate::model::leave_policy::{LeavePolicy, LeaveTypeId, PolicyCatalog};

/// Looks a policy up in the catalog the caller supplied.
pub fn resolve<'a>(
    leave_type_id: &LeaveTypeId,
    catalog: &'a PolicyCatalog,
) -> Result<&'a LeavePolicy> {
    catalog
        .get(leave_type_id)
        .ok_or_else(|| LeaveError::UnknownLeaveType(leave_type_id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_type() {
        let catalog: PolicyCatalog = vec![LeavePolicy::new("annual").max_days(20.0)].into();
        let policy = resolve(&"annual".into(), &catalog).unwrap();
        assert_eq!(policy.max_days_allowed, Some(20.0));
    }

    #[test]
    fn unknown_type_is_a_hard_error() {
        let catalog: PolicyCatalog = vec![LeavePolicy::new("annual")].into();
        assert_eq!(
            resolve(&"sabbatical".into(), &catalog).unwrap_err(),
            LeaveError::UnknownLeaveType("sabbatical".into())
        );
    }
}
