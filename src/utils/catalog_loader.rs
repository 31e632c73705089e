use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::leave_policy::PolicyCatalog;

/// Reads the default policy catalog once at startup. Without a path the
/// server starts with an empty catalog and every call must bring its own.
pub fn load_policy_catalog(path: Option<&Path>) -> Result<PolicyCatalog> {
    let Some(path) = path else {
        log::warn!("POLICY_CATALOG_PATH not set, starting with an empty policy catalog");
        return Ok(PolicyCatalog::default());
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read policy catalog {}", path.display()))?;
    let catalog = parse_policy_catalog(&raw)
        .with_context(|| format!("invalid policy catalog {}", path.display()))?;

    log::info!(
        "Policy catalog loaded: {} leave types from {}",
        catalog.len(),
        path.display()
    );

    Ok(catalog)
}

pub fn parse_policy_catalog(raw: &str) -> Result<PolicyCatalog> {
    let catalog: PolicyCatalog = serde_json::from_str(raw)?;
    catalog.check()?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_gives_empty_catalog() {
        assert!(load_policy_catalog(None).unwrap().is_empty());
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let err = load_policy_catalog(Some(Path::new("/nonexistent/policies.json"))).unwrap_err();
        assert!(err.to_string().contains("failed to read policy catalog"));
    }

    #[test]
    fn negative_cap_is_refused() {
        let raw = r#"[{"leave_type_id": "annual", "max_days_allowed": -1}]"#;
        let err = parse_policy_catalog(raw).unwrap_err();
        assert!(err.to_string().contains("invalid max_days_allowed"), "{err}");
    }

    #[test]
    fn parses_policy_list() {
        let raw = r#"[
            {"leave_type_id": "annual", "max_days_allowed": 20, "is_sandwich_leave": true},
            {"leave_type_id": "sick", "max_days_allowed": 14, "includes_weekends": true}
        ]"#;
        let catalog = parse_policy_catalog(raw).unwrap();
        assert_eq!(catalog.len(), 2);
    }
}
