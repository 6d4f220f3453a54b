//! Bundled example plan
//!
//! Substituted when a page is displayed without a report identifier.

use std::path::Path;

use super::types::DashboardPlan;
use crate::loader::LoadError;

const BUNDLED_PLAN: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/fixtures/dashboard_data.json"
));

/// The example plan compiled into the binary
pub fn bundled_plan() -> Result<DashboardPlan, LoadError> {
    DashboardPlan::from_json(BUNDLED_PLAN)
        .map_err(|e| LoadError::Fixture(format!("bundled plan: {}", e)))
}

/// Load a replacement fixture from disk
pub fn plan_from_file(path: &Path) -> Result<DashboardPlan, LoadError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| LoadError::Fixture(format!("{}: {}", path.display(), e)))?;

    DashboardPlan::from_json(&content)
        .map_err(|e| LoadError::Fixture(format!("{}: {}", path.display(), e)))
}

/// Resolve the fallback plan: a configured file when given, else the bundled one
pub fn fallback_plan(path: Option<&Path>) -> Result<DashboardPlan, LoadError> {
    match path {
        Some(path) => {
            tracing::info!("Using fixture plan from {:?}", path);
            plan_from_file(path)
        }
        None => bundled_plan(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bundled_plan_parses() {
        let plan = bundled_plan().unwrap();
        assert!(!plan.global_title.is_empty());
        assert!(plan.widget_count() >= 6);
    }

    #[test]
    fn test_bundled_plan_covers_every_widget_kind() {
        let plan = bundled_plan().unwrap();
        let kinds: Vec<&str> = plan
            .dashboard_plan
            .iter()
            .filter_map(|w| w.component_type.as_deref())
            .collect();

        for kind in ["statCard", "table", "donut", "area", "bar", "line"] {
            assert!(kinds.contains(&kind), "missing {}", kind);
        }
    }

    #[test]
    fn test_plan_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"global_title": "Local", "dashboard_plan": []}}"#).unwrap();

        let plan = fallback_plan(Some(file.path())).unwrap();
        assert_eq!(plan.global_title, "Local");
    }

    #[test]
    fn test_plan_from_bad_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = plan_from_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Fixture(_)));
    }
}
