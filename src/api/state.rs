//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::loader::{DashboardLoader, HttpPlanSource, LoadResult, PlanSource};
use crate::plan::{fallback_plan, DashboardPlan};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Where plans for a `report_id` come from
    pub source: Arc<dyn PlanSource>,
    /// Plan shown when no `report_id` is given
    pub fallback: Arc<DashboardPlan>,
    /// Server configuration
    pub config: Arc<Config>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(source: Arc<dyn PlanSource>, fallback: DashboardPlan, config: Config) -> Self {
        Self {
            source,
            fallback: Arc::new(fallback),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Build the HTTP source and fallback plan described by `config`
    pub fn from_config(config: Config) -> LoadResult<Self> {
        let source = HttpPlanSource::new(
            config.source.base_url.clone(),
            config.source.request_timeout(),
        )?;
        let fallback = fallback_plan(config.source.fixture_path.as_deref())?;

        Ok(Self::new(Arc::new(source), fallback, config))
    }

    /// A fresh loader for one page display
    pub fn loader(&self) -> DashboardLoader {
        DashboardLoader::new(Arc::clone(&self.source), Arc::clone(&self.fallback))
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
