//! Load state
//!
//! The tri-state lives in a watch channel so the rendering layer can show a
//! loading overlay and then wait for the single fetch to settle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;

use super::error::LoadResult;
use super::params::ReportParams;
use super::source::PlanSource;
use crate::plan::DashboardPlan;

/// Progress of one dashboard load
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Pending,
    Failed(String),
    Ready(Arc<DashboardPlan>),
}

impl LoadState {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    pub fn is_settled(&self) -> bool {
        !self.is_pending()
    }

    pub fn plan(&self) -> Option<&DashboardPlan> {
        match self {
            LoadState::Ready(plan) => Some(plan),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// One-shot loader for a single page display
pub struct DashboardLoader {
    source: Arc<dyn PlanSource>,
    fallback: Arc<DashboardPlan>,
    state: watch::Sender<LoadState>,
    started: AtomicBool,
}

impl DashboardLoader {
    /// Create a pending loader
    pub fn new(source: Arc<dyn PlanSource>, fallback: Arc<DashboardPlan>) -> Self {
        let (state, _) = watch::channel(LoadState::Pending);

        Self {
            source,
            fallback,
            state,
            started: AtomicBool::new(false),
        }
    }

    /// Watch state changes
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state.subscribe()
    }

    /// Current state
    pub fn state(&self) -> LoadState {
        self.state.borrow().clone()
    }

    /// Run the load for `params`.
    ///
    /// Only the first call does any work; later calls wait for and return the
    /// state the first one settled on. If the first call is dropped before the
    /// fetch completes, the load settles as failed.
    pub async fn load(&self, params: &ReportParams) -> LoadState {
        if self.started.swap(true, Ordering::SeqCst) {
            return self.settled().await;
        }

        let guard = CancelGuard { loader: self };

        let next = match self.resolve(params).await {
            Ok(plan) => LoadState::Ready(plan),
            Err(e) => LoadState::Failed(e.to_string()),
        };

        self.settle(next);
        drop(guard);
        self.state()
    }

    /// Fixture when no `report_id` is given, one fetch otherwise.
    ///
    /// Does not touch the load state; callers that need the typed error use
    /// this directly.
    pub async fn resolve(&self, params: &ReportParams) -> LoadResult<Arc<DashboardPlan>> {
        let Some(report_id) = params.report_id() else {
            tracing::info!(
                widgets = self.fallback.widget_count(),
                "No report_id given, using fixture plan"
            );
            return Ok(Arc::clone(&self.fallback));
        };

        tracing::info!(
            report_id = %report_id,
            source = %self.source.describe(),
            "Fetching dashboard plan"
        );

        let started = Instant::now();
        match self.source.fetch(report_id).await {
            Ok(plan) => {
                tracing::info!(
                    report_id = %report_id,
                    widgets = plan.widget_count(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Dashboard plan loaded"
                );
                Ok(Arc::new(plan))
            }
            Err(e) => {
                tracing::warn!(
                    report_id = %report_id,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %e,
                    "Dashboard plan load failed"
                );
                Err(e)
            }
        }
    }

    /// Wait until the state leaves `pending`
    pub async fn settled(&self) -> LoadState {
        let mut rx = self.subscribe();
        let settled = match rx.wait_for(LoadState::is_settled).await {
            Ok(state) => state.clone(),
            // Sender dropped; it lives as long as `self`, so report what is there
            Err(_) => self.state(),
        };
        settled
    }

    /// Write the settled state; a state that already left `pending` is kept
    fn settle(&self, next: LoadState) -> bool {
        self.state.send_if_modified(move |current| {
            if current.is_pending() {
                *current = next;
                true
            } else {
                false
            }
        })
    }
}

/// Settles a loader whose first `load` was dropped mid-fetch
struct CancelGuard<'a> {
    loader: &'a DashboardLoader,
}

impl Drop for CancelGuard<'_> {
    fn drop(&mut self) {
        if self.loader.settle(LoadState::Failed(CANCELLED.to_string())) {
            tracing::warn!("Dashboard load dropped before it settled");
        }
    }
}

const CANCELLED: &str = "Dashboard load was cancelled";
