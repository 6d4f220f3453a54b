//! Dashboard Loader
//!
//! Resolves the plan for one page display and exposes it as exactly one of
//! three states: pending, failed(message) or ready(plan).
//!
//! ## Flow
//!
//! 1. Read `report_id` / `print_mode` from the page address ([`ReportParams`])
//! 2. No `report_id`: substitute the fallback (fixture) plan
//! 3. Otherwise fetch once from the [`PlanSource`]; any failure becomes a
//!    failed state carrying a message
//!
//! A loader runs once. Its state leaves `pending` exactly once and is
//! read-only afterwards.

mod error;
mod params;
mod source;
mod state;

pub use error::{LoadError, LoadResult};
pub use params::ReportParams;
pub use source::{HttpPlanSource, PlanSource};
pub use state::{DashboardLoader, LoadState};
