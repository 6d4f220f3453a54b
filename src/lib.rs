//! # Planboard
//!
//! Renders report dashboards described by a JSON plan. A plan is fetched once
//! per page display from a report service (or replaced by a bundled example
//! when no report is requested) and every widget descriptor in it is turned
//! into a card: stat cards, tables, donut charts and area/bar/line charts.
//!
//! ## Modules
//!
//! - [`plan`]: Plan document types and the bundled example plan
//! - [`loader`]: One-shot plan loading with a pending/failed/ready state
//! - [`widget`]: Dispatch from descriptor to widget model
//! - [`render`]: HTML and inline SVG output
//! - [`api`]: HTTP server with Axum
//! - [`config`]: File and environment configuration
//! - [`logging`]: Subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use planboard::loader::{DashboardLoader, HttpPlanSource, ReportParams};
//! use planboard::plan::bundled_plan;
//! use planboard::render::render_document;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = HttpPlanSource::new("http://localhost:8000", Duration::from_secs(30))?;
//!     let loader = DashboardLoader::new(Arc::new(source), Arc::new(bundled_plan()?));
//!
//!     let params = ReportParams::from_address("/?report_id=42&print_mode=true");
//!     let state = loader.load(&params).await;
//!
//!     let html = render_document(&state, &params.render_options());
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod loader;
pub mod logging;
pub mod plan;
pub mod render;
pub mod widget;

// Re-export top-level types for convenience
pub use plan::{DashboardPlan, Layout, SeriesSpec, WidgetDescriptor};

pub use loader::{
    DashboardLoader, HttpPlanSource, LoadError, LoadResult, LoadState, PlanSource, ReportParams,
};

pub use widget::{dispatch, ComponentType, Notice, RenderOptions, Widget};

pub use render::render_document;

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig, ServerConfig, SourceConfig};
