//! Plan Route
//!
//! - GET /api/plan?report_id=.. - The resolved plan as JSON
//!
//! Resolution goes through the same loader as the page; a failed fetch keeps
//! its typed error so the response can carry a proper status.

use axum::{
    extract::{RawQuery, State},
    Json,
};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::loader::ReportParams;
use crate::plan::DashboardPlan;

/// GET /api/plan
pub async fn get_plan(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<DashboardPlan>> {
    let params = ReportParams::from_query(query.as_deref().unwrap_or_default());
    let plan = state.loader().resolve(&params).await?;

    Ok(Json(plan.as_ref().clone()))
}
