//! Dashboard Route
//!
//! - GET /?report_id=..&print_mode=.. - One dashboard display
//!
//! The document head and the loading overlay are flushed immediately; the
//! rest of the page follows once the plan load settles. Load failures are
//! part of the page, so the status is always 200.

use axum::{
    body::{Body, Bytes},
    extract::{RawQuery, State},
    http::header,
    response::{IntoResponse, Response},
};
use futures_util::stream::{self, StreamExt};
use std::convert::Infallible;
use std::sync::Arc;

use crate::api::state::AppState;
use crate::loader::ReportParams;
use crate::render::{dismiss_overlay, loading_overlay, page_body, page_close, page_open};
use crate::render::page::DEFAULT_TITLE;

/// GET /
pub async fn dashboard(State(state): State<Arc<AppState>>, RawQuery(query): RawQuery) -> Response {
    let params = ReportParams::from_query(query.as_deref().unwrap_or_default());
    let options = params.render_options();
    let loader = state.loader();

    let mut head = page_open(DEFAULT_TITLE, &options);
    head.push_str(&loading_overlay().into_string());

    let settled = async move {
        let state = loader.load(&params).await;

        let mut rest = dismiss_overlay().into_string();
        rest.push_str(&page_body(&state, &options).into_string());
        rest.push_str(page_close());
        Ok::<_, Infallible>(Bytes::from(rest))
    };

    let body = stream::once(async move { Ok::<_, Infallible>(Bytes::from(head)) })
        .chain(stream::once(settled));

    (
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        Body::from_stream(body),
    )
        .into_response()
}
