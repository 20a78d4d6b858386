//! Request middleware.
//!
//! Composition order is fixed in `router::build_router`: `track_requests`
//! wraps everything, `log_path` sits inside it.

use axum::{
    extract::{MatchedPath, Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

/// Time the inner service and account the request once it has produced a
/// response. The response passes through untouched.
pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    let resp = state.collector().time(next.run(req)).await;

    state
        .routes()
        .inc(method.as_str(), &route, resp.status().as_u16());
    resp
}

/// Log host, uri and method of every request.
pub async fn log_path(req: Request, next: Next) -> Response {
    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");
    tracing::info!(host = %host, uri = %req.uri(), method = %req.method(), "request");
    next.run(req).await
}
