//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness
//! - `/metrics` : Prometheus text format
//! - fallback   : JSON 404

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use notekeep_core::error::NotekeepError;

use crate::app_state::AppState;
use crate::obs::metrics::render;
use crate::respond::ApiError;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = render(state.collector(), state.routes());

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}

/// Fallback for unknown paths, in the same envelope as other failures.
pub async fn not_found() -> ApiError {
    ApiError(NotekeepError::NotFound)
}
