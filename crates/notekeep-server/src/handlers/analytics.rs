//! Analytics endpoints.
//!
//! The note-count and average-length endpoints return bare value maps; the
//! summary returns the full snapshot. None of them carry a `status` marker
//! on success.

use axum::{extract::State, response::Response};
use serde_json::json;

use crate::app_state::AppState;
use crate::respond::{respond, ApiResult};

pub async fn summary(State(state): State<AppState>) -> ApiResult<Response> {
    let snapshot = state.reporter().summary().await?;
    Ok(respond(snapshot))
}

pub async fn notes_count(State(state): State<AppState>) -> ApiResult<Response> {
    let total_notes = state.reporter().note_count().await?;
    Ok(respond(json!({ "total_notes": total_notes })))
}

pub async fn avg_note_length(State(state): State<AppState>) -> ApiResult<Response> {
    let avg = state.reporter().average_note_length().await?;
    Ok(respond(json!({ "avg_note_length": avg })))
}
