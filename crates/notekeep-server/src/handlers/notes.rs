//! Notes CRUD.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Response,
    Json,
};

use notekeep_core::error::NotekeepError;
use notekeep_core::note::{parse_note_id, NoteInput};

use crate::app_state::AppState;
use crate::respond::{message, respond, with_total_count, ApiResult};

fn body(payload: std::result::Result<Json<NoteInput>, JsonRejection>) -> ApiResult<NoteInput> {
    let Json(input) = payload.map_err(|e| NotekeepError::BadRequest(e.body_text()))?;
    Ok(input.validate()?)
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Response> {
    let notes = state.notes().list().await?;
    let total = notes.len();
    Ok(with_total_count(respond(notes), total))
}

pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NoteInput>, JsonRejection>,
) -> ApiResult<Response> {
    let input = body(payload)?;
    let note = state.notes().create(input).await?;
    tracing::info!(id = note.id, "note created");
    Ok(respond(note))
}

pub async fn retrieve(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Response> {
    let id = parse_note_id(&id)?;
    let note = state.notes().get(id).await?;
    Ok(respond(note))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<NoteInput>, JsonRejection>,
) -> ApiResult<Response> {
    let id = parse_note_id(&id)?;
    let input = body(payload)?;
    let note = state.notes().update(id, input).await?;
    tracing::info!(id, "note updated");
    Ok(respond(note))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Response> {
    let id = parse_note_id(&id)?;
    state.notes().delete(id).await?;
    tracing::info!(id, "note deleted");
    Ok(respond(message(true, "note deleted")))
}
