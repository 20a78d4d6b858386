//! JSON response helpers shared by all handlers.
//!
//! Success bodies are whatever the handler serializes, status 200. Failures
//! use the `{"status": false, "message": ...}` envelope.

use axum::{
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use notekeep_core::error::{ClientCode, NotekeepError};

pub const TOTAL_COUNT_HEADER: HeaderName = HeaderName::from_static("x-total-count");

/// Handler-facing error. Wraps the shared error so it can render as HTTP.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub NotekeepError);

pub type ApiResult<T> = std::result::Result<T, ApiError>;

pub fn status_for(code: ClientCode) -> StatusCode {
    match code {
        ClientCode::BadRequest | ClientCode::BadQuery => StatusCode::BAD_REQUEST,
        ClientCode::NotFound => StatusCode::NOT_FOUND,
        ClientCode::StoreUnavailable | ClientCode::UnsupportedVersion | ClientCode::Internal => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = status_for(code);
        if code.is_client_fault() {
            tracing::warn!(code = code.as_str(), error = %self.0, "request failed");
        } else {
            tracing::error!(code = code.as_str(), error = %self.0, "request failed");
        }
        (status, Json(message(false, &self.0.to_string()))).into_response()
    }
}

/// `{"status": .., "message": ..}` body.
pub fn message(status: bool, msg: &str) -> Value {
    json!({ "status": status, "message": msg })
}

/// 200 with a JSON body.
pub fn respond<T: Serialize>(body: T) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

/// Attach `X-Total-Count` and expose it to browsers.
pub fn with_total_count(mut resp: Response, total: usize) -> Response {
    let headers = resp.headers_mut();
    headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from(total));
    headers.insert(
        header::ACCESS_CONTROL_EXPOSE_HEADERS,
        HeaderValue::from_static("X-Total-Count"),
    );
    resp
}
