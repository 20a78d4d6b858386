#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use notekeep_server::{app_state::AppState, config, router, store::SqliteNotes};

pub async fn app() -> (Router, AppState) {
    let cfg = config::load_from_str("version: 1\n").unwrap();
    let notes = SqliteNotes::connect(&cfg.database).await.unwrap();
    let state = AppState::new(cfg, notes);
    (router::build_router(state.clone()), state)
}

pub fn uninitialized_app() -> (Router, AppState) {
    let cfg = config::load_from_str("version: 1\n").unwrap();
    let state = AppState::new(cfg, SqliteNotes::uninitialized());
    (router::build_router(state.clone()), state)
}

pub async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, req).await
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

pub async fn create_note(router: &Router, title: &str, content: &str) -> Value {
    let req = json_request(
        "POST",
        "/notes",
        serde_json::json!({ "title": title, "content": content }),
    );
    let (status, body) = send(router, req).await;
    assert_eq!(status, StatusCode::OK, "create failed: {body}");
    body
}
