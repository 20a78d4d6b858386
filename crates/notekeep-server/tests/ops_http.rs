//! Health and Prometheus endpoints.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use common::{app, create_note, get};

async fn text(router: &axum::Router, uri: &str) -> (StatusCode, String) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn healthz_is_ok() {
    let (router, _) = app().await;
    assert_eq!(text(&router, "/healthz").await, (StatusCode::OK, "ok".to_string()));
}

#[tokio::test]
async fn metrics_expose_totals_and_routes() {
    let (router, state) = app().await;
    create_note(&router, "t", "c").await;
    get(&router, "/notes/1").await;
    get(&router, "/notes/2").await;

    let (status, body) = text(&router, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("notekeep_http_requests_total 3"), "{body}");
    assert!(body.contains("notekeep_uptime_seconds"));
    assert!(body.contains(
        r#"notekeep_http_route_requests_total{method="GET",route="/notes/:id",status="404"} 1"#
    ));
    assert_eq!(state.routes().get("POST", "/notes", 200), 1);
    assert_eq!(state.routes().get("GET", "/notes/:id", 200), 1);
}

#[tokio::test]
async fn unmatched_requests_are_counted() {
    let (router, state) = app().await;
    let (status, body) = get(&router, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "not found");
    assert_eq!(state.collector().snapshot().total_requests, 1);
}
