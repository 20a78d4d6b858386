//! Axum router wiring.
//!
//! Middleware order, outermost first: request metrics, path logging, CORS.
//! CORS answers preflight `OPTIONS` requests before they reach a route.

use axum::{
    http::Method,
    middleware,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{app_state::AppState, handlers, middleware as mw, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/notes", get(handlers::notes::list).post(handlers::notes::create))
        .route(
            "/notes/:id",
            get(handlers::notes::retrieve)
                .put(handlers::notes::update)
                .delete(handlers::notes::delete),
        )
        .route("/analytics/summary", get(handlers::analytics::summary))
        .route("/analytics/notes/count", get(handlers::analytics::notes_count))
        .route(
            "/analytics/notes/avg-length",
            get(handlers::analytics::avg_note_length),
        )
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .fallback(ops::not_found)
        .layer(cors())
        .layer(middleware::from_fn(mw::log_path))
        .layer(middleware::from_fn_with_state(state.clone(), mw::track_requests))
        .with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
}
