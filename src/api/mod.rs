//! HTTP API server

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::registry::CourseRegistry;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::hello))
        .route(
            "/api/courses",
            get(handlers::list_courses).post(handlers::create_course),
        )
        .route(
            "/api/courses/:id",
            get(handlers::get_course).put(handlers::update_course),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience helper for a router over a freshly seeded registry
pub fn create_seeded_router() -> Router {
    create_router(AppState::new(Arc::new(CourseRegistry::seeded())))
}
