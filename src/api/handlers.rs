//! API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use bytes::Bytes;
use serde_json::Value;

use crate::api::{ApiError, AppState};
use crate::types::{parse_course_id, Course};
use crate::validation::ValidationRender;
use crate::{Error, Result};

/// Liveness greeting
pub async fn hello() -> &'static str {
    "Hello World"
}

/// List all courses
pub async fn list_courses(State(state): State<AppState>) -> Json<Vec<Course>> {
    Json(state.registry.list().await)
}

/// Fetch one course by id
pub async fn get_course(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> std::result::Result<Json<Course>, ApiError> {
    let render = ValidationRender::Message;
    let id = parse_course_id(&raw_id).ok_or_else(|| ApiError::new(Error::NotFound, render))?;

    let course = state
        .registry
        .get(id)
        .await
        .map_err(|e| ApiError::new(e, render))?;

    Ok(Json(course))
}

/// Create a course; validation failures are returned as the full report
pub async fn create_course(
    State(state): State<AppState>,
    body: Bytes,
) -> std::result::Result<Json<Course>, ApiError> {
    let render = ValidationRender::Structured;
    let payload = parse_payload(&body).map_err(|e| ApiError::new(e, render))?;

    let course = state
        .registry
        .create(&payload)
        .await
        .map_err(|e| ApiError::new(e, render))?;

    Ok(Json(course))
}

/// Rename a course; validation failures are returned as the first message only
pub async fn update_course(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> std::result::Result<Json<Course>, ApiError> {
    let render = ValidationRender::Message;
    let id = parse_course_id(&raw_id).ok_or_else(|| ApiError::new(Error::NotFound, render))?;
    let payload = parse_payload(&body).map_err(|e| ApiError::new(e, render))?;

    let course = state
        .registry
        .update(id, &payload)
        .await
        .map_err(|e| ApiError::new(e, render))?;

    Ok(Json(course))
}

/// Decode a request body. An empty body reads as an empty object.
fn parse_payload(body: &[u8]) -> Result<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }

    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected malformed request body");
        Error::invalid_request(format!("malformed JSON body: {e}"))
    })
}
