use anyhow::Context;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use courses_http::AppError;
use serde::Serialize;

use super::{id, models::Course, store::CourseStore};

/// Encode `value` as the JSON response body.
fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Result<Response, AppError> {
    let body = serde_json::to_vec(value).context("failed to encode response body")?;
    Ok((status, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}

fn course_not_found() -> AppError {
    AppError::not_found("Course not found", "Course with given id not found")
}

fn require_id(id: &str) -> Result<(), AppError> {
    if id.trim().is_empty() {
        return Err(AppError::empty_id("Empty id", "Course id is required"));
    }
    Ok(())
}

/// Decode a request body into a course, rejecting blank bodies and nameless
/// courses.
fn decode_course(body: &[u8]) -> Result<Course, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::empty_body("Empty body", "Please send course data"));
    }

    let course: Course =
        serde_json::from_slice(body).context("failed to decode course payload")?;

    if course.is_empty() {
        return Err(AppError::empty_body(
            "Mandatory fields missing",
            "Course name must not be empty",
        ));
    }

    Ok(course)
}

/// `GET /courses`
pub async fn list_courses(State(store): State<CourseStore>) -> Result<Response, AppError> {
    let courses = store.list().await;
    json_response(StatusCode::OK, &courses)
}

/// `GET /courses/{id}`
pub async fn get_course(
    State(store): State<CourseStore>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let course = store.find_by_id(&id).await.ok_or_else(course_not_found)?;
    json_response(StatusCode::OK, &course)
}

/// `POST /courses`
pub async fn create_course(
    State(store): State<CourseStore>,
    body: Bytes,
) -> Result<Response, AppError> {
    let mut course = decode_course(&body)?;

    // Client-supplied ids are ignored
    course.id = id::course_id();
    store.insert(course.clone()).await;

    tracing::info!(id = %course.id, name = %course.name, "course created");
    json_response(StatusCode::CREATED, &course)
}

/// `POST /courses/{id}`: replaces the whole record, keeping its id.
pub async fn update_course(
    State(store): State<CourseStore>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response, AppError> {
    require_id(&id)?;

    if store.find_by_id(&id).await.is_none() {
        return Err(course_not_found());
    }

    let course = decode_course(&body)?;
    let updated = store
        .replace(&id, course)
        .await
        .ok_or_else(course_not_found)?;

    tracing::info!(id = %updated.id, "course updated");
    json_response(StatusCode::OK, &updated)
}

/// `DELETE /courses/{id}`: responds with the removed record.
pub async fn delete_course(
    State(store): State<CourseStore>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    require_id(&id)?;

    let removed = store.remove(&id).await.ok_or_else(course_not_found)?;

    tracing::info!(id = %removed.id, "course deleted");
    json_response(StatusCode::OK, &removed)
}
