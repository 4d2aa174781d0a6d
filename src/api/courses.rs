//! Course endpoints
//!
//! - POST /api/courses - Create a new course

use crate::api::{decode_body, AppState, Envelope};
use crate::error::ApiError;
use crate::records::NewCourse;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, response::IntoResponse, Json};
use tracing::info;

/// Create a course from a `{course_name}` body.
pub async fn create_course(
    State((gateway, _)): State<AppState>,
    payload: Result<Json<NewCourse>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let new = decode_body(payload)?;

    let course = gateway.insert_course(new).await?;
    info!("created course {}", course.id);

    Ok(Json(Envelope::new(course)))
}
