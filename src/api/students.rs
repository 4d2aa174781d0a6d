//! Student endpoints
//!
//! - POST /api/students - Create a new student

use crate::api::{decode_body, AppState, Envelope};
use crate::error::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, response::IntoResponse, Json};
use tracing::info;

use crate::records::NewStudent;

/// Create a student from a `{name, mobile, email}` body. Fields are stored
/// as-is; mobile and email are not validated beyond being strings.
pub async fn create_student(
    State((gateway, _)): State<AppState>,
    payload: Result<Json<NewStudent>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let new = decode_body(payload)?;

    let student = gateway.insert_student(new).await?;
    info!("created student {}", student.id);

    Ok(Json(Envelope::new(student)))
}
