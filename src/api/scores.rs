//! Score endpoints
//!
//! - POST /api/scores - Record a score for a (student, course) pair
//! - GET /api/students/{id}/scores - List a student's scores with course names
//! - PUT /api/score/{id}/{scoreid} - Overwrite the score for a pair

use crate::api::{decode_body, parse_id, AppState, Envelope};
use crate::error::ApiError;
use crate::records::{NewScore, ScoreUpdate};
use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tracing::{debug, info};

/// Create a score row from a `{student, course, score}` body. The score is
/// an arbitrary string; referencing a missing student or course surfaces as
/// a store error.
pub async fn create_score(
    State((gateway, _)): State<AppState>,
    payload: Result<Json<NewScore>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let new = decode_body(payload)?;

    let score = gateway.insert_score(new).await?;
    info!(
        "created score {} for student {} course {}",
        score.id, score.student, score.course
    );

    Ok(Json(Envelope::new(score)))
}

/// List all `{course_name, score}` pairs for one student. A student with no
/// score rows gets an empty list, not a 404.
pub async fn get_scores(
    State((gateway, _)): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let student_id = parse_id(&id)?;

    let scores = gateway.scores_for_student(student_id).await?;
    debug!("student {}: returning {} scores", student_id, scores.len());

    Ok(Json(Envelope::new(scores)))
}

/// Overwrite the score for the (student, course) pair named in the path.
/// Missing pair is a 404; no row is created. Concurrent updates race and
/// the last commit wins.
pub async fn update_score(
    State((gateway, _)): State<AppState>,
    Path((id, scoreid)): Path<(String, String)>,
    payload: Result<Json<ScoreUpdate>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let student_id = parse_id(&id)?;
    let course_id = parse_id(&scoreid)?;
    let update = decode_body(payload)?;

    let updated = gateway
        .update_score(student_id, course_id, update.score)
        .await?
        .ok_or(ApiError::NotFound)?;

    info!(
        "updated score {} for student {} course {}",
        updated.id, student_id, course_id
    );

    Ok(Json(Envelope::new(updated)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreGateway;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::{get, put};
    use axum::Router;
    use std::sync::Arc;
    use std::time::Instant;
    use tower::ServiceExt;

    fn test_router() -> Router {
        Router::new()
            .route("/api/students/:id/scores", get(get_scores))
            .route("/api/score/:id/:scoreid", put(update_score))
            .with_state((Arc::new(StoreGateway::detached()), Instant::now()))
    }

    #[tokio::test]
    async fn non_integer_student_id_is_rejected() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/students/abc/scores")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_integer_pair_ids_are_rejected() {
        // The original coerced unparsable ids to zero; here they are a 400
        // before any store access.
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/score/abc/def")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"score": "B"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
