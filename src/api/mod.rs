mod courses;
mod health;
mod scores;
mod students;

pub use courses::create_course;
pub use health::health_check;
pub use scores::{create_score, get_scores, update_score};
pub use students::create_student;

use crate::error::ApiError;
use crate::store::StoreGateway;
use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// Shared router state: the gateway plus process start time for uptime.
pub type AppState = (Arc<StoreGateway>, Instant);

/// Success envelope: every 200 wraps its payload as `{"message": ...}`.
#[derive(Serialize)]
pub struct Envelope<T> {
    message: T,
}

impl<T> Envelope<T> {
    pub fn new(message: T) -> Self {
        Self { message }
    }
}

/// Unwrap a JSON body extraction, mapping a decode failure to a 400 that
/// carries the decode error text.
pub(crate) fn decode_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(ApiError::InvalidRequest {
            message: rejection.body_text(),
        }),
    }
}

/// Parse a path segment as a record id. Non-integer segments are rejected
/// outright rather than coerced to a default.
pub(crate) fn parse_id(segment: &str) -> Result<i64, ApiError> {
    segment.parse().map_err(|e| ApiError::InvalidRequest {
        message: format!("invalid id '{}': {}", segment, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("0").unwrap(), 0);
    }

    #[test]
    fn parse_id_rejects_non_integers() {
        assert!(matches!(
            parse_id("abc"),
            Err(ApiError::InvalidRequest { .. })
        ));
        assert!(matches!(parse_id(""), Err(ApiError::InvalidRequest { .. })));
        assert!(matches!(
            parse_id("12.5"),
            Err(ApiError::InvalidRequest { .. })
        ));
    }

    #[test]
    fn envelope_wraps_payload_under_message() {
        let json = serde_json::to_value(Envelope::new(vec![1, 2, 3])).unwrap();
        assert_eq!(json["message"], serde_json::json!([1, 2, 3]));
    }
}
