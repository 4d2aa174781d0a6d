use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Record not found")]
    NotFound,

    #[error("Database error: {cause}")]
    Database { cause: String },
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "record not found".to_string()),
            ApiError::Database { cause } => {
                // Full cause stays server-side; clients get a fixed message.
                error!("database error: {}", cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<tokio_postgres::Error> for ApiError {
    fn from(err: tokio_postgres::Error) -> Self {
        ApiError::Database {
            cause: err.to_string(),
        }
    }
}

impl From<deadpool_postgres::PoolError> for ApiError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        ApiError::Database {
            cause: format!("pool error: {}", err),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
