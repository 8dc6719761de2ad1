use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sea_orm::{DbErr, SqlErr};
use serde_json::json;

/// Error returned by every handler; rendered as `{"error": "<message>"}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::warn!("Unique constraint violation: {}", detail);
                ApiError::Conflict("A record with the same unique value already exists.".into())
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                tracing::warn!("Foreign key constraint violation: {}", detail);
                ApiError::Conflict(
                    "The operation conflicts with records that reference this one.".into(),
                )
            }
            _ => {
                tracing::error!("Database error: {}", err);
                ApiError::Internal("Internal server error".into())
            }
        }
    }
}

/// Repositories return `anyhow::Result`; database failures inside are
/// classified by their SQL error kind.
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<DbErr>() {
            Ok(db_err) => ApiError::from(db_err),
            Err(other) => {
                tracing::error!("Unexpected error: {:#}", other);
                ApiError::Internal("Internal server error".into())
            }
        }
    }
}

/// Classify a failed insert or update of a row with parent references.
/// A foreign-key violation there means the parent is gone, which callers
/// report the same way as their own existence checks.
pub fn write_error(err: anyhow::Error) -> ApiError {
    match err.downcast_ref::<DbErr>().and_then(DbErr::sql_err) {
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            tracing::warn!("Write references a missing row: {}", detail);
            ApiError::NotFound("A referenced record does not exist.".into())
        }
        _ => ApiError::from(err),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
