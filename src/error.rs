use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::auth::validate::FieldError;

/// Everything a handler can fail with. Conversion to an HTTP response is
/// centralized here so no collaborator detail ever reaches the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid input")]
    Validation(Vec<FieldError>),
    #[error("user already exists")]
    Duplicate,
    #[error("user does not exist")]
    UnknownUser,
    #[error("incorrect password")]
    IncorrectPassword,
    #[error("no token provided, access denied")]
    MissingToken,
    #[error("invalid token")]
    InvalidToken,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("storage error")]
    Storage(#[source] sqlx::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.is_unique_violation() {
                return ApiError::Duplicate;
            }
        }
        ApiError::Storage(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "message": "please provide valid input",
                    "errors": errors,
                }),
            ),
            ApiError::Duplicate => (
                StatusCode::BAD_REQUEST,
                json!({ "message": "user already exists" }),
            ),
            ApiError::UnknownUser => (
                StatusCode::BAD_REQUEST,
                json!({ "message": "user does not exist" }),
            ),
            ApiError::IncorrectPassword => (
                StatusCode::BAD_REQUEST,
                json!({ "message": "incorrect password" }),
            ),
            ApiError::MissingToken => (
                StatusCode::UNAUTHORIZED,
                json!({ "message": "no token provided, access denied" }),
            ),
            ApiError::InvalidToken => (
                StatusCode::BAD_REQUEST,
                json!({ "message": "invalid token" }),
            ),
            ApiError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                json!({ "message": format!("{what} not found") }),
            ),
            ApiError::Storage(e) => {
                error!(error = %e, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "something went wrong" }),
                )
            }
            ApiError::Internal(e) => {
                error!(error = %e, "internal failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "something went wrong" }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
