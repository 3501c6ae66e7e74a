use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use tracing::{error, instrument};

use crate::{
    auth::{jwt::AuthUser, validate::FieldError},
    error::ApiError,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CheckPhoneRequest {
    #[serde(default)]
    pub phone: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/check-phone", post(check_phone))
}

/// Pass-through to the verification API; the upstream body is returned
/// verbatim.
#[instrument(skip(state, payload))]
pub async fn check_phone(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<CheckPhoneRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let phone = payload.phone.trim();
    if phone.is_empty() {
        return Err(ApiError::Validation(vec![FieldError {
            field: "phone",
            message: "phone number is required".into(),
        }]));
    }

    match state.lookup.check(phone).await {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            error!(error = %e, user_id = %claims.sub, "phone lookup failed");
            Err(ApiError::Internal(e))
        }
    }
}
