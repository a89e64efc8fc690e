use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::signup::SessionResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::client::models::EmailAddress;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<SessionResponseData>, ApiError> {
    if body.email.is_empty() || body.password.is_empty() {
        return Err(ApiError::UnprocessableEntity(
            "email and password are required".to_string(),
        ));
    }

    let email = EmailAddress::new(body.email)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let client = state.client_service.login(&email, &body.password).await?;

    let pair = state.session_service.start_session(&client).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        SessionResponseData {
            client: (&client).into(),
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        },
    ))
}

/// HTTP request body for logging a client in (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}
