use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedClient;
use crate::inbound::http::router::AppState;

pub async fn logout(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedClient>,
) -> Result<ApiSuccess<()>, ApiError> {
    state
        .session_service
        .end_session(&authenticated.client.id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, ()))
}
