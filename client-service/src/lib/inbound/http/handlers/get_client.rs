use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::ClientData;
use crate::client::models::ClientId;
use crate::inbound::http::router::AppState;

pub async fn get_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<ApiSuccess<ClientData>, ApiError> {
    let client_id =
        ClientId::from_string(&client_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .client_service
        .get_client(&client_id)
        .await
        .map_err(ApiError::from)
        .map(|ref client| ApiSuccess::new(StatusCode::OK, client.into()))
}
