use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::ClientData;
use crate::client::errors::BusinessTypeError;
use crate::client::errors::EmailError;
use crate::client::models::BusinessType;
use crate::client::models::ClientId;
use crate::client::models::UpdateClientCommand;
use crate::inbound::http::router::AppState;

pub async fn update_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
    Json(body): Json<UpdateClientRequestBody>,
) -> Result<ApiSuccess<ClientData>, ApiError> {
    let client_id =
        ClientId::from_string(&client_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let command = body.try_into_command()?;

    state
        .client_service
        .update_client(&client_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref client| ApiSuccess::new(StatusCode::OK, client.into()))
}

/// HTTP request body for editing a client profile (raw JSON).
///
/// All fields are optional; absent fields are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct UpdateClientRequestBody {
    name: Option<String>,
    email: Option<String>,
    address: Option<String>,
    phone_number: Option<String>,
    business_type: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseUpdateClientRequestError {
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid business type: {0}")]
    BusinessType(#[from] BusinessTypeError),
}

impl UpdateClientRequestBody {
    fn try_into_command(self) -> Result<UpdateClientCommand, ParseUpdateClientRequestError> {
        let email = self
            .email
            .map(crate::client::models::EmailAddress::new)
            .transpose()?;
        let business_type = self
            .business_type
            .as_deref()
            .map(BusinessType::parse)
            .transpose()?;

        Ok(UpdateClientCommand {
            name: self.name,
            email,
            address: self.address,
            phone_number: self.phone_number,
            business_type,
        })
    }
}

impl From<ParseUpdateClientRequestError> for ApiError {
    fn from(err: ParseUpdateClientRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_body_parses() {
        let body = UpdateClientRequestBody {
            name: Some("New Name".to_string()),
            ..Default::default()
        };

        let command = body.try_into_command().expect("Parse failed");
        assert_eq!(command.name.as_deref(), Some("New Name"));
        assert!(command.email.is_none());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let body = UpdateClientRequestBody {
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            body.try_into_command().unwrap_err(),
            ParseUpdateClientRequestError::Email(_)
        ));
    }
}
