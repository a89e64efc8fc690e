use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::ClientData;
use crate::client::errors::BusinessTypeError;
use crate::client::errors::EmailError;
use crate::client::models::BusinessType;
use crate::client::models::EmailAddress;
use crate::client::models::SignupCommand;
use crate::inbound::http::router::AppState;

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequestBody>,
) -> Result<ApiSuccess<SessionResponseData>, ApiError> {
    let command = body.try_into_command()?;

    let client = state.client_service.signup(command).await?;

    // Signup logs the new client straight in; a store failure here is
    // surfaced, but the tokens themselves were already valid
    let pair = state.session_service.start_session(&client).await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        SessionResponseData {
            client: (&client).into(),
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        },
    ))
}

/// HTTP request body for registering a client (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupRequestBody {
    name: String,
    email: String,
    address: String,
    #[serde(default)]
    phone_number: String,
    password: String,
    confirm_password: String,
    business_type: String,
    api_key: String,
}

#[derive(Debug, Clone, Error)]
enum ParseSignupRequestError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid business type: {0}")]
    BusinessType(#[from] BusinessTypeError),

    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl SignupRequestBody {
    fn try_into_command(self) -> Result<SignupCommand, ParseSignupRequestError> {
        for (value, field) in [
            (&self.name, "name"),
            (&self.email, "email"),
            (&self.address, "address"),
            (&self.password, "password"),
            (&self.confirm_password, "confirmed password"),
            (&self.business_type, "business type"),
            (&self.api_key, "api key"),
        ] {
            if value.is_empty() {
                return Err(ParseSignupRequestError::MissingField(field));
            }
        }

        if self.password != self.confirm_password {
            return Err(ParseSignupRequestError::PasswordMismatch);
        }

        let email = EmailAddress::new(self.email)?;
        let business_type = BusinessType::parse(&self.business_type)?;

        Ok(SignupCommand {
            name: self.name,
            email,
            address: self.address,
            phone_number: self.phone_number,
            business_type,
            api_key: self.api_key,
            password: self.password,
        })
    }
}

impl From<ParseSignupRequestError> for ApiError {
    fn from(err: ParseSignupRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

/// Response body shared by signup and login: the client payload plus
/// both session tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionResponseData {
    pub client: ClientData,
    pub access_token: String,
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> SignupRequestBody {
        SignupRequestBody {
            name: "test client".to_string(),
            email: "a@b.com".to_string(),
            address: "1 Test Street".to_string(),
            phone_number: "0700000000".to_string(),
            password: "Abc123!".to_string(),
            confirm_password: "Abc123!".to_string(),
            business_type: "retail".to_string(),
            api_key: "api-key-1".to_string(),
        }
    }

    #[test]
    fn test_valid_body_parses() {
        let command = body().try_into_command().expect("Parse failed");
        assert_eq!(command.email.as_str(), "a@b.com");
        assert_eq!(command.business_type, BusinessType::Retail);
    }

    #[test]
    fn test_missing_field_rejected() {
        let mut request = body();
        request.api_key = String::new();
        assert!(matches!(
            request.try_into_command().unwrap_err(),
            ParseSignupRequestError::MissingField("api key")
        ));
    }

    #[test]
    fn test_password_mismatch_rejected() {
        let mut request = body();
        request.confirm_password = "Xyz987?".to_string();
        assert!(matches!(
            request.try_into_command().unwrap_err(),
            ParseSignupRequestError::PasswordMismatch
        ));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut request = body();
        request.email = "not-an-email".to_string();
        assert!(matches!(
            request.try_into_command().unwrap_err(),
            ParseSignupRequestError::Email(_)
        ));
    }
}
