use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::client::errors::ClientError;
use crate::client::models::Client;
use crate::session::errors::SessionError;

pub mod get_client;
pub mod login;
pub mod logout;
pub mod signup;
pub mod update_client;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ClientError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            ClientError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            ClientError::InvalidClientId(_)
            | ClientError::InvalidEmail(_)
            | ClientError::InvalidBusinessType(_)
            | ClientError::WeakPassword(_) => ApiError::UnprocessableEntity(err.to_string()),
            ClientError::Password(_) | ClientError::DatabaseError(_) | ClientError::Unknown(_) => {
                // Detail is logged, never surfaced to the caller
                tracing::error!(error = %err, "Internal error handling client operation");
                ApiError::InternalServerError("something went wrong".to_string())
            }
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Unauthenticated => ApiError::Unauthorized(err.to_string()),
            SessionError::SigningFailed(_) | SessionError::StoreFailed(_) => {
                tracing::error!(error = %err, "Internal error handling session operation");
                ApiError::InternalServerError("something went wrong".to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Client payload shared by the signup, login, and profile responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub business_type: String,
    pub api_key: String,
    pub account_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Client> for ClientData {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id.to_string(),
            name: client.name.clone(),
            email: client.email.as_str().to_string(),
            address: client.address.clone(),
            phone_number: client.phone_number.clone(),
            business_type: client.business_type.to_string(),
            api_key: client.api_key.clone(),
            account_active: client.account_active,
            created_at: client.created_at,
            updated_at: client.updated_at,
        }
    }
}
