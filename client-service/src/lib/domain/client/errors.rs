use thiserror::Error;

/// Error for ClientId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for BusinessType parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BusinessTypeError {
    #[error("Unknown business type: {0}")]
    Unknown(String),
}

/// Top-level error for all client-related operations
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid client ID: {0}")]
    InvalidClientId(#[from] ClientIdError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid business type: {0}")]
    InvalidBusinessType(#[from] BusinessTypeError),

    #[error("Weak password: {0}")]
    WeakPassword(#[from] auth::StrengthError),

    // Domain-level errors
    #[error("Client not found: {0}")]
    NotFound(String),

    #[error("Sorry, email is taken")]
    EmailAlreadyExists(String),

    #[error("Invalid login credentials")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for ClientError {
    fn from(err: anyhow::Error) -> Self {
        ClientError::Unknown(err.to_string())
    }
}
