use thiserror::Error;

/// Error type for password hashing operations.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}

/// Error type for secret-strength policy violations.
///
/// These are user-correctable validation failures, distinct from the
/// hashing errors above.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StrengthError {
    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Password must contain at least one digit")]
    MissingDigit,

    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("Password must contain at least one punctuation or symbol character")]
    MissingPunctuation,

    #[error("Password contains a disallowed character")]
    DisallowedCharacter,
}
