use thiserror::Error;

/// Top-level error for session issuance and resolution.
///
/// Deliberately coarse: callers of token resolution learn only that
/// authentication failed, never whether the token was malformed,
/// expired, or forged.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("Cannot authenticate client")]
    Unauthenticated,

    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Token store failed: {0}")]
    StoreFailed(String),
}
