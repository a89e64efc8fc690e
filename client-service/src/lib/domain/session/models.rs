use chrono::DateTime;
use chrono::Utc;

use crate::client::models::ClientId;

/// In-flight pair of signed session tokens returned to a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    /// Short-lived credential authorizing individual requests
    pub access_token: String,
    /// Long-lived credential for obtaining new access tokens
    pub refresh_token: String,
}

/// Persisted latest-session snapshot for a client.
///
/// At most one record exists per client; a new issuance replaces the
/// previous one and logout deletes it. The record is an audit
/// artifact, not a revocation mechanism: token validity is decided by
/// signature and expiry alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    pub client_id: ClientId,
    pub access_token: String,
    pub refresh_token: String,
    pub created_at: DateTime<Utc>,
}

impl TokenRecord {
    pub fn new(client_id: ClientId, pair: &TokenPair) -> Self {
        Self {
            client_id,
            access_token: pair.access_token.clone(),
            refresh_token: pair.refresh_token.clone(),
            created_at: Utc::now(),
        }
    }
}
