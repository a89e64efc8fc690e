use async_trait::async_trait;

use crate::client::models::Client;
use crate::client::models::ClientId;
use crate::client::models::ClientSnapshot;
use crate::session::errors::SessionError;
use crate::session::models::TokenPair;
use crate::session::models::TokenRecord;

/// Port for session lifecycle operations.
#[async_trait]
pub trait SessionServicePort: Send + Sync + 'static {
    /// Issue an access/refresh token pair for a client.
    ///
    /// Both tokens embed the same identity snapshot with independent
    /// expiries and are signed with class-specific secrets. Nothing
    /// is persisted; either signing failure aborts the pair.
    ///
    /// # Errors
    /// * `SigningFailed` - Either token could not be signed
    fn issue_pair(&self, client: &Client) -> Result<TokenPair, SessionError>;

    /// Upsert the persisted token record for a client.
    ///
    /// A failure here does not invalidate the already-issued tokens;
    /// they remain valid until their own expiry.
    ///
    /// # Errors
    /// * `StoreFailed` - Storage operation failed
    async fn persist_pair(
        &self,
        client_id: &ClientId,
        pair: &TokenPair,
    ) -> Result<(), SessionError>;

    /// Issue a token pair and persist the record in one step.
    ///
    /// # Errors
    /// * `SigningFailed` - Either token could not be signed
    /// * `StoreFailed` - Record upsert failed after issuance
    async fn start_session(&self, client: &Client) -> Result<TokenPair, SessionError>;

    /// Resolve an access token to the identity snapshot it embeds.
    ///
    /// Stateless relative to the token store; validity is decided by
    /// signature and expiry alone. Every parse failure collapses to
    /// `Unauthenticated`.
    ///
    /// # Errors
    /// * `Unauthenticated` - Malformed, expired, or mis-signed token
    fn resolve_access_token(&self, token: &str) -> Result<ClientSnapshot, SessionError>;

    /// Delete the persisted token record for a client.
    ///
    /// Idempotent: deleting an absent record succeeds.
    ///
    /// # Errors
    /// * `StoreFailed` - Storage operation failed
    async fn end_session(&self, client_id: &ClientId) -> Result<(), SessionError>;
}

/// Persistence operations for the latest-session token record.
#[async_trait]
pub trait TokenRepository: Send + Sync + 'static {
    /// Replace-or-insert the record keyed by its client id.
    ///
    /// # Errors
    /// * `StoreFailed` - Storage operation failed
    async fn upsert(&self, record: TokenRecord) -> Result<(), SessionError>;

    /// Remove the record for a client; absent records are a no-op.
    ///
    /// # Errors
    /// * `StoreFailed` - Storage operation failed
    async fn delete(&self, client_id: &ClientId) -> Result<(), SessionError>;

    /// Fetch the latest-session record for a client, if any.
    ///
    /// # Errors
    /// * `StoreFailed` - Storage operation failed
    async fn find_by_client_id(
        &self,
        client_id: &ClientId,
    ) -> Result<Option<TokenRecord>, SessionError>;
}
