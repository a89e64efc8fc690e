use std::sync::Arc;

use async_trait::async_trait;
use auth::TokenCodec;

use crate::client::models::Client;
use crate::client::models::ClientId;
use crate::client::models::ClientSnapshot;
use crate::session::errors::SessionError;
use crate::session::models::TokenPair;
use crate::session::models::TokenRecord;
use crate::session::ports::SessionServicePort;
use crate::session::ports::TokenRepository;

/// Domain service implementation for the session token lifecycle.
///
/// Issuance goes through both codecs and the token store; resolution
/// goes through the access codec only and never consults the store.
/// The codecs are read-only after construction, so the service shares
/// freely across request tasks.
pub struct SessionService<TR>
where
    TR: TokenRepository,
{
    token_repository: Arc<TR>,
    access_codec: TokenCodec,
    refresh_codec: TokenCodec,
}

impl<TR> SessionService<TR>
where
    TR: TokenRepository,
{
    /// Create a session service from the two class-specific codecs.
    ///
    /// The access and refresh codecs must be constructed with their
    /// own secrets and lifetimes; the service never mixes them.
    pub fn new(
        access_codec: TokenCodec,
        refresh_codec: TokenCodec,
        token_repository: Arc<TR>,
    ) -> Self {
        Self {
            token_repository,
            access_codec,
            refresh_codec,
        }
    }
}

#[async_trait]
impl<TR> SessionServicePort for SessionService<TR>
where
    TR: TokenRepository,
{
    fn issue_pair(&self, client: &Client) -> Result<TokenPair, SessionError> {
        let snapshot = ClientSnapshot::from(client);

        let access_token = self.access_codec.issue(&snapshot).map_err(|e| {
            tracing::error!(client_id = %client.id, error = %e, "Failed to issue access token");
            SessionError::SigningFailed(e.to_string())
        })?;

        let refresh_token = self.refresh_codec.issue(&snapshot).map_err(|e| {
            tracing::error!(client_id = %client.id, error = %e, "Failed to issue refresh token");
            SessionError::SigningFailed(e.to_string())
        })?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    async fn persist_pair(
        &self,
        client_id: &ClientId,
        pair: &TokenPair,
    ) -> Result<(), SessionError> {
        let record = TokenRecord::new(*client_id, pair);
        self.token_repository.upsert(record).await
    }

    async fn start_session(&self, client: &Client) -> Result<TokenPair, SessionError> {
        let pair = self.issue_pair(client)?;

        if let Err(e) = self.persist_pair(&client.id, &pair).await {
            // The issued tokens stay valid either way; the record is a
            // latest-session artifact, not the source of truth
            tracing::error!(client_id = %client.id, error = %e, "Failed to persist token record");
            return Err(e);
        }

        Ok(pair)
    }

    fn resolve_access_token(&self, token: &str) -> Result<ClientSnapshot, SessionError> {
        match self.access_codec.parse::<ClientSnapshot>(token) {
            Ok(claims) => Ok(claims.client),
            Err(e) => {
                // One uniform error regardless of malformed vs expired
                // vs forged
                tracing::warn!(error = %e, "Access token rejected");
                Err(SessionError::Unauthenticated)
            }
        }
    }

    async fn end_session(&self, client_id: &ClientId) -> Result<(), SessionError> {
        self.token_repository.delete(client_id).await
    }
}
