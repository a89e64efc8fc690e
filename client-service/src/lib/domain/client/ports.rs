use async_trait::async_trait;

use crate::client::errors::ClientError;
use crate::client::models::Client;
use crate::client::models::ClientId;
use crate::client::models::EmailAddress;
use crate::client::models::SignupCommand;
use crate::client::models::UpdateClientCommand;

/// Port for client domain service operations.
#[async_trait]
pub trait ClientServicePort: Send + Sync + 'static {
    /// Register a new client with validated credentials.
    ///
    /// Checks secret strength, hashes the secret, and rejects emails
    /// that are already registered.
    ///
    /// # Errors
    /// * `WeakPassword` - Secret fails the strength policy
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Storage operation failed
    async fn signup(&self, command: SignupCommand) -> Result<Client, ClientError>;

    /// Authenticate a client by email and plaintext secret.
    ///
    /// Unknown email and wrong secret are indistinguishable to the
    /// caller; both yield `InvalidCredentials`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No such client or secret mismatch
    /// * `DatabaseError` - Storage operation failed
    async fn login(&self, email: &EmailAddress, password: &str) -> Result<Client, ClientError>;

    /// Retrieve a client by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Client does not exist
    /// * `DatabaseError` - Storage operation failed
    async fn get_client(&self, id: &ClientId) -> Result<Client, ClientError>;

    /// Update an existing client's profile fields.
    ///
    /// # Errors
    /// * `NotFound` - Client does not exist
    /// * `EmailAlreadyExists` - New email belongs to another client
    /// * `DatabaseError` - Storage operation failed
    async fn update_client(
        &self,
        id: &ClientId,
        command: UpdateClientCommand,
    ) -> Result<Client, ClientError>;
}

/// Persistence operations for the client aggregate.
#[async_trait]
pub trait ClientRepository: Send + Sync + 'static {
    /// Persist a new client to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Storage operation failed
    async fn create(&self, client: Client) -> Result<Client, ClientError>;

    /// Retrieve a client by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, ClientError>;

    /// Retrieve a client by email address.
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Client>, ClientError>;

    /// Update an existing client in storage.
    ///
    /// # Errors
    /// * `NotFound` - Client does not exist
    /// * `EmailAlreadyExists` - New email belongs to another client
    /// * `DatabaseError` - Storage operation failed
    async fn update(&self, client: Client) -> Result<Client, ClientError>;
}
