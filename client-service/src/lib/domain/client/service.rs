use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::client::errors::ClientError;
use crate::client::models::Client;
use crate::client::models::ClientId;
use crate::client::models::EmailAddress;
use crate::client::models::SignupCommand;
use crate::client::models::UpdateClientCommand;
use crate::client::ports::ClientRepository;
use crate::client::ports::ClientServicePort;

/// Domain service implementation for client identity operations.
///
/// Owns the credential hasher; the plaintext secret never crosses the
/// repository boundary.
pub struct ClientService<CR>
where
    CR: ClientRepository,
{
    repository: Arc<CR>,
    password_hasher: auth::PasswordHasher,
}

impl<CR> ClientService<CR>
where
    CR: ClientRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<CR> ClientServicePort for ClientService<CR>
where
    CR: ClientRepository,
{
    async fn signup(&self, command: SignupCommand) -> Result<Client, ClientError> {
        auth::validate_strength(&command.password)?;

        if let Some(existing) = self.repository.find_by_email(&command.email).await? {
            tracing::info!(email = %existing.email, "Signup rejected, email already registered");
            return Err(ClientError::EmailAlreadyExists(
                command.email.as_str().to_string(),
            ));
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let client = Client::new(
            command.name,
            command.email,
            command.address,
            command.phone_number,
            command.business_type,
            command.api_key,
            password_hash,
        );

        self.repository.create(client).await
    }

    async fn login(&self, email: &EmailAddress, password: &str) -> Result<Client, ClientError> {
        let client = match self.repository.find_by_email(email).await? {
            Some(client) => client,
            None => {
                // Indistinguishable from a wrong password by design of
                // the error taxonomy
                tracing::info!("Login rejected, unknown email");
                return Err(ClientError::InvalidCredentials);
            }
        };

        if !self
            .password_hasher
            .verify(password, &client.password_hash)?
        {
            tracing::info!(client_id = %client.id, "Login rejected, secret mismatch");
            return Err(ClientError::InvalidCredentials);
        }

        Ok(client)
    }

    async fn get_client(&self, id: &ClientId) -> Result<Client, ClientError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ClientError::NotFound(id.to_string()))
    }

    async fn update_client(
        &self,
        id: &ClientId,
        command: UpdateClientCommand,
    ) -> Result<Client, ClientError> {
        let mut client = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ClientError::NotFound(id.to_string()))?;

        if let Some(new_email) = command.email {
            if new_email != client.email {
                if let Some(holder) = self.repository.find_by_email(&new_email).await? {
                    if holder.id != *id {
                        return Err(ClientError::EmailAlreadyExists(
                            new_email.as_str().to_string(),
                        ));
                    }
                }
            }
            client.email = new_email;
        }

        if let Some(new_name) = command.name {
            client.name = new_name;
        }

        if let Some(new_address) = command.address {
            client.address = new_address;
        }

        if let Some(new_phone_number) = command.phone_number {
            client.phone_number = new_phone_number;
        }

        if let Some(new_business_type) = command.business_type {
            client.business_type = new_business_type;
        }

        client.updated_at = Utc::now();

        self.repository.update(client).await
    }
}
