use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::client::errors::ClientError;
use crate::client::models::BusinessType;
use crate::client::models::Client;
use crate::client::models::ClientId;
use crate::client::models::EmailAddress;
use crate::client::ports::ClientRepository;

pub struct PostgresClientRepository {
    pool: PgPool,
}

impl PostgresClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ClientRow {
    id: Uuid,
    name: String,
    email: String,
    address: String,
    phone_number: String,
    business_type: String,
    api_key: String,
    account_active: bool,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ClientRow> for Client {
    type Error = ClientError;

    fn try_from(row: ClientRow) -> Result<Self, Self::Error> {
        Ok(Client {
            id: ClientId(row.id),
            name: row.name,
            email: EmailAddress::new(row.email)?,
            address: row.address,
            phone_number: row.phone_number,
            business_type: BusinessType::parse(&row.business_type)?,
            api_key: row.api_key,
            account_active: row.account_active,
            password_hash: row.password_hash,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const SELECT_CLIENT: &str = r#"
    SELECT id, name, email, address, phone_number, business_type,
           api_key, account_active, password_hash, created_at, updated_at
    FROM clients
"#;

#[async_trait]
impl ClientRepository for PostgresClientRepository {
    async fn create(&self, client: Client) -> Result<Client, ClientError> {
        sqlx::query(
            r#"
            INSERT INTO clients (id, name, email, address, phone_number, business_type,
                                 api_key, account_active, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(client.id.0)
        .bind(&client.name)
        .bind(client.email.as_str())
        .bind(&client.address)
        .bind(&client.phone_number)
        .bind(client.business_type.as_str())
        .bind(&client.api_key)
        .bind(client.account_active)
        .bind(&client.password_hash)
        .bind(client.created_at)
        .bind(client.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return ClientError::EmailAlreadyExists(client.email.as_str().to_string());
                }
            }
            ClientError::DatabaseError(e.to_string())
        })?;

        Ok(client)
    }

    async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, ClientError> {
        let row: Option<ClientRow> =
            sqlx::query_as(&format!("{} WHERE id = $1", SELECT_CLIENT))
                .bind(id.0)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| ClientError::DatabaseError(e.to_string()))?;

        row.map(Client::try_from).transpose()
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Client>, ClientError> {
        let row: Option<ClientRow> =
            sqlx::query_as(&format!("{} WHERE email = $1", SELECT_CLIENT))
                .bind(email.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| ClientError::DatabaseError(e.to_string()))?;

        row.map(Client::try_from).transpose()
    }

    async fn update(&self, client: Client) -> Result<Client, ClientError> {
        let result = sqlx::query(
            r#"
            UPDATE clients
            SET name = $2, email = $3, address = $4, phone_number = $5,
                business_type = $6, updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(client.id.0)
        .bind(&client.name)
        .bind(client.email.as_str())
        .bind(&client.address)
        .bind(&client.phone_number)
        .bind(client.business_type.as_str())
        .bind(client.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return ClientError::EmailAlreadyExists(client.email.as_str().to_string());
                }
            }
            ClientError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(ClientError::NotFound(client.id.to_string()));
        }

        Ok(client)
    }
}
