use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::client::models::ClientId;
use crate::session::errors::SessionError;
use crate::session::models::TokenRecord;
use crate::session::ports::TokenRepository;

pub struct PostgresTokenRepository {
    pool: PgPool,
}

impl PostgresTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TokenRow {
    client_id: Uuid,
    access_token: String,
    refresh_token: String,
    created_at: DateTime<Utc>,
}

impl From<TokenRow> for TokenRecord {
    fn from(row: TokenRow) -> Self {
        TokenRecord {
            client_id: ClientId(row.client_id),
            access_token: row.access_token,
            refresh_token: row.refresh_token,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl TokenRepository for PostgresTokenRepository {
    async fn upsert(&self, record: TokenRecord) -> Result<(), SessionError> {
        // client_id is the primary key; the conflict arm makes a new
        // issuance replace the previous record atomically
        sqlx::query(
            r#"
            INSERT INTO tokens (client_id, access_token, refresh_token, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (client_id) DO UPDATE
            SET access_token = EXCLUDED.access_token,
                refresh_token = EXCLUDED.refresh_token,
                created_at = EXCLUDED.created_at
            "#,
        )
        .bind(record.client_id.0)
        .bind(&record.access_token)
        .bind(&record.refresh_token)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| SessionError::StoreFailed(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, client_id: &ClientId) -> Result<(), SessionError> {
        // Zero rows affected is fine; logout is idempotent
        sqlx::query("DELETE FROM tokens WHERE client_id = $1")
            .bind(client_id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| SessionError::StoreFailed(e.to_string()))?;

        Ok(())
    }

    async fn find_by_client_id(
        &self,
        client_id: &ClientId,
    ) -> Result<Option<TokenRecord>, SessionError> {
        let row: Option<TokenRow> = sqlx::query_as(
            r#"
            SELECT client_id, access_token, refresh_token, created_at
            FROM tokens
            WHERE client_id = $1
            "#,
        )
        .bind(client_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| SessionError::StoreFailed(e.to_string()))?;

        Ok(row.map(TokenRecord::from))
    }
}
