//! Bearer token repository.
//!
//! Tokens are opaque random strings; the client holds them only in memory
//! and never refreshes them, so rows simply age out via `expires_at`.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use voltura_core::UserId;

use super::RepositoryError;

/// Repository for bearer token operations.
pub struct TokenRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TokenRepository<'a> {
    /// Create a new token repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Store a freshly issued token.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(
        &self,
        token: &str,
        user_id: UserId,
        expires_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO auth_tokens (token, user_id, expires_at) VALUES ($1, $2, $3)")
            .bind(token)
            .bind(user_id.as_uuid())
            .bind(expires_at)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Resolve a token to its owning user, if the token exists and has not
    /// expired.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn resolve(&self, token: &str) -> Result<Option<UserId>, RepositoryError> {
        let row = sqlx::query(
            "SELECT user_id FROM auth_tokens WHERE token = $1 AND expires_at > now()",
        )
        .bind(token)
        .fetch_optional(self.pool)
        .await?;

        match row {
            Some(row) => {
                let user_id: Uuid = row.try_get("user_id")?;
                Ok(Some(UserId::new(user_id)))
            }
            None => Ok(None),
        }
    }

    /// Delete expired tokens. Returns the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn prune_expired(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM auth_tokens WHERE expires_at <= now()")
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
