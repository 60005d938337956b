//! User repository for database operations.
//!
//! Queries use runtime binding rather than the sqlx compile-time macros so
//! the crate builds without a live database or offline query cache.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use voltura_core::{Email, UserId, UserProfile};

use super::RepositoryError;
use crate::models::User;

const USER_COLUMNS: &str = "id, email, name, company, phone, created_at, updated_at";

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a user by their email address (exact, case-sensitive match).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(row_to_user).transpose()
    }

    /// Get a user by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id.as_uuid())
            .fetch_optional(self.pool)
            .await?;

        row.map(row_to_user).transpose()
    }

    /// Fetch the password hash for an email, along with the user.
    ///
    /// Returns `None` when no account exists for the email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        let row = sqlx::query(&format!(
            "SELECT {USER_COLUMNS}, password_hash FROM users WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        match row {
            Some(row) => {
                let hash: String = row.try_get("password_hash")?;
                let user = row_to_user(row)?;
                Ok(Some((user, hash)))
            }
            None => Ok(None),
        }
    }

    /// Create a new user with email, password hash, and profile fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        email: &Email,
        password_hash: &str,
        profile: &UserProfile,
    ) -> Result<User, RepositoryError> {
        let id = UserId::generate();

        let row = sqlx::query(&format!(
            "INSERT INTO users (id, email, password_hash, name, company, phone)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id.as_uuid())
        .bind(email.as_str())
        .bind(password_hash)
        .bind(&profile.name)
        .bind(&profile.company)
        .bind(&profile.phone)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        row_to_user(row)
    }

    /// Overwrite the profile fields of an existing user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update_profile(
        &self,
        id: UserId,
        profile: &UserProfile,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            "UPDATE users SET name = $2, company = $3, phone = $4, updated_at = now()
             WHERE id = $1",
        )
        .bind(id.as_uuid())
        .bind(&profile.name)
        .bind(&profile.company)
        .bind(&profile.phone)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}

fn row_to_user(row: PgRow) -> Result<User, RepositoryError> {
    let id: Uuid = row.try_get("id")?;
    let email: String = row.try_get("email")?;
    let email = Email::parse(&email).map_err(|e| {
        RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
    })?;
    let name: String = row.try_get("name")?;
    let company: String = row.try_get("company")?;
    let phone: String = row.try_get("phone")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at")?;

    let profile = UserProfile {
        name,
        email: email.as_str().to_owned(),
        company,
        phone,
    };

    Ok(User {
        id: UserId::new(id),
        email,
        profile,
        created_at,
        updated_at,
    })
}
