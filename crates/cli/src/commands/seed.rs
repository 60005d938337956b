//! Seed the demo account.
//!
//! Creates (or refreshes) the built-in demo login and its pre-populated
//! household, so a fresh deployment can be explored immediately. Safe to
//! run repeatedly.
//!
//! # Usage
//!
//! ```bash
//! voltura-cli seed demo
//! ```

use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use chrono::{SecondsFormat, Utc};
use sqlx::{PgPool, Row};
use thiserror::Error;

use voltura_client::demo;
use voltura_core::UserId;

/// Errors from the seed command.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing failed")]
    PasswordHash,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Create or refresh the demo account and its setup document.
///
/// # Errors
///
/// Returns an error if `VOLTURA_DATABASE_URL` is unset or a database
/// operation fails.
pub async fn demo() -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("VOLTURA_DATABASE_URL")
        .map_err(|_| SeedError::MissingEnvVar("VOLTURA_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&database_url).await?;

    let profile = demo::demo_profile();
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(demo::DEMO_PASSWORD.as_bytes(), &salt)
        .map_err(|_| SeedError::PasswordHash)?
        .to_string();

    let row = sqlx::query(
        "INSERT INTO users (id, email, password_hash, name, company, phone)
         VALUES ($1, $2, $3, $4, $5, $6)
         ON CONFLICT (email) DO UPDATE
             SET password_hash = EXCLUDED.password_hash,
                 name = EXCLUDED.name,
                 company = EXCLUDED.company,
                 phone = EXCLUDED.phone,
                 updated_at = now()
         RETURNING id::text",
    )
    .bind(UserId::generate().as_uuid())
    .bind(demo::DEMO_EMAIL)
    .bind(&password_hash)
    .bind(&profile.name)
    .bind(&profile.company)
    .bind(&profile.phone)
    .fetch_one(&pool)
    .await?;
    let user_id: String = row.try_get("id")?;
    tracing::info!(email = demo::DEMO_EMAIL, %user_id, "Demo account ready");

    let mut document = serde_json::to_value(demo::demo_setup())?;
    document["updatedAt"] = serde_json::Value::String(
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    );

    sqlx::query(
        "INSERT INTO kv_store (key, value, updated_at) VALUES ($1, $2, now())
         ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = now()",
    )
    .bind(format!("user_setup_{user_id}"))
    .bind(document.to_string())
    .execute(&pool)
    .await?;

    tracing::info!("Demo household seeded");
    Ok(())
}
