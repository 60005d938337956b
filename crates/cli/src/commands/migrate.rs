//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! voltura-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `VOLTURA_DATABASE_URL` - `PostgreSQL` connection string

use sqlx::PgPool;
use thiserror::Error;

/// Errors from the migrate command.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run the storage gateway database migrations.
///
/// # Errors
///
/// Returns an error if `VOLTURA_DATABASE_URL` is unset or the
/// migrations fail.
pub async fn run() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("VOLTURA_DATABASE_URL")
        .map_err(|_| MigrationError::MissingEnvVar("VOLTURA_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&database_url).await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../server/migrations").run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
