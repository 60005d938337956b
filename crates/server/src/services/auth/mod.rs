//! Authentication service.
//!
//! Handles signup, signin, bearer-token issuance, and token verification.
//! Passwords are hashed with Argon2id; tokens are opaque random strings.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use sqlx::PgPool;

use voltura_core::{Email, UserId, UserProfile};

use crate::db::{RepositoryError, TokenRepository, UserRepository};
use crate::models::User;

/// Minimum password length. The demo password is exactly this long, so
/// raising it requires reseeding.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Raw entropy per token, before base64 encoding.
const TOKEN_BYTES: usize = 32;

/// An issued bearer credential.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The opaque token string handed to the client.
    pub token: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

/// Authentication service.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
    tokens: TokenRepository<'a>,
    token_ttl_hours: i64,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool, token_ttl_hours: i64) -> Self {
        Self {
            users: UserRepository::new(pool),
            tokens: TokenRepository::new(pool),
            token_ttl_hours,
        }
    }

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password is too short.
    /// Returns `AuthError::UserAlreadyExists` if the email is registered.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        profile: &UserProfile,
    ) -> Result<User, AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;

        // Check first for a friendly rejection; the unique constraint
        // still backstops a racing signup.
        if self.users.get_by_email(&email).await?.is_some() {
            return Err(AuthError::UserAlreadyExists);
        }

        let password_hash = hash_password(password)?;

        let user = self
            .users
            .create(&email, &password_hash, profile)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        Ok(user)
    }

    /// Authenticate with email and password, issuing a bearer token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email/password is wrong.
    pub async fn signin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(User, IssuedToken), AuthError> {
        let email = Email::parse(email)?;

        let (user, password_hash) = self
            .users
            .get_password_hash(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &password_hash)?;

        let issued = self.issue_token(user.id).await?;
        Ok((user, issued))
    }

    /// Resolve a bearer token to its user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` if the token is unknown or expired.
    pub async fn verify_token(&self, token: &str) -> Result<User, AuthError> {
        let user_id = self
            .tokens
            .resolve(token)
            .await?
            .ok_or(AuthError::Unauthorized)?;

        self.users
            .get_by_id(user_id)
            .await?
            .ok_or(AuthError::Unauthorized)
    }

    /// Overwrite a user's profile fields.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the database operation fails.
    pub async fn update_profile(
        &self,
        user_id: UserId,
        profile: &UserProfile,
    ) -> Result<(), AuthError> {
        self.users.update_profile(user_id, profile).await?;
        Ok(())
    }

    async fn issue_token(&self, user_id: UserId) -> Result<IssuedToken, AuthError> {
        let token = generate_token();
        let expires_at = Utc::now() + Duration::hours(self.token_ttl_hours);

        self.tokens.insert(&token, user_id, expires_at).await?;

        Ok(IssuedToken { token, expires_at })
    }
}

/// Generate an opaque URL-safe bearer token.
fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
