//! Storage gateway abstraction.
//!
//! The lifecycle controller talks to the backend exclusively through the
//! [`StorageGateway`] trait, so tests can substitute an in-memory fake
//! for the HTTP implementation.

mod http;

pub use http::HttpGateway;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use voltura_core::{SetupProfile, UserId, UserProfile};

/// Errors from a storage gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// An account with this email is already registered.
    #[error("email already registered")]
    UserExists,

    /// Email/password combination was rejected.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Bearer token is missing, unknown, or expired.
    #[error("unauthorized")]
    Unauthorized,

    /// The backend rejected the request for another reason.
    #[error("api error: {0}")]
    Api(String),

    /// The backend could not be reached.
    #[error("network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl GatewayError {
    /// True for connectivity failures, as opposed to rejections the
    /// backend actually issued.
    #[must_use]
    pub const fn is_connectivity(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

/// A bearer credential held only in memory. Dropped on logout; never
/// persisted across reloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer token attached to authenticated requests.
    pub access_token: String,
}

impl Session {
    /// Wrap a raw bearer token.
    #[must_use]
    pub const fn new(access_token: String) -> Self {
        Self { access_token }
    }
}

/// A registered account as the backend reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteAccount {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub phone: String,
}

impl RemoteAccount {
    /// Profile fields of this account.
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// Fields collected by the signup form.
#[derive(Debug, Clone, Serialize)]
pub struct SignupData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub company: String,
    pub phone: String,
}

/// Backend operations the lifecycle controller depends on.
///
/// All operations are request/response; none hold state between calls.
/// `put_setup_document` overwrites wholesale and `delete_setup_document`
/// is idempotent, mirroring the key-value layout on the server.
pub trait StorageGateway {
    /// Register a new account.
    fn create_account(
        &self,
        signup: &SignupData,
    ) -> impl Future<Output = Result<RemoteAccount, GatewayError>> + Send;

    /// Exchange credentials for an account and a bearer session.
    fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<(RemoteAccount, Session), GatewayError>> + Send;

    /// Fetch the account the session belongs to.
    fn fetch_account(
        &self,
        session: &Session,
    ) -> impl Future<Output = Result<RemoteAccount, GatewayError>> + Send;

    /// Fetch the saved setup document, or `None` if none was ever saved.
    fn get_setup_document(
        &self,
        session: &Session,
    ) -> impl Future<Output = Result<Option<SetupProfile>, GatewayError>> + Send;

    /// Overwrite the setup document.
    fn put_setup_document(
        &self,
        session: &Session,
        profile: &SetupProfile,
    ) -> impl Future<Output = Result<(), GatewayError>> + Send;

    /// Remove the setup document. Removing a missing document succeeds.
    fn delete_setup_document(
        &self,
        session: &Session,
    ) -> impl Future<Output = Result<(), GatewayError>> + Send;

    /// Overwrite the account's profile fields.
    fn update_profile(
        &self,
        session: &Session,
        profile: &UserProfile,
    ) -> impl Future<Output = Result<(), GatewayError>> + Send;
}
