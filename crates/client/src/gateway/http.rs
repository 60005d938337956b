//! HTTP implementation of the storage gateway.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use voltura_core::{SetupProfile, UserProfile};

use super::{GatewayError, RemoteAccount, Session, SignupData, StorageGateway};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Error code the backend attaches to duplicate signups.
const CODE_USER_EXISTS: &str = "USER_EXISTS";

/// Storage gateway over HTTP.
///
/// Cheap to clone; the reqwest client and base URL live behind one `Arc`.
#[derive(Clone)]
pub struct HttpGateway {
    inner: Arc<HttpGatewayInner>,
}

struct HttpGatewayInner {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    #[serde(rename = "errorCode")]
    error_code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserBody {
    user: RemoteAccount,
}

#[derive(Debug, Deserialize)]
struct SessionBody {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct SigninBody {
    user: RemoteAccount,
    session: SessionBody,
}

#[derive(Debug, Deserialize)]
struct SetupBody {
    #[serde(rename = "setupData")]
    setup_data: Option<SetupProfile>,
}

impl HttpGateway {
    /// Create a gateway for the backend at `base_url` (no trailing slash).
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(HttpGatewayInner {
                client,
                base_url: base_url.into(),
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Read the error body of a failed response, mapping the
    /// duplicate-signup code and 401s to their dedicated variants.
    async fn error_from(response: reqwest::Response) -> GatewayError {
        let status = response.status();
        let body: ErrorBody = response.json().await.unwrap_or_default();

        if body.error_code.as_deref() == Some(CODE_USER_EXISTS) {
            return GatewayError::UserExists;
        }
        if status == StatusCode::UNAUTHORIZED {
            return GatewayError::Unauthorized;
        }

        GatewayError::Api(
            body.error
                .unwrap_or_else(|| format!("request failed with status {status}")),
        )
    }
}

impl StorageGateway for HttpGateway {
    async fn create_account(&self, signup: &SignupData) -> Result<RemoteAccount, GatewayError> {
        let response = self
            .inner
            .client
            .post(self.url("/auth/signup"))
            .json(signup)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let body: UserBody = response.json().await?;
        Ok(body.user)
    }

    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(RemoteAccount, Session), GatewayError> {
        let response = self
            .inner
            .client
            .post(self.url("/auth/signin"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        if response.status() == StatusCode::BAD_REQUEST {
            return Err(GatewayError::InvalidCredentials);
        }
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let body: SigninBody = response.json().await?;
        Ok((body.user, Session::new(body.session.access_token)))
    }

    async fn fetch_account(&self, session: &Session) -> Result<RemoteAccount, GatewayError> {
        let response = self
            .inner
            .client
            .get(self.url("/auth/profile"))
            .bearer_auth(&session.access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let body: UserBody = response.json().await?;
        Ok(body.user)
    }

    async fn get_setup_document(
        &self,
        session: &Session,
    ) -> Result<Option<SetupProfile>, GatewayError> {
        let response = self
            .inner
            .client
            .get(self.url("/user/setup"))
            .bearer_auth(&session.access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let body: SetupBody = response.json().await?;
        Ok(body.setup_data)
    }

    async fn put_setup_document(
        &self,
        session: &Session,
        profile: &SetupProfile,
    ) -> Result<(), GatewayError> {
        let response = self
            .inner
            .client
            .post(self.url("/user/setup"))
            .bearer_auth(&session.access_token)
            .json(profile)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        Ok(())
    }

    async fn delete_setup_document(&self, session: &Session) -> Result<(), GatewayError> {
        let response = self
            .inner
            .client
            .delete(self.url("/user/setup"))
            .bearer_auth(&session.access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        Ok(())
    }

    async fn update_profile(
        &self,
        session: &Session,
        profile: &UserProfile,
    ) -> Result<(), GatewayError> {
        let response = self
            .inner
            .client
            .post(self.url("/user/profile"))
            .bearer_auth(&session.access_token)
            .json(profile)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        Ok(())
    }
}
