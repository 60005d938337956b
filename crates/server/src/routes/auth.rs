//! Authentication route handlers.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use voltura_core::UserProfile;

use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::ApiUser;
use crate::services::auth::AuthService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Wire shape for an issued session.
#[derive(Debug, Serialize)]
pub struct ApiSession {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub success: bool,
    pub user: ApiUser,
}

#[derive(Debug, Serialize)]
pub struct SigninResponse {
    pub success: bool,
    pub user: ApiUser,
    pub session: ApiSession,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub user: ApiUser,
}

/// Register a new account.
///
/// POST /auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<Json<SignupResponse>> {
    if body.email.is_empty() || body.password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".to_owned(),
        ));
    }

    let auth = AuthService::new(state.pool(), state.config().token_ttl_hours);
    let profile = UserProfile {
        name: body.name,
        email: body.email.clone(),
        company: body.company,
        phone: body.phone,
    };

    let user = auth.signup(&body.email, &body.password, &profile).await?;

    tracing::info!(email = %user.email, "User created");
    Ok(Json(SignupResponse {
        success: true,
        user: user.into(),
    }))
}

/// Authenticate with email and password.
///
/// POST /auth/signin
pub async fn signin(
    State(state): State<AppState>,
    Json(body): Json<SigninRequest>,
) -> Result<Json<SigninResponse>> {
    if body.email.is_empty() || body.password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".to_owned(),
        ));
    }

    let auth = AuthService::new(state.pool(), state.config().token_ttl_hours);
    let (user, issued) = auth.signin(&body.email, &body.password).await?;

    tracing::info!(email = %user.email, "User signed in");
    Ok(Json(SigninResponse {
        success: true,
        user: user.into(),
        session: ApiSession {
            access_token: issued.token,
            expires_at: issued.expires_at,
        },
    }))
}

/// Fetch the authenticated account.
///
/// GET /auth/profile
pub async fn profile(RequireAuth(user): RequireAuth) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        success: true,
        user: user.into(),
    })
}
