//! HTTP route handlers for the storage gateway.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health        - Health check
//!
//! # Auth
//! POST   /auth/signup   - Register a new account
//! POST   /auth/signin   - Authenticate, returns a bearer session
//! GET    /auth/profile  - Current account (bearer)
//!
//! # User data (bearer)
//! GET    /user/setup    - Fetch the setup document, or null
//! POST   /user/setup    - Overwrite the setup document
//! DELETE /user/setup    - Remove the setup document (idempotent)
//! POST   /user/profile  - Overwrite profile fields
//! ```

pub mod auth;
pub mod health;
pub mod user;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Build the full application router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/auth/signup", post(auth::signup))
        .route("/auth/signin", post(auth::signin))
        .route("/auth/profile", get(auth::profile))
        .route(
            "/user/setup",
            get(user::get_setup)
                .post(user::save_setup)
                .delete(user::delete_setup),
        )
        .route("/user/profile", post(user::save_profile))
}
