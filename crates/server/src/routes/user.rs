//! User data route handlers: setup document and profile fields.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use voltura_core::{Device, SetupProfile, UserProfile};

use crate::db::{KvRepository, RepositoryError};
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Incoming setup payload. All four fields are validated for presence
/// before anything touches storage.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupRequest {
    pub power_category: Option<String>,
    pub kwh_price: Option<String>,
    pub monthly_bill: Option<String>,
    pub devices: Option<Vec<Device>>,
}

/// Profile payload. The email field is accepted on the wire but the
/// account email is never changed by this endpoint.
#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub phone: String,
}

/// The persisted document: the setup profile plus a write timestamp.
#[derive(Debug, Serialize, Deserialize)]
pub struct SetupDocument {
    #[serde(flatten)]
    pub profile: SetupProfile,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SetupResponse {
    pub success: bool,
    #[serde(rename = "setupData")]
    pub setup_data: Option<Value>,
}

/// Overwrite the account's setup document.
///
/// POST /user/setup
pub async fn save_setup(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(body): Json<SetupRequest>,
) -> Result<Json<AckResponse>> {
    let (Some(power_category), Some(kwh_price), Some(monthly_bill), Some(devices)) = (
        body.power_category,
        body.kwh_price,
        body.monthly_bill,
        body.devices,
    ) else {
        return Err(AppError::BadRequest(
            "Missing required setup data fields".to_owned(),
        ));
    };

    if power_category.is_empty() || kwh_price.is_empty() || monthly_bill.is_empty() {
        return Err(AppError::BadRequest(
            "Missing required setup data fields".to_owned(),
        ));
    }

    let document = SetupDocument {
        profile: SetupProfile {
            power_category,
            kwh_price,
            monthly_bill,
            devices,
        },
        updated_at: Utc::now(),
    };

    let value = serde_json::to_string(&document)
        .map_err(|e| AppError::Internal(format!("serializing setup document: {e}")))?;

    KvRepository::new(state.pool())
        .set(&user.id.setup_key(), &value)
        .await
        .map_err(AppError::Database)?;

    tracing::info!(email = %user.email, "Setup data saved");
    Ok(Json(AckResponse {
        success: true,
        message: "Setup data saved successfully",
    }))
}

/// Fetch the account's setup document, or null if none was ever saved.
///
/// GET /user/setup
pub async fn get_setup(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<SetupResponse>> {
    let stored = KvRepository::new(state.pool())
        .get(&user.id.setup_key())
        .await
        .map_err(AppError::Database)?;

    let setup_data = match stored {
        None => None,
        Some(text) => Some(serde_json::from_str(&text).map_err(|e| {
            AppError::Database(RepositoryError::DataCorruption(format!(
                "setup document for {}: {e}",
                user.id
            )))
        })?),
    };

    Ok(Json(SetupResponse {
        success: true,
        setup_data,
    }))
}

/// Remove the account's setup document. Removing a missing document
/// still succeeds.
///
/// DELETE /user/setup
pub async fn delete_setup(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<AckResponse>> {
    KvRepository::new(state.pool())
        .delete(&user.id.setup_key())
        .await
        .map_err(AppError::Database)?;

    tracing::info!(email = %user.email, "Setup data deleted");
    Ok(Json(AckResponse {
        success: true,
        message: "Setup data deleted successfully",
    }))
}

/// Overwrite the account's profile fields.
///
/// POST /user/profile
pub async fn save_profile(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(body): Json<ProfileRequest>,
) -> Result<Json<AckResponse>> {
    let auth = AuthService::new(state.pool(), state.config().token_ttl_hours);
    let profile = UserProfile {
        name: body.name,
        email: user.email.to_string(),
        company: body.company,
        phone: body.phone,
    };

    auth.update_profile(user.id, &profile).await?;

    tracing::info!(email = %user.email, "Profile data saved");
    Ok(Json(AckResponse {
        success: true,
        message: "Profile data saved successfully",
    }))
}
