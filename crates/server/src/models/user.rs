//! User domain types.
//!
//! These types represent validated domain objects separate from database
//! row types and from the JSON wire shape.

use chrono::{DateTime, Utc};
use serde::Serialize;

use voltura_core::{Email, UserId, UserProfile};

/// An account (domain type).
#[derive(Debug, Clone)]
pub struct User {
    /// Unique account ID.
    pub id: UserId,
    /// Email address, unique and case-sensitive as provided at signup.
    pub email: Email,
    /// Contact/profile details.
    pub profile: UserProfile,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Wire representation of a user, returned in `{success, user}` payloads.
///
/// The password hash never leaves the repository layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUser {
    pub id: UserId,
    pub email: Email,
    pub name: String,
    pub company: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for ApiUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.profile.name,
            company: user.profile.company,
            phone: user.profile.phone,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_api_user_omits_secrets() {
        let user = User {
            id: UserId::generate(),
            email: Email::parse("a@b.c").unwrap(),
            profile: UserProfile {
                name: "Budi".to_owned(),
                email: "a@b.c".to_owned(),
                company: String::new(),
                phone: String::new(),
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(ApiUser::from(user)).unwrap();
        assert_eq!(json["name"], "Budi");
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
    }
}
