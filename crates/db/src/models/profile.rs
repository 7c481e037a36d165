//! Profile entity model and DTOs.

use launchpad_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `profiles` table. `id` is the identity-provider user id.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub email: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub subscription_status: Option<String>,
    pub subscription_plan: Option<String>,
    pub stripe_customer_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a profile row for a freshly registered user.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProfile {
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 200))]
    pub full_name: Option<String>,
    #[validate(url)]
    pub avatar_url: Option<String>,
}

/// DTO for account settings. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfile {
    #[validate(length(max = 200))]
    pub full_name: Option<String>,
    #[validate(url)]
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_a_valid_email() {
        let bad = CreateProfile {
            email: "not-an-email".to_string(),
            full_name: None,
            avatar_url: None,
        };
        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));

        let good = CreateProfile {
            email: "ada@example.com".to_string(),
            ..bad
        };
        assert!(good.validate().is_ok());
    }

    #[test]
    fn avatar_must_be_a_url() {
        let update = UpdateProfile {
            full_name: Some("Ada".to_string()),
            avatar_url: Some("avatar.png".to_string()),
        };
        assert!(update.validate().unwrap_err().field_errors().contains_key("avatar_url"));

        let update = UpdateProfile {
            avatar_url: Some("https://cdn.example.com/avatar.png".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_ok());
    }
}
