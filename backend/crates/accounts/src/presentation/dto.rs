//! API DTOs (Data Transfer Objects)
//!
//! None of the response types carry a password hash field, so the hash
//! cannot leak regardless of which handler builds the response.

use serde::{Deserialize, Serialize};

use crate::application::stats::ProfileStats;
use crate::domain::entity::Account;

// ============================================================================
// Sign Up / Login
// ============================================================================

/// Sign up request. Defaults keep missing fields inside the normal
/// validation path instead of a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default)]
    pub role: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login response payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub token: String,
    pub account: LoginAccountView,
}

/// Non-sensitive subset returned alongside the token
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginAccountView {
    pub account_id: String,
    pub email: String,
    pub role: String,
    pub full_name: Option<String>,
}

impl From<&Account> for LoginAccountView {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.account_id.to_string(),
            email: account.email.as_str().to_string(),
            role: account.role.code().to_string(),
            full_name: account.full_name.clone(),
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Public view of an account: everything except the hash and timestamps.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub account_id: String,
    pub full_name: Option<String>,
    pub email: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub website: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub role: String,
    pub active: bool,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.account_id.to_string(),
            full_name: account.full_name.clone(),
            email: account.email.as_str().to_string(),
            address: account.address.clone(),
            phone_number: account.phone_number.clone(),
            website: account.website.clone(),
            kind: account.kind.clone(),
            role: account.role.code().to_string(),
            active: account.active,
        }
    }
}

/// GET /authorization payload: profile fields with the role's aggregates
/// flattened alongside.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileData {
    #[serde(flatten)]
    pub account: AccountView,
    #[serde(flatten)]
    pub stats: ProfileStats,
}

/// Partial profile update request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub website: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub password: Option<String>,
}

/// Profile update response payload
#[derive(Debug, Clone, Serialize)]
pub struct UpdatedProfileData {
    pub account: AccountView,
}

// ============================================================================
// Admin
// ============================================================================

/// Fixed projection for the agency listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencySummary {
    pub account_id: String,
    pub full_name: Option<String>,
    pub email: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub active: bool,
}

impl From<&Account> for AgencySummary {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.account_id.to_string(),
            full_name: account.full_name.clone(),
            email: account.email.as_str().to_string(),
            kind: account.kind.clone(),
            phone_number: account.phone_number.clone(),
            address: account.address.clone(),
            active: account.active,
        }
    }
}

/// Agency listing payload
#[derive(Debug, Clone, Serialize)]
pub struct AgenciesData {
    pub agencies: Vec<AgencySummary>,
}

/// Activation toggle payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleActiveData {
    pub account_id: String,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{AccountRole, Email};
    use platform::password::ClearTextPassword;

    fn account() -> Account {
        let hash = ClearTextPassword::new("Abc123".to_string())
            .unwrap()
            .hash(None)
            .unwrap();
        let mut account = Account::new(
            Email::new("a@x.com").unwrap(),
            hash,
            AccountRole::Agency,
        );
        account.full_name = Some("Acme Agency".to_string());
        account.kind = Some("creative".to_string());
        account
    }

    #[test]
    fn test_account_view_never_carries_the_hash() {
        let body = serde_json::to_value(AccountView::from(&account())).unwrap();

        let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
        assert!(!keys.iter().any(|k| k.contains("password")));
        assert_eq!(body["email"], "a@x.com");
        assert_eq!(body["type"], "creative");
        assert_eq!(body["role"], "agency");
        assert_eq!(body["active"], true);
    }

    #[test]
    fn test_profile_data_flattens_stats_next_to_the_account() {
        let account = account();
        let body = serde_json::to_value(ProfileData {
            account: (&account).into(),
            stats: ProfileStats::Agency {
                total_projects: 0,
                completed_projects: 0,
            },
        })
        .unwrap();

        assert_eq!(body["accountId"], account.account_id.to_string());
        assert_eq!(body["totalProjects"], 0);
        assert_eq!(body["completedProjects"], 0);
    }

    #[test]
    fn test_update_request_accepts_type_key() {
        let req: UpdateProfileRequest =
            serde_json::from_str(r#"{"type": "media", "phoneNumber": "555-0100"}"#).unwrap();
        assert_eq!(req.kind.as_deref(), Some("media"));
        assert_eq!(req.phone_number.as_deref(), Some("555-0100"));
        assert!(req.password.is_none());
    }
}
