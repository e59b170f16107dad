//! Account Entity
//!
//! A principal of the system: agency or administrator. The password hash
//! lives here but is never serialized; presentation DTOs have no field
//! for it.

use chrono::{DateTime, Utc};
use kernel::id::AccountId;
use platform::password::HashedPassword;

use crate::domain::value_object::{AccountRole, Email};

#[derive(Debug, Clone)]
pub struct Account {
    pub account_id: AccountId,
    /// Display name, filled in via profile update
    pub full_name: Option<String>,
    /// Globally unique, lowercased
    pub email: Email,
    /// Argon2id PHC string
    pub password_hash: HashedPassword,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub website: Option<String>,
    /// Free-text classifier, exposed as `type` on the wire
    pub kind: Option<String>,
    /// Fixed at signup
    pub role: AccountRole,
    /// Deactivated accounts cannot log in
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a fresh account as signup leaves it: active, with every
    /// optional profile field empty.
    pub fn new(email: Email, password_hash: HashedPassword, role: AccountRole) -> Self {
        let now = Utc::now();

        Self {
            account_id: AccountId::new(),
            full_name: None,
            email,
            password_hash,
            address: None,
            phone_number: None,
            website: None,
            kind: None,
            role,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Bump the modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn set_password(&mut self, password_hash: HashedPassword) {
        self.password_hash = password_hash;
        self.touch();
    }

    pub fn can_login(&self) -> bool {
        self.active
    }
}
