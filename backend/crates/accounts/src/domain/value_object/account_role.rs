//! Account Role Value Object
//!
//! A principal is either an agency (owns projects) or an administrator
//! (manages accounts, sees system-wide aggregates). The role is chosen at
//! signup and no update path changes it afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    Agency,
    Admin,
}

impl AccountRole {
    /// String code for database storage and token claims.
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Agency => "agency",
            Self::Admin => "admin",
        }
    }

    /// Parse a code; `None` for anything outside the two known roles.
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "agency" => Some(Self::Agency),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    #[inline]
    pub const fn is_agency(&self) -> bool {
        matches!(self, Self::Agency)
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(AccountRole::from_code("agency"), Some(AccountRole::Agency));
        assert_eq!(AccountRole::from_code("admin"), Some(AccountRole::Admin));
        assert_eq!(AccountRole::from_code("superuser"), None);
        assert_eq!(AccountRole::from_code("Agency"), None);
        assert_eq!(AccountRole::from_code(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(AccountRole::Agency.to_string(), "agency");
        assert_eq!(AccountRole::Admin.to_string(), "admin");
    }

    #[test]
    fn test_role_checks() {
        assert!(AccountRole::Agency.is_agency());
        assert!(!AccountRole::Agency.is_admin());
        assert!(AccountRole::Admin.is_admin());
        assert!(!AccountRole::Admin.is_agency());
    }

    #[test]
    fn test_serde_codes() {
        assert_eq!(
            serde_json::to_string(&AccountRole::Agency).unwrap(),
            "\"agency\""
        );
        assert_eq!(
            serde_json::from_str::<AccountRole>("\"admin\"").unwrap(),
            AccountRole::Admin
        );
    }
}
