//! Email Value Object
//!
//! Trimmed, lowercased, format-checked email address. Format validation
//! only; whether the mailbox exists is not this type's problem.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AccountError, AccountResult};

/// Maximum total length (RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Maximum local-part length (RFC 5321)
const LOCAL_MAX_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Normalize and validate an address.
    pub fn new(email: impl Into<String>) -> AccountResult<Self> {
        let email = email.into().trim().to_lowercase();

        if email.is_empty() {
            return Err(AccountError::Validation("Email cannot be empty".into()));
        }
        if email.len() > EMAIL_MAX_LENGTH || !Self::is_valid_format(&email) {
            return Err(AccountError::Validation("Invalid email format".into()));
        }

        Ok(Self(email))
    }

    fn is_valid_format(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || local.len() > LOCAL_MAX_LENGTH {
            return false;
        }
        if local.contains('@') || domain.contains('@') {
            return false;
        }

        // Domain needs at least one dot and must stay within the hostname
        // character set, with no leading/trailing separators.
        if domain.is_empty() || !domain.contains('.') {
            return false;
        }
        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }
        if domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) {
            return false;
        }

        true
    }

    /// Wrap a value loaded from the database (validated at write time).
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = AccountError;

    fn from_str(s: &str) -> AccountResult<Self> {
        Email::new(s)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert!(Email::new("user@example.com").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
        assert!(Email::new("  padded@example.com  ").is_ok());
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(Email::new("").is_err());
        assert!(Email::new("userexample.com").is_err());
        assert!(Email::new("user@").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("user@@example.com").is_err());
        assert!(Email::new("user@example").is_err());
        assert!(Email::new("user@.example.com").is_err());
        assert!(Email::new("user@example.com-").is_err());
    }

    #[test]
    fn test_normalization() {
        let email = Email::new("User@Example.COM").unwrap();
        assert_eq!(email.as_str(), "user@example.com");

        let email = Email::new(" a@x.com ").unwrap();
        assert_eq!(email.as_str(), "a@x.com");
    }

    #[test]
    fn test_length_bounds() {
        let local = "a".repeat(64);
        assert!(Email::new(format!("{local}@example.com")).is_ok());

        let local = "a".repeat(65);
        assert!(Email::new(format!("{local}@example.com")).is_err());
    }
}
