//! Password Policy, Hashing and Verification
//!
//! Credential handling for account passwords:
//! - Complexity policy: at least 6 characters with one lowercase letter,
//!   one uppercase letter and one digit; the only specials permitted are
//!   `@$!%*?&` (allowed, never required)
//! - Argon2id hashing with a per-record random salt, PHC string output
//! - Optional application-wide pepper
//! - Clear-text material is zeroized on drop and redacted in Debug output

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Minimum password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Upper bound to keep hashing cost predictable.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Special characters the policy permits.
const ALLOWED_SPECIALS: &str = "@$!%*?&";

/// Password policy violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters long")]
    TooShort { min: usize },

    #[error("Password must be at most {max} characters long")]
    TooLong { max: usize },

    #[error("Password cannot be empty")]
    Empty,

    #[error("Password must include at least one lowercase letter")]
    MissingLowercase,

    #[error("Password must include at least one uppercase letter")]
    MissingUppercase,

    #[error("Password must include at least one number")]
    MissingDigit,

    #[error("Password may only contain letters, numbers and @$!%*?&")]
    InvalidCharacter,
}

/// Hashing and hash-parsing failures.
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

/// Clear text password with automatic memory zeroization.
///
/// Not `Clone` on purpose; Debug output is redacted. Input is NFKC
/// normalized before the policy runs so visually identical passwords
/// hash identically.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Validate raw input against the complexity policy.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let normalized: String = raw.nfkc().collect();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::Empty);
        }

        let char_count = normalized.chars().count();
        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
            });
        }

        for ch in normalized.chars() {
            if !ch.is_ascii_alphanumeric() && !ALLOWED_SPECIALS.contains(ch) {
                return Err(PasswordPolicyError::InvalidCharacter);
            }
        }

        if !normalized.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(PasswordPolicyError::MissingLowercase);
        }
        if !normalized.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(PasswordPolicyError::MissingUppercase);
        }
        if !normalized.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordPolicyError::MissingDigit);
        }

        Ok(Self(normalized))
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash with Argon2id. The salt is random per call; the optional
    /// pepper must be supplied again at verification time.
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let password_bytes = peppered(self.as_bytes(), pepper);

        let salt = SaltString::generate(OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(&password_bytes, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

/// Argon2id hash in PHC string format. Safe to store and log.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Parse a PHC string loaded from the database.
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self { hash })
    }

    /// PHC string for storage.
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a clear-text password against this hash. Argon2 compares in
    /// constant time internally.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let password_bytes = peppered(password.as_bytes(), pepper);

        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(&password_bytes, &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

fn peppered(password: &[u8], pepper: Option<&[u8]>) -> Vec<u8> {
    match pepper {
        Some(p) => {
            let mut combined = password.to_vec();
            combined.extend_from_slice(p);
            combined
        }
        None => password.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_valid_password() {
        assert!(ClearTextPassword::new("Abc123".to_string()).is_ok());
    }

    #[test]
    fn test_specials_allowed_not_required() {
        assert!(ClearTextPassword::new("Abc123!".to_string()).is_ok());
        assert!(ClearTextPassword::new("Ab1@$!%*?&".to_string()).is_ok());
    }

    #[test]
    fn test_too_short() {
        let result = ClearTextPassword::new("Ab1".to_string());
        assert_eq!(result.unwrap_err(), PasswordPolicyError::TooShort { min: 6 });
    }

    #[test]
    fn test_too_long() {
        let long = format!("Ab1{}", "a".repeat(MAX_PASSWORD_LENGTH));
        let result = ClearTextPassword::new(long);
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(
            ClearTextPassword::new("".to_string()).unwrap_err(),
            PasswordPolicyError::Empty
        );
        assert_eq!(
            ClearTextPassword::new("      ".to_string()).unwrap_err(),
            PasswordPolicyError::Empty
        );
    }

    #[test]
    fn test_missing_character_classes() {
        assert_eq!(
            ClearTextPassword::new("abc123".to_string()).unwrap_err(),
            PasswordPolicyError::MissingUppercase
        );
        assert_eq!(
            ClearTextPassword::new("ABC123".to_string()).unwrap_err(),
            PasswordPolicyError::MissingLowercase
        );
        assert_eq!(
            ClearTextPassword::new("Abcdef".to_string()).unwrap_err(),
            PasswordPolicyError::MissingDigit
        );
    }

    #[test]
    fn test_disallowed_characters() {
        assert_eq!(
            ClearTextPassword::new("Abc 123".to_string()).unwrap_err(),
            PasswordPolicyError::InvalidCharacter
        );
        assert_eq!(
            ClearTextPassword::new("Abc123#".to_string()).unwrap_err(),
            PasswordPolicyError::InvalidCharacter
        );
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new("Secret1A".to_string()).unwrap();
        let hashed = password.hash(None).unwrap();

        assert!(hashed.verify(&password, None));

        let wrong = ClearTextPassword::new("Secret1B".to_string()).unwrap();
        assert!(!hashed.verify(&wrong, None));
    }

    #[test]
    fn test_hash_is_salted() {
        let password = ClearTextPassword::new("Secret1A".to_string()).unwrap();
        let first = password.hash(None).unwrap();
        let second = password.hash(None).unwrap();
        assert_ne!(first.as_phc_string(), second.as_phc_string());
    }

    #[test]
    fn test_hash_with_pepper() {
        let password = ClearTextPassword::new("Secret1A".to_string()).unwrap();
        let pepper = b"application_pepper";
        let hashed = password.hash(Some(pepper)).unwrap();

        assert!(hashed.verify(&password, Some(pepper)));
        assert!(!hashed.verify(&password, None));
        assert!(!hashed.verify(&password, Some(b"wrong_pepper")));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = ClearTextPassword::new("Secret1A".to_string()).unwrap();
        let hashed = password.hash(None).unwrap();

        let phc = hashed.as_phc_string().to_string();
        let restored = HashedPassword::from_phc_string(phc).unwrap();

        assert!(restored.verify(&password, None));
    }

    #[test]
    fn test_invalid_phc_string() {
        assert!(HashedPassword::from_phc_string("not_a_valid_hash").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new("Secret1A".to_string()).unwrap();
        let debug = format!("{:?}", password);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("Secret1A"));

        let hashed = password.hash(None).unwrap();
        let debug = format!("{:?}", hashed);
        assert!(debug.contains("HASH"));
    }
}
