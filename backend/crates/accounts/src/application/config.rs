//! Application Configuration
//!
//! Built once at startup from the environment and passed into the router;
//! never read from ambient state inside a handler.

/// Accounts application configuration
#[derive(Debug, Clone, Default)]
pub struct AccountsConfig {
    /// Optional application-wide secret mixed into password hashes
    pub password_pepper: Option<Vec<u8>>,
}

impl AccountsConfig {
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
