//! Account Error Types
//!
//! Account-specific error variants that converge on the unified
//! `kernel` error type at the HTTP boundary.

use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use kernel::error::kind::ErrorKind;
use thiserror::Error;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// Malformed or policy-violating input
    #[error("{0}")]
    Validation(String),

    /// Signup passwords differ
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Role is not one of agency/admin
    #[error("Invalid role")]
    InvalidRole,

    /// Email already registered
    #[error("Account already exists")]
    EmailTaken,

    /// Unknown email or wrong password. One message for both cases so a
    /// caller cannot probe which emails are registered.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// Login on a deactivated account
    #[error("Account is not active")]
    AccountInactive,

    /// No Authorization header on a protected route
    #[error("No token provided")]
    MissingToken,

    /// Bad signature, malformed token, or bad subject claim
    #[error("Invalid token")]
    InvalidToken,

    /// Token past its expiry
    #[error("Token has expired")]
    TokenExpired,

    /// Caller's role does not permit the operation
    #[error("Admin access required")]
    AdminOnly,

    /// Caller tried to update someone else's profile
    #[error("You can only update your own profile")]
    SelfOnly,

    /// Referenced account absent
    #[error("Account not found")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// ErrorKind for this error. `Database` is classified separately in
    /// [`AccountError::into_app_error`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::Validation(_)
            | AccountError::PasswordMismatch
            | AccountError::InvalidRole => ErrorKind::BadRequest,
            AccountError::EmailTaken => ErrorKind::Conflict,
            AccountError::InvalidCredentials
            | AccountError::MissingToken
            | AccountError::InvalidToken
            | AccountError::TokenExpired => ErrorKind::Unauthorized,
            AccountError::AccountInactive | AccountError::AdminOnly | AccountError::SelfOnly => {
                ErrorKind::Forbidden
            }
            AccountError::NotFound => ErrorKind::NotFound,
            AccountError::Database(_) | AccountError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Convert to the unified error. Store errors go through the kernel's
    /// PostgreSQL classifier so constraint breaches and connectivity
    /// faults keep their own status codes.
    pub fn into_app_error(self) -> AppError {
        match self {
            AccountError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            AccountError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AccountError::AccountInactive => {
                tracing::warn!("Login attempt on inactive account");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<platform::token::TokenError> for AccountError {
    fn from(err: platform::token::TokenError) -> Self {
        match err {
            platform::token::TokenError::Expired => AccountError::TokenExpired,
            platform::token::TokenError::Invalid => AccountError::InvalidToken,
            platform::token::TokenError::Issuance(msg) => AccountError::Internal(msg),
        }
    }
}

impl From<platform::password::PasswordPolicyError> for AccountError {
    fn from(err: platform::password::PasswordPolicyError) -> Self {
        AccountError::Validation(err.to_string())
    }
}
