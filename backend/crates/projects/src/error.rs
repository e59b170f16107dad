//! Project Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use kernel::error::kind::ErrorKind;
use thiserror::Error;

/// Project-specific result type alias
pub type ProjectResult<T> = Result<T, ProjectError>;

/// Project-specific error variants
#[derive(Debug, Error)]
pub enum ProjectError {
    /// Owner reference missing, unknown, or not an agency
    #[error("Invalid or non-existent agency")]
    InvalidAgency,

    /// Referenced project absent
    #[error("Project not found")]
    NotFound,

    /// No Authorization header on a protected route
    #[error("No token provided")]
    MissingToken,

    /// Bad signature or malformed token
    #[error("Invalid token")]
    InvalidToken,

    /// Token past its expiry
    #[error("Token has expired")]
    TokenExpired,

    /// Caller is not an agency
    #[error("Agency access required")]
    AgencyOnly,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProjectError {
    /// ErrorKind for this error. `Database` is classified separately in
    /// [`ProjectError::into_app_error`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProjectError::InvalidAgency => ErrorKind::BadRequest,
            ProjectError::NotFound => ErrorKind::NotFound,
            ProjectError::MissingToken
            | ProjectError::InvalidToken
            | ProjectError::TokenExpired => ErrorKind::Unauthorized,
            ProjectError::AgencyOnly => ErrorKind::Forbidden,
            ProjectError::Database(_) | ProjectError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Convert to the unified error, routing store errors through the
    /// kernel's PostgreSQL classifier.
    pub fn into_app_error(self) -> AppError {
        match self {
            ProjectError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            ProjectError::Database(e) => {
                tracing::error!(error = %e, "Project database error");
            }
            ProjectError::Internal(msg) => {
                tracing::error!(message = %msg, "Project internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Project error");
            }
        }
    }
}

impl IntoResponse for ProjectError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<platform::token::TokenError> for ProjectError {
    fn from(err: platform::token::TokenError) -> Self {
        match err {
            platform::token::TokenError::Expired => ProjectError::TokenExpired,
            platform::token::TokenError::Invalid => ProjectError::InvalidToken,
            platform::token::TokenError::Issuance(msg) => ProjectError::Internal(msg),
        }
    }
}
