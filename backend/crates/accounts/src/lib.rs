//! Accounts Backend Module
//!
//! Authentication, profiles and account administration:
//! - `domain/` - Account entity, value objects, repository traits
//! - `application/` - Use cases (signup, login, profile, admin)
//! - `infra/` - PostgreSQL repository
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, per-record random salt
//! - Stateless HS256 bearer tokens with a 60-day expiry
//! - Role-based access (agency, admin); roles are fixed at signup
//! - Login failures never reveal whether the email is registered

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AccountsConfig;
pub use error::{AccountError, AccountResult};
pub use infra::postgres::PgAccountRepository;
pub use presentation::router::accounts_router;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
