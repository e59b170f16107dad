//! Projects Backend Module
//!
//! CRUD on projects owned by agency accounts:
//! - `domain/` - Project entity, repository traits
//! - `application/` - Use cases (create, list, status, delete)
//! - `infra/` - PostgreSQL repository
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Creation verifies the referenced owner is an agency; the status update
//! sets the completed flag to an explicit value in a single statement.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{ProjectError, ProjectResult};
pub use infra::postgres::PgProjectRepository;
pub use presentation::router::projects_router;

pub mod models {
    pub use crate::domain::project::*;
    pub use crate::presentation::dto::*;
}
