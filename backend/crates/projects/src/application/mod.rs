//! Application layer: one use case per operation.

pub mod create_project;
pub mod delete_project;
pub mod list_projects;
pub mod set_status;

pub use create_project::{CreateProjectInput, CreateProjectUseCase};
pub use delete_project::DeleteProjectUseCase;
pub use list_projects::ListProjectsUseCase;
pub use set_status::SetProjectStatusUseCase;
