//! Set Project Status Use Case
//!
//! The completed flag is set to an explicit value rather than flipped, so
//! concurrent requests converge on the last writer's value instead of
//! cancelling each other out.

use std::sync::Arc;

use kernel::id::ProjectId;

use crate::domain::repository::ProjectRepository;
use crate::error::{ProjectError, ProjectResult};

/// Set project status use case
pub struct SetProjectStatusUseCase<R>
where
    R: ProjectRepository,
{
    repo: Arc<R>,
}

impl<R> SetProjectStatusUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns the new value of the flag.
    pub async fn execute(&self, project_id: &ProjectId, completed: bool) -> ProjectResult<bool> {
        let completed = self
            .repo
            .set_completed(project_id, completed)
            .await?
            .ok_or(ProjectError::NotFound)?;

        tracing::info!(
            project_id = %project_id,
            completed,
            "Project status updated"
        );

        Ok(completed)
    }
}
