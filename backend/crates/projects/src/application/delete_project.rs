//! Delete Project Use Case

use std::sync::Arc;

use kernel::id::ProjectId;

use crate::domain::repository::ProjectRepository;
use crate::error::{ProjectError, ProjectResult};

/// Hard delete of a project.
pub struct DeleteProjectUseCase<R>
where
    R: ProjectRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteProjectUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, project_id: &ProjectId) -> ProjectResult<()> {
        if !self.repo.delete(project_id).await? {
            return Err(ProjectError::NotFound);
        }

        tracing::info!(project_id = %project_id, "Project deleted");

        Ok(())
    }
}
