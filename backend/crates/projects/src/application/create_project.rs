//! Create Project Use Case
//!
//! Verifies the referenced owner exists and is an agency before the
//! insert. The two steps are not one transaction; a concurrent owner
//! change between them is accepted at this system's write rates.

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::project::Project;
use crate::domain::repository::{OwnerDirectory, ProjectRepository};
use crate::error::{ProjectError, ProjectResult};

/// Create project input
pub struct CreateProjectInput {
    pub name: String,
    pub agency_id: Option<AccountId>,
}

/// Create project use case
pub struct CreateProjectUseCase<R>
where
    R: ProjectRepository + OwnerDirectory,
{
    repo: Arc<R>,
}

impl<R> CreateProjectUseCase<R>
where
    R: ProjectRepository + OwnerDirectory,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateProjectInput) -> ProjectResult<Project> {
        let agency_id = input.agency_id.ok_or(ProjectError::InvalidAgency)?;

        let role = self.repo.owner_role(&agency_id).await?;
        if role.as_deref() != Some("agency") {
            return Err(ProjectError::InvalidAgency);
        }

        let project = Project::new(input.name, agency_id);
        self.repo.create(&project).await?;

        tracing::info!(
            project_id = %project.project_id,
            agency_id = %project.agency_id,
            "Project created"
        );

        Ok(project)
    }
}
