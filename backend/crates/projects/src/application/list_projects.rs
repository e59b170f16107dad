//! List Projects Use Case

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::project::ProjectListing;
use crate::domain::repository::ProjectRepository;
use crate::error::ProjectResult;

/// List projects, optionally scoped to one owning account.
pub struct ListProjectsUseCase<R>
where
    R: ProjectRepository,
{
    repo: Arc<R>,
}

impl<R> ListProjectsUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner: Option<&AccountId>) -> ProjectResult<Vec<ProjectListing>> {
        self.repo.list(owner).await
    }
}
