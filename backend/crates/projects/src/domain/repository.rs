//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the
//! infrastructure layer; tests provide in-memory fakes.

use kernel::id::{AccountId, ProjectId};

use crate::domain::project::{Project, ProjectListing};
use crate::error::ProjectResult;

/// Project repository trait
#[trait_variant::make(ProjectRepository: Send)]
pub trait LocalProjectRepository {
    /// Persist a new project
    async fn create(&self, project: &Project) -> ProjectResult<()>;

    /// All projects, optionally scoped to one owner, each joined with its
    /// owner's name and type
    async fn list(&self, owner: Option<&AccountId>) -> ProjectResult<Vec<ProjectListing>>;

    /// Set the completed flag to an explicit value, returning the new
    /// value. `None` if the project does not exist.
    async fn set_completed(
        &self,
        project_id: &ProjectId,
        completed: bool,
    ) -> ProjectResult<Option<bool>>;

    /// Hard delete. `false` if the project does not exist.
    async fn delete(&self, project_id: &ProjectId) -> ProjectResult<bool>;
}

/// Minimal view of the accounts table this crate needs: enough to check
/// that a referenced owner exists and is an agency. Keeping this a local
/// trait keeps the crate free of a dependency on the accounts crate.
#[trait_variant::make(OwnerDirectory: Send)]
pub trait LocalOwnerDirectory {
    /// Role code of the account, if it exists
    async fn owner_role(&self, account_id: &AccountId) -> ProjectResult<Option<String>>;
}
