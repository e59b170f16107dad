//! Project Entity
//!
//! A unit of work owned by exactly one agency account. Ownership never
//! transfers; the only mutable state is the completed flag.

use chrono::{DateTime, Utc};
use kernel::id::{AccountId, ProjectId};

#[derive(Debug, Clone)]
pub struct Project {
    pub project_id: ProjectId,
    pub name: String,
    pub completed: bool,
    /// Owning account, role agency at creation time
    pub agency_id: AccountId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// New projects start incomplete.
    pub fn new(name: String, agency_id: AccountId) -> Self {
        let now = Utc::now();

        Self {
            project_id: ProjectId::new(),
            name,
            completed: false,
            agency_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A project joined with its owner's display fields, as the listing
/// endpoint returns it.
#[derive(Debug, Clone)]
pub struct ProjectListing {
    pub project: Project,
    pub owner_name: Option<String>,
    pub owner_kind: Option<String>,
}
