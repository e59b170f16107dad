//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::project::{Project, ProjectListing};

/// Create project request. The owner reference is optional at the type
/// level so a missing field reports "invalid agency" instead of a
/// deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub project_name: String,
    pub agency: Option<Uuid>,
}

/// Status update request: the flag's explicit new value.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetStatusRequest {
    pub completed: bool,
}

/// Public view of a project
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub project_id: String,
    pub project_name: String,
    pub completed: bool,
    pub agency: String,
}

impl From<&Project> for ProjectView {
    fn from(project: &Project) -> Self {
        Self {
            project_id: project.project_id.to_string(),
            project_name: project.name.clone(),
            completed: project.completed,
            agency: project.agency_id.to_string(),
        }
    }
}

/// Owner fields joined into a listing row
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerView {
    pub full_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Listing row: the project plus its owner
#[derive(Debug, Clone, Serialize)]
pub struct ProjectListingView {
    #[serde(flatten)]
    pub project: ProjectView,
    pub owner: OwnerView,
}

impl From<&ProjectListing> for ProjectListingView {
    fn from(listing: &ProjectListing) -> Self {
        Self {
            project: (&listing.project).into(),
            owner: OwnerView {
                full_name: listing.owner_name.clone(),
                kind: listing.owner_kind.clone(),
            },
        }
    }
}

/// Create response payload
#[derive(Debug, Clone, Serialize)]
pub struct CreatedProjectData {
    pub project: ProjectView,
}

/// Listing response payload
#[derive(Debug, Clone, Serialize)]
pub struct ProjectsData {
    pub projects: Vec<ProjectListingView>,
}

/// Status update response payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatusData {
    pub project_id: String,
    pub completed: bool,
}
