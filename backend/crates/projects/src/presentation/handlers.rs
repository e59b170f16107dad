//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use kernel::envelope::Envelope;
use kernel::id::{AccountId, ProjectId};
use platform::token::{TokenService, extract_bearer};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{
    CreateProjectInput, CreateProjectUseCase, DeleteProjectUseCase, ListProjectsUseCase,
    SetProjectStatusUseCase,
};
use crate::domain::repository::{OwnerDirectory, ProjectRepository};
use crate::error::{ProjectError, ProjectResult};
use crate::presentation::dto::{
    CreateProjectRequest, CreatedProjectData, ProjectStatusData, ProjectsData, SetStatusRequest,
};

/// Shared state for project handlers
#[derive(Clone)]
pub struct ProjectAppState<R>
where
    R: ProjectRepository + OwnerDirectory + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
}

// ============================================================================
// Create
// ============================================================================

/// POST /api/v1/createProject
pub async fn create_project<R>(
    State(state): State<ProjectAppState<R>>,
    headers: HeaderMap,
    Json(req): Json<CreateProjectRequest>,
) -> ProjectResult<impl IntoResponse>
where
    R: ProjectRepository + OwnerDirectory + Clone + Send + Sync + 'static,
{
    require_agency(&state.tokens, &headers)?;

    let use_case = CreateProjectUseCase::new(state.repo.clone());

    let input = CreateProjectInput {
        name: req.project_name,
        agency_id: req.agency.map(AccountId::from_uuid),
    };

    let project = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(
            Envelope::data(CreatedProjectData {
                project: (&project).into(),
            })
            .with_message("Project created successfully"),
        ),
    ))
}

// ============================================================================
// List
// ============================================================================

/// GET /api/v1/getAllProjects
pub async fn list_projects<R>(
    State(state): State<ProjectAppState<R>>,
) -> ProjectResult<Json<Envelope<ProjectsData>>>
where
    R: ProjectRepository + OwnerDirectory + Clone + Send + Sync + 'static,
{
    list(&state, None).await
}

/// GET /api/v1/getAllProjects/{accountId}
pub async fn list_projects_for_account<R>(
    State(state): State<ProjectAppState<R>>,
    Path(account_id): Path<Uuid>,
) -> ProjectResult<Json<Envelope<ProjectsData>>>
where
    R: ProjectRepository + OwnerDirectory + Clone + Send + Sync + 'static,
{
    list(&state, Some(AccountId::from_uuid(account_id))).await
}

async fn list<R>(
    state: &ProjectAppState<R>,
    owner: Option<AccountId>,
) -> ProjectResult<Json<Envelope<ProjectsData>>>
where
    R: ProjectRepository + OwnerDirectory + Clone + Send + Sync + 'static,
{
    let use_case = ListProjectsUseCase::new(state.repo.clone());
    let listings = use_case.execute(owner.as_ref()).await?;

    Ok(Json(Envelope::data(ProjectsData {
        projects: listings.iter().map(Into::into).collect(),
    })))
}

// ============================================================================
// Status
// ============================================================================

/// PUT /api/v1/toggleProjectStatus/{projectId}
pub async fn set_project_status<R>(
    State(state): State<ProjectAppState<R>>,
    Path(project_id): Path<Uuid>,
    Json(req): Json<SetStatusRequest>,
) -> ProjectResult<Json<Envelope<ProjectStatusData>>>
where
    R: ProjectRepository + OwnerDirectory + Clone + Send + Sync + 'static,
{
    let use_case = SetProjectStatusUseCase::new(state.repo.clone());
    let completed = use_case
        .execute(&ProjectId::from_uuid(project_id), req.completed)
        .await?;

    Ok(Json(
        Envelope::data(ProjectStatusData {
            project_id: project_id.to_string(),
            completed,
        })
        .with_message("Project status updated successfully"),
    ))
}

// ============================================================================
// Delete
// ============================================================================

/// DELETE /api/v1/deleteProject/{projectId}
pub async fn delete_project<R>(
    State(state): State<ProjectAppState<R>>,
    Path(project_id): Path<Uuid>,
) -> ProjectResult<StatusCode>
where
    R: ProjectRepository + OwnerDirectory + Clone + Send + Sync + 'static,
{
    let use_case = DeleteProjectUseCase::new(state.repo.clone());
    use_case.execute(&ProjectId::from_uuid(project_id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Helper Functions
// ============================================================================

fn require_agency(tokens: &TokenService, headers: &HeaderMap) -> ProjectResult<()> {
    let token = extract_bearer(headers).ok_or(ProjectError::MissingToken)?;
    let claims = tokens.verify(token)?;
    if claims.role != "agency" {
        return Err(ProjectError::AgencyOnly);
    }
    Ok(())
}
