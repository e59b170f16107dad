//! Projects Router

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use platform::token::TokenService;
use std::sync::Arc;

use crate::domain::repository::{OwnerDirectory, ProjectRepository};
use crate::infra::postgres::PgProjectRepository;
use crate::presentation::handlers::{self, ProjectAppState};

/// Create the projects router with the PostgreSQL repository
pub fn projects_router(repo: PgProjectRepository, tokens: Arc<TokenService>) -> Router {
    projects_router_generic(repo, tokens)
}

/// Create a generic projects router for any repository implementation
pub fn projects_router_generic<R>(repo: R, tokens: Arc<TokenService>) -> Router
where
    R: ProjectRepository + OwnerDirectory + Clone + Send + Sync + 'static,
{
    let state = ProjectAppState {
        repo: Arc::new(repo),
        tokens,
    };

    Router::new()
        .route("/createProject", post(handlers::create_project::<R>))
        .route("/getAllProjects", get(handlers::list_projects::<R>))
        .route(
            "/getAllProjects/{accountId}",
            get(handlers::list_projects_for_account::<R>),
        )
        .route(
            "/toggleProjectStatus/{projectId}",
            put(handlers::set_project_status::<R>),
        )
        .route(
            "/deleteProject/{projectId}",
            delete(handlers::delete_project::<R>),
        )
        .with_state(state)
}
