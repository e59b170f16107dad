//! Accounts Router

use axum::{
    Router,
    routing::{get, patch, post},
};
use platform::token::TokenService;
use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::domain::repository::{AccountRepository, StatsRepository};
use crate::infra::postgres::PgAccountRepository;
use crate::presentation::handlers::{self, AccountAppState};

/// Create the accounts router with the PostgreSQL repository
pub fn accounts_router(
    repo: PgAccountRepository,
    tokens: Arc<TokenService>,
    config: AccountsConfig,
) -> Router {
    accounts_router_generic(repo, tokens, config)
}

/// Create a generic accounts router for any repository implementation
pub fn accounts_router_generic<R>(
    repo: R,
    tokens: Arc<TokenService>,
    config: AccountsConfig,
) -> Router
where
    R: AccountRepository + StatsRepository + Clone + Send + Sync + 'static,
{
    let state = AccountAppState {
        repo: Arc::new(repo),
        tokens,
        config: Arc::new(config),
    };

    Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/authorization", get(handlers::authorization::<R>))
        .route(
            "/updateProfile/{accountId}",
            patch(handlers::update_profile::<R>),
        )
        .route(
            "/updateProfileByAdmin/{accountId}",
            patch(handlers::update_profile_by_admin::<R>),
        )
        .route(
            "/toggleActive/{accountId}",
            patch(handlers::toggle_active::<R>),
        )
        .route("/getAllAgencies", get(handlers::get_all_agencies::<R>))
        .with_state(state)
}
