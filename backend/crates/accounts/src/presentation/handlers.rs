//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use kernel::envelope::Envelope;
use kernel::id::AccountId;
use platform::token::{Claims, TokenService, extract_bearer};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::config::AccountsConfig;
use crate::application::{
    GetProfileUseCase, ListAgenciesUseCase, ProfileChanges, SignInInput, SignInUseCase,
    SignUpInput, SignUpUseCase, ToggleActiveUseCase, UpdateProfileUseCase, UpdateScope,
};
use crate::domain::repository::{AccountRepository, StatsRepository};
use crate::error::{AccountError, AccountResult};
use crate::presentation::dto::{
    AgenciesData, LoginData, LoginRequest, ProfileData, SignUpRequest, ToggleActiveData,
    UpdatedProfileData, UpdateProfileRequest,
};

/// Shared state for account handlers
#[derive(Clone)]
pub struct AccountAppState<R>
where
    R: AccountRepository + StatsRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
    pub config: Arc<AccountsConfig>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/v1/signup
pub async fn sign_up<R>(
    State(state): State<AccountAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AccountResult<impl IntoResponse>
where
    R: AccountRepository + StatsRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        email: req.email,
        password: req.password,
        confirm_password: req.confirm_password,
        role: req.role,
    };

    use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::message("Signup successful")),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/v1/login
pub async fn login<R>(
    State(state): State<AccountAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AccountResult<Json<Envelope<LoginData>>>
where
    R: AccountRepository + StatsRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(Envelope::data(LoginData {
        token: output.token,
        account: (&output.account).into(),
    })))
}

// ============================================================================
// Own Profile
// ============================================================================

/// GET /api/v1/authorization
pub async fn authorization<R>(
    State(state): State<AccountAppState<R>>,
    headers: HeaderMap,
) -> AccountResult<Json<Envelope<ProfileData>>>
where
    R: AccountRepository + StatsRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetProfileUseCase::new(state.repo.clone(), state.tokens.clone());

    let output = use_case.execute(extract_bearer(&headers)).await?;

    Ok(Json(Envelope::data(ProfileData {
        account: (&output.account).into(),
        stats: output.stats,
    })))
}

// ============================================================================
// Profile Updates
// ============================================================================

/// PATCH /api/v1/updateProfile/{accountId}
pub async fn update_profile<R>(
    State(state): State<AccountAppState<R>>,
    Path(account_id): Path<Uuid>,
    headers: HeaderMap,
    Json(req): Json<UpdateProfileRequest>,
) -> AccountResult<Json<Envelope<UpdatedProfileData>>>
where
    R: AccountRepository + StatsRepository + Clone + Send + Sync + 'static,
{
    let claims = authenticate(&state.tokens, &headers)?;
    if claims.sub != account_id.to_string() {
        return Err(AccountError::SelfOnly);
    }

    apply_update(&state, account_id, UpdateScope::SelfService, req).await
}

/// PATCH /api/v1/updateProfileByAdmin/{accountId}
pub async fn update_profile_by_admin<R>(
    State(state): State<AccountAppState<R>>,
    Path(account_id): Path<Uuid>,
    headers: HeaderMap,
    Json(req): Json<UpdateProfileRequest>,
) -> AccountResult<Json<Envelope<UpdatedProfileData>>>
where
    R: AccountRepository + StatsRepository + Clone + Send + Sync + 'static,
{
    require_admin(&state.tokens, &headers)?;

    apply_update(&state, account_id, UpdateScope::Admin, req).await
}

async fn apply_update<R>(
    state: &AccountAppState<R>,
    account_id: Uuid,
    scope: UpdateScope,
    req: UpdateProfileRequest,
) -> AccountResult<Json<Envelope<UpdatedProfileData>>>
where
    R: AccountRepository + StatsRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateProfileUseCase::new(state.repo.clone(), state.config.clone());

    let changes = ProfileChanges {
        full_name: req.full_name,
        email: req.email,
        address: req.address,
        phone_number: req.phone_number,
        website: req.website,
        kind: req.kind,
        password: req.password,
    };

    let account = use_case
        .execute(&AccountId::from_uuid(account_id), scope, changes)
        .await?;

    Ok(Json(
        Envelope::data(UpdatedProfileData {
            account: (&account).into(),
        })
        .with_message("Profile updated successfully"),
    ))
}

// ============================================================================
// Admin
// ============================================================================

/// GET /api/v1/getAllAgencies
pub async fn get_all_agencies<R>(
    State(state): State<AccountAppState<R>>,
    headers: HeaderMap,
) -> AccountResult<Json<Envelope<AgenciesData>>>
where
    R: AccountRepository + StatsRepository + Clone + Send + Sync + 'static,
{
    require_admin(&state.tokens, &headers)?;

    let use_case = ListAgenciesUseCase::new(state.repo.clone());
    let agencies = use_case.execute().await?;

    Ok(Json(Envelope::data(AgenciesData {
        agencies: agencies.iter().map(Into::into).collect(),
    })))
}

/// PATCH /api/v1/toggleActive/{accountId}
pub async fn toggle_active<R>(
    State(state): State<AccountAppState<R>>,
    Path(account_id): Path<Uuid>,
    headers: HeaderMap,
) -> AccountResult<Json<Envelope<ToggleActiveData>>>
where
    R: AccountRepository + StatsRepository + Clone + Send + Sync + 'static,
{
    require_admin(&state.tokens, &headers)?;

    let use_case = ToggleActiveUseCase::new(state.repo.clone());
    let active = use_case.execute(&AccountId::from_uuid(account_id)).await?;

    let message = if active {
        "Account is now active."
    } else {
        "Account is now inactive."
    };

    Ok(Json(
        Envelope::data(ToggleActiveData {
            account_id: account_id.to_string(),
            active,
        })
        .with_message(message),
    ))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn authenticate(tokens: &TokenService, headers: &HeaderMap) -> AccountResult<Claims> {
    let token = extract_bearer(headers).ok_or(AccountError::MissingToken)?;
    Ok(tokens.verify(token)?)
}

fn require_admin(tokens: &TokenService, headers: &HeaderMap) -> AccountResult<Claims> {
    let claims = authenticate(tokens, headers)?;
    if claims.role != "admin" {
        return Err(AccountError::AdminOnly);
    }
    Ok(claims)
}
