//! Get Own Profile Use Case
//!
//! Resolves the bearer token to an account and augments it with
//! role-scoped statistics.

use std::sync::Arc;

use kernel::id::AccountId;
use platform::token::TokenService;
use uuid::Uuid;

use crate::application::stats::ProfileStats;
use crate::domain::entity::Account;
use crate::domain::repository::{AccountRepository, StatsRepository};
use crate::error::{AccountError, AccountResult};

/// Profile output: the account plus its role's aggregates.
#[derive(Debug)]
pub struct ProfileOutput {
    pub account: Account,
    pub stats: ProfileStats,
}

/// Get profile use case
pub struct GetProfileUseCase<R>
where
    R: AccountRepository + StatsRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> GetProfileUseCase<R>
where
    R: AccountRepository + StatsRepository + Sync,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, bearer: Option<&str>) -> AccountResult<ProfileOutput> {
        let token = bearer.ok_or(AccountError::MissingToken)?;
        let claims = self.tokens.verify(token)?;

        // A token we signed always carries a UUID subject; anything else
        // means the token is not ours.
        let account_id = Uuid::parse_str(&claims.sub)
            .map(AccountId::from_uuid)
            .map_err(|_| AccountError::InvalidToken)?;

        let account = self
            .repo
            .find_by_id(&account_id)
            .await?
            .ok_or(AccountError::NotFound)?;

        let stats =
            ProfileStats::collect(account.role, &account.account_id, self.repo.as_ref()).await?;

        Ok(ProfileOutput { account, stats })
    }
}
