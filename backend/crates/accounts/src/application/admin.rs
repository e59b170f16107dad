//! Admin Use Cases
//!
//! Listing agency accounts and toggling activation.

use std::sync::Arc;

use kernel::id::AccountId;

use crate::domain::entity::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::AccountRole;
use crate::error::{AccountError, AccountResult};

/// List all agency accounts.
pub struct ListAgenciesUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
}

impl<R> ListAgenciesUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> AccountResult<Vec<Account>> {
        self.repo.list_by_role(AccountRole::Agency).await
    }
}

/// Flip an account's active flag.
///
/// The flip happens in a single statement in the store, so two concurrent
/// toggles serialize instead of cancelling each other out.
pub struct ToggleActiveUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
}

impl<R> ToggleActiveUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns the new value of the flag.
    pub async fn execute(&self, account_id: &AccountId) -> AccountResult<bool> {
        let active = self
            .repo
            .toggle_active(account_id)
            .await?
            .ok_or(AccountError::NotFound)?;

        tracing::info!(
            account_id = %account_id,
            active,
            "Account activation toggled"
        );

        Ok(active)
    }
}
