//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the
//! infrastructure layer; tests provide in-memory fakes.

use kernel::id::AccountId;

use crate::domain::entity::Account;
use crate::domain::value_object::{AccountRole, Email};
use crate::error::AccountResult;

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Persist a new account
    async fn create(&self, account: &Account) -> AccountResult<()>;

    /// Find account by ID
    async fn find_by_id(&self, account_id: &AccountId) -> AccountResult<Option<Account>>;

    /// Find account by (normalized) email
    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Account>>;

    /// Check whether an email is already registered
    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool>;

    /// Persist a mutated account
    async fn update(&self, account: &Account) -> AccountResult<()>;

    /// All accounts with the given role
    async fn list_by_role(&self, role: AccountRole) -> AccountResult<Vec<Account>>;

    /// Atomically flip the active flag, returning the new value.
    /// `None` if the account does not exist.
    async fn toggle_active(&self, account_id: &AccountId) -> AccountResult<Option<bool>>;
}

/// Project totals visible in a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectCounts {
    pub total: i64,
    pub completed: i64,
}

/// Agency-account totals visible in an admin profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgencyCounts {
    pub total: i64,
    pub active: i64,
}

/// Aggregate queries behind the profile statistics. Computed fresh on
/// every call; nothing is cached.
#[trait_variant::make(StatsRepository: Send)]
pub trait LocalStatsRepository {
    /// Project totals, optionally scoped to one owning account
    async fn project_counts(&self, owner: Option<&AccountId>) -> AccountResult<ProjectCounts>;

    /// Totals over agency accounts
    async fn agency_counts(&self) -> AccountResult<AgencyCounts>;
}
