//! Update Profile Use Case
//!
//! Partial (PATCH) update of an account. Only fields that arrive present
//! and non-blank after trimming overwrite the stored value; everything
//! else is left untouched. Two scopes exist: the self-service variant may
//! also change website and password, the admin-issued variant may not.

use std::sync::Arc;

use kernel::id::AccountId;
use platform::password::ClearTextPassword;

use crate::application::config::AccountsConfig;
use crate::domain::entity::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::Email;
use crate::error::{AccountError, AccountResult};

/// Requested field changes. `None` means "leave alone"; blank strings are
/// treated the same way after trimming.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub website: Option<String>,
    pub kind: Option<String>,
    pub password: Option<String>,
}

/// Which field set the caller may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateScope {
    /// Agency updating itself: all profile fields plus password
    SelfService,
    /// Admin-issued update: no website, no password
    Admin,
}

impl UpdateScope {
    const fn allows_website(&self) -> bool {
        matches!(self, Self::SelfService)
    }

    const fn allows_password(&self) -> bool {
        matches!(self, Self::SelfService)
    }
}

/// Update profile use case
pub struct UpdateProfileUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AccountsConfig>,
}

impl<R> UpdateProfileUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AccountsConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        account_id: &AccountId,
        scope: UpdateScope,
        changes: ProfileChanges,
    ) -> AccountResult<Account> {
        let mut account = self
            .repo
            .find_by_id(account_id)
            .await?
            .ok_or(AccountError::NotFound)?;

        overwrite(&mut account.full_name, changes.full_name);
        overwrite(&mut account.address, changes.address);
        overwrite(&mut account.phone_number, changes.phone_number);
        overwrite(&mut account.kind, changes.kind);

        if let Some(email) = non_blank(changes.email) {
            // Uniqueness is enforced by the store's constraint; a clash
            // surfaces as a conflict through the error classifier.
            account.email = Email::new(email)?;
        }

        if scope.allows_website() {
            overwrite(&mut account.website, changes.website);
        }

        if scope.allows_password() {
            if let Some(password) = non_blank(changes.password) {
                let clear = ClearTextPassword::new(password)?;
                let hash = clear
                    .hash(self.config.pepper())
                    .map_err(|e| AccountError::Internal(e.to_string()))?;
                account.set_password(hash);
            }
        }

        account.touch();
        self.repo.update(&account).await?;

        tracing::info!(
            account_id = %account.account_id,
            scope = ?scope,
            "Profile updated"
        );

        Ok(account)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

fn overwrite(slot: &mut Option<String>, value: Option<String>) {
    if let Some(v) = non_blank(value) {
        *slot = Some(v);
    }
}
