//! Sign Up Use Case
//!
//! Creates a new account. No token is issued; the caller logs in
//! separately.

use std::sync::Arc;

use kernel::id::AccountId;
use platform::password::ClearTextPassword;

use crate::application::config::AccountsConfig;
use crate::domain::entity::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{AccountRole, Email};
use crate::error::{AccountError, AccountResult};

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AccountsConfig>,
}

impl<R> SignUpUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AccountsConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AccountResult<AccountId> {
        // Confirmation compares the raw input, before normalization.
        if input.password != input.confirm_password {
            return Err(AccountError::PasswordMismatch);
        }

        let password = ClearTextPassword::new(input.password)?;

        let role =
            AccountRole::from_code(input.role.trim()).ok_or(AccountError::InvalidRole)?;

        let email = Email::new(&input.email)?;

        if self.repo.exists_by_email(&email).await? {
            return Err(AccountError::EmailTaken);
        }

        let password_hash = password
            .hash(self.config.pepper())
            .map_err(|e| AccountError::Internal(e.to_string()))?;

        let account = Account::new(email, password_hash, role);
        self.repo.create(&account).await?;

        tracing::info!(
            account_id = %account.account_id,
            role = %account.role,
            "Account created"
        );

        Ok(account.account_id)
    }
}
