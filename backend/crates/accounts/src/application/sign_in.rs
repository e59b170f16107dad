//! Sign In Use Case
//!
//! Authenticates by email and password and issues a bearer token.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use platform::token::TokenService;

use crate::application::config::AccountsConfig;
use crate::domain::entity::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::Email;
use crate::error::{AccountError, AccountResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Signed bearer token, 60-day expiry
    pub token: String,
    /// The authenticated account, for the non-sensitive response subset
    pub account: Account,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
    config: Arc<AccountsConfig>,
}

impl<R> SignInUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>, config: Arc<AccountsConfig>) -> Self {
        Self {
            repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AccountResult<SignInOutput> {
        if input.email.trim().is_empty() || input.password.is_empty() {
            return Err(AccountError::Validation(
                "Please provide email and password".into(),
            ));
        }

        // A malformed email cannot belong to any account; fold it into the
        // generic credentials failure rather than describing what is wrong.
        let email =
            Email::new(&input.email).map_err(|_| AccountError::InvalidCredentials)?;

        let account = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        let password = ClearTextPassword::new(input.password)
            .map_err(|_| AccountError::InvalidCredentials)?;

        if !account
            .password_hash
            .verify(&password, self.config.pepper())
        {
            return Err(AccountError::InvalidCredentials);
        }

        if !account.can_login() {
            return Err(AccountError::AccountInactive);
        }

        let token = self.tokens.issue(
            &account.account_id.to_string(),
            account.email.as_str(),
            account.role.code(),
        )?;

        tracing::info!(
            account_id = %account.account_id,
            role = %account.role,
            "Account signed in"
        );

        Ok(SignInOutput { token, account })
    }
}
