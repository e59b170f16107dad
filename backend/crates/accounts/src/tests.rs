//! Unit tests for the accounts crate
//!
//! Use cases are exercised against in-memory repository fakes; the
//! PostgreSQL implementation sits behind the same traits.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use kernel::id::AccountId;
use platform::token::{TOKEN_TTL, TokenService};
use uuid::Uuid;

use crate::application::config::AccountsConfig;
use crate::application::{
    GetProfileUseCase, ListAgenciesUseCase, ProfileChanges, ProfileStats, SignInInput,
    SignInUseCase, SignUpInput, SignUpUseCase, ToggleActiveUseCase, UpdateProfileUseCase,
    UpdateScope,
};
use crate::domain::entity::Account;
use crate::domain::repository::{
    AccountRepository, AgencyCounts, ProjectCounts, StatsRepository,
};
use crate::domain::value_object::{AccountRole, Email};
use crate::error::{AccountError, AccountResult};

// ============================================================================
// In-memory fakes
// ============================================================================

#[derive(Clone, Default)]
struct MemoryRepository {
    accounts: Arc<Mutex<HashMap<Uuid, Account>>>,
    /// (owner, completed) pairs standing in for the projects table
    projects: Arc<Mutex<Vec<(Uuid, bool)>>>,
}

impl MemoryRepository {
    fn get(&self, account_id: &AccountId) -> Option<Account> {
        self.accounts
            .lock()
            .unwrap()
            .get(account_id.as_uuid())
            .cloned()
    }

    fn len(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }

    fn add_project(&self, owner: &AccountId, completed: bool) {
        self.projects
            .lock()
            .unwrap()
            .push((*owner.as_uuid(), completed));
    }
}

impl AccountRepository for MemoryRepository {
    async fn create(&self, account: &Account) -> AccountResult<()> {
        self.accounts
            .lock()
            .unwrap()
            .insert(*account.account_id.as_uuid(), account.clone());
        Ok(())
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AccountResult<Option<Account>> {
        Ok(self.get(account_id))
    }

    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Account>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .values()
            .find(|a| a.email == *email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .values()
            .any(|a| a.email == *email))
    }

    async fn update(&self, account: &Account) -> AccountResult<()> {
        self.accounts
            .lock()
            .unwrap()
            .insert(*account.account_id.as_uuid(), account.clone());
        Ok(())
    }

    async fn list_by_role(&self, role: AccountRole) -> AccountResult<Vec<Account>> {
        let mut accounts: Vec<Account> = self
            .accounts
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.role == role)
            .cloned()
            .collect();
        accounts.sort_by_key(|a| a.created_at);
        Ok(accounts)
    }

    async fn toggle_active(&self, account_id: &AccountId) -> AccountResult<Option<bool>> {
        let mut accounts = self.accounts.lock().unwrap();
        Ok(accounts.get_mut(account_id.as_uuid()).map(|a| {
            a.active = !a.active;
            a.active
        }))
    }
}

impl StatsRepository for MemoryRepository {
    async fn project_counts(&self, owner: Option<&AccountId>) -> AccountResult<ProjectCounts> {
        let projects = self.projects.lock().unwrap();
        let scoped: Vec<_> = projects
            .iter()
            .filter(|(o, _)| owner.is_none_or(|id| o == id.as_uuid()))
            .collect();

        Ok(ProjectCounts {
            total: scoped.len() as i64,
            completed: scoped.iter().filter(|(_, done)| *done).count() as i64,
        })
    }

    async fn agency_counts(&self) -> AccountResult<AgencyCounts> {
        let accounts = self.accounts.lock().unwrap();
        let agencies: Vec<_> = accounts
            .values()
            .filter(|a| a.role == AccountRole::Agency)
            .collect();

        Ok(AgencyCounts {
            total: agencies.len() as i64,
            active: agencies.iter().filter(|a| a.active).count() as i64,
        })
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn tokens() -> Arc<TokenService> {
    Arc::new(TokenService::new(b"unit-test-secret", TOKEN_TTL))
}

fn config() -> Arc<AccountsConfig> {
    Arc::new(AccountsConfig::default())
}

fn signup_input(email: &str, password: &str, role: &str) -> SignUpInput {
    SignUpInput {
        email: email.to_string(),
        password: password.to_string(),
        confirm_password: password.to_string(),
        role: role.to_string(),
    }
}

async fn signed_up(repo: &MemoryRepository, email: &str, password: &str, role: &str) -> AccountId {
    SignUpUseCase::new(Arc::new(repo.clone()), config())
        .execute(signup_input(email, password, role))
        .await
        .unwrap()
}

async fn login(
    repo: &MemoryRepository,
    tokens: &Arc<TokenService>,
    email: &str,
    password: &str,
) -> AccountResult<crate::application::SignInOutput> {
    SignInUseCase::new(Arc::new(repo.clone()), tokens.clone(), config())
        .execute(SignInInput {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
}

// ============================================================================
// Sign up
// ============================================================================

mod sign_up {
    use super::*;

    #[tokio::test]
    async fn rejects_password_failing_policy_and_persists_nothing() {
        let repo = MemoryRepository::default();
        let use_case = SignUpUseCase::new(Arc::new(repo.clone()), config());

        for bad in ["Ab1", "abc123", "ABC123", "Abcdef", "Abc 12"] {
            let result = use_case
                .execute(signup_input("a@x.com", bad, "agency"))
                .await;
            assert!(
                matches!(result, Err(AccountError::Validation(_))),
                "expected policy rejection for {bad:?}"
            );
        }

        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn rejects_mismatched_confirmation() {
        let repo = MemoryRepository::default();
        let use_case = SignUpUseCase::new(Arc::new(repo.clone()), config());

        let result = use_case
            .execute(SignUpInput {
                email: "a@x.com".to_string(),
                password: "Abc123".to_string(),
                confirm_password: "Abc124".to_string(),
                role: "agency".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AccountError::PasswordMismatch)));
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn rejects_unknown_role() {
        let repo = MemoryRepository::default();
        let use_case = SignUpUseCase::new(Arc::new(repo.clone()), config());

        let result = use_case
            .execute(signup_input("a@x.com", "Abc123", "superuser"))
            .await;

        assert!(matches!(result, Err(AccountError::InvalidRole)));
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn rejects_invalid_email() {
        let repo = MemoryRepository::default();
        let use_case = SignUpUseCase::new(Arc::new(repo.clone()), config());

        let result = use_case
            .execute(signup_input("not-an-email", "Abc123", "agency"))
            .await;

        assert!(matches!(result, Err(AccountError::Validation(_))));
    }

    #[tokio::test]
    async fn conflict_on_duplicate_email_leaves_existing_record_alone() {
        let repo = MemoryRepository::default();
        let account_id = signed_up(&repo, "a@x.com", "Abc123", "agency").await;
        let original = repo.get(&account_id).unwrap();

        let use_case = SignUpUseCase::new(Arc::new(repo.clone()), config());
        let result = use_case
            .execute(signup_input("a@x.com", "Xyz789", "admin"))
            .await;

        assert!(matches!(result, Err(AccountError::EmailTaken)));
        assert_eq!(repo.len(), 1);

        let unchanged = repo.get(&account_id).unwrap();
        assert_eq!(unchanged.role, original.role);
        assert_eq!(
            unchanged.password_hash.as_phc_string(),
            original.password_hash.as_phc_string()
        );
        assert_eq!(unchanged.updated_at, original.updated_at);
    }

    #[tokio::test]
    async fn creates_active_account_with_no_profile_fields() {
        let repo = MemoryRepository::default();
        let account_id = signed_up(&repo, "a@x.com", "Abc123", "agency").await;

        let account = repo.get(&account_id).unwrap();
        assert!(account.active);
        assert_eq!(account.role, AccountRole::Agency);
        assert_eq!(account.email.as_str(), "a@x.com");
        assert_eq!(account.full_name, None);
        assert_eq!(account.website, None);
    }
}

// ============================================================================
// Login
// ============================================================================

mod sign_in {
    use super::*;

    #[tokio::test]
    async fn issues_token_with_identity_claims() {
        let repo = MemoryRepository::default();
        let tokens = tokens();
        let account_id = signed_up(&repo, "a@x.com", "Abc123", "agency").await;

        let output = login(&repo, &tokens, "a@x.com", "Abc123").await.unwrap();

        let claims = tokens.verify(&output.token).unwrap();
        assert_eq!(claims.sub, account_id.to_string());
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.role, "agency");
        assert_eq!(
            claims.exp - claims.iat,
            Duration::from_secs(60 * 24 * 60 * 60).as_secs()
        );
    }

    #[tokio::test]
    async fn rejects_missing_fields() {
        let repo = MemoryRepository::default();
        let tokens = tokens();

        let result = login(&repo, &tokens, "", "Abc123").await;
        assert!(matches!(result, Err(AccountError::Validation(_))));

        let result = login(&repo, &tokens, "a@x.com", "").await;
        assert!(matches!(result, Err(AccountError::Validation(_))));
    }

    #[tokio::test]
    async fn same_error_for_unknown_email_and_wrong_password() {
        let repo = MemoryRepository::default();
        let tokens = tokens();
        signed_up(&repo, "a@x.com", "Abc123", "agency").await;

        let unknown = login(&repo, &tokens, "ghost@x.com", "Abc123")
            .await
            .unwrap_err();
        let wrong = login(&repo, &tokens, "a@x.com", "Wrong12")
            .await
            .unwrap_err();

        assert!(matches!(unknown, AccountError::InvalidCredentials));
        assert!(matches!(wrong, AccountError::InvalidCredentials));
        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[tokio::test]
    async fn rejects_inactive_account_with_forbidden() {
        let repo = MemoryRepository::default();
        let tokens = tokens();
        let account_id = signed_up(&repo, "a@x.com", "Abc123", "agency").await;

        ToggleActiveUseCase::new(Arc::new(repo.clone()))
            .execute(&account_id)
            .await
            .unwrap();

        let result = login(&repo, &tokens, "a@x.com", "Abc123").await;
        let err = result.unwrap_err();
        assert!(matches!(err, AccountError::AccountInactive));
        assert_eq!(err.status_code(), 403);
    }
}

// ============================================================================
// Profile
// ============================================================================

mod profile {
    use super::*;

    #[tokio::test]
    async fn fresh_agency_reports_zero_stats() {
        let repo = MemoryRepository::default();
        let tokens = tokens();
        signed_up(&repo, "a@x.com", "Abc123", "agency").await;

        let output = login(&repo, &tokens, "a@x.com", "Abc123").await.unwrap();

        let use_case = GetProfileUseCase::new(Arc::new(repo.clone()), tokens.clone());
        let profile = use_case.execute(Some(&output.token)).await.unwrap();

        assert_eq!(profile.account.email.as_str(), "a@x.com");
        assert!(matches!(
            profile.stats,
            ProfileStats::Agency {
                total_projects: 0,
                completed_projects: 0,
            }
        ));
    }

    #[tokio::test]
    async fn agency_stats_count_only_own_projects() {
        let repo = MemoryRepository::default();
        let tokens = tokens();
        let mine = signed_up(&repo, "a@x.com", "Abc123", "agency").await;
        let other = signed_up(&repo, "b@x.com", "Abc123", "agency").await;

        repo.add_project(&mine, false);
        repo.add_project(&mine, true);
        repo.add_project(&other, true);

        let output = login(&repo, &tokens, "a@x.com", "Abc123").await.unwrap();
        let profile = GetProfileUseCase::new(Arc::new(repo.clone()), tokens.clone())
            .execute(Some(&output.token))
            .await
            .unwrap();

        assert!(matches!(
            profile.stats,
            ProfileStats::Agency {
                total_projects: 2,
                completed_projects: 1,
            }
        ));
    }

    #[tokio::test]
    async fn admin_stats_cover_the_whole_system() {
        let repo = MemoryRepository::default();
        let tokens = tokens();
        let agency_a = signed_up(&repo, "a@x.com", "Abc123", "agency").await;
        let agency_b = signed_up(&repo, "b@x.com", "Abc123", "agency").await;
        signed_up(&repo, "admin@x.com", "Abc123", "admin").await;

        repo.add_project(&agency_a, true);
        repo.add_project(&agency_b, false);
        repo.add_project(&agency_b, false);

        ToggleActiveUseCase::new(Arc::new(repo.clone()))
            .execute(&agency_b)
            .await
            .unwrap();

        let output = login(&repo, &tokens, "admin@x.com", "Abc123")
            .await
            .unwrap();
        let profile = GetProfileUseCase::new(Arc::new(repo.clone()), tokens.clone())
            .execute(Some(&output.token))
            .await
            .unwrap();

        assert!(matches!(
            profile.stats,
            ProfileStats::Admin {
                total_projects: 3,
                completed_projects: 1,
                total_agencies: 2,
                active_agencies: 1,
            }
        ));
    }

    #[tokio::test]
    async fn missing_and_malformed_tokens_are_unauthorized() {
        let repo = MemoryRepository::default();
        let tokens = tokens();
        let use_case = GetProfileUseCase::new(Arc::new(repo.clone()), tokens.clone());

        let err = use_case.execute(None).await.unwrap_err();
        assert!(matches!(err, AccountError::MissingToken));
        assert_eq!(err.status_code(), 401);

        let err = use_case.execute(Some("garbage")).await.unwrap_err();
        assert!(matches!(err, AccountError::InvalidToken));
    }

    #[tokio::test]
    async fn token_for_vanished_account_is_not_found() {
        let repo = MemoryRepository::default();
        let tokens = tokens();

        let token = tokens
            .issue(&Uuid::new_v4().to_string(), "ghost@x.com", "agency")
            .unwrap();

        let err = GetProfileUseCase::new(Arc::new(repo.clone()), tokens.clone())
            .execute(Some(&token))
            .await
            .unwrap_err();
        assert!(matches!(err, AccountError::NotFound));
    }
}

// ============================================================================
// Profile updates
// ============================================================================

mod update_profile {
    use super::*;

    async fn populated_account(repo: &MemoryRepository) -> AccountId {
        let account_id = signed_up(repo, "a@x.com", "Abc123", "agency").await;

        UpdateProfileUseCase::new(Arc::new(repo.clone()), config())
            .execute(
                &account_id,
                UpdateScope::SelfService,
                ProfileChanges {
                    full_name: Some("Acme Agency".to_string()),
                    address: Some("1 Main St".to_string()),
                    phone_number: Some("555-0100".to_string()),
                    website: Some("https://acme.example".to_string()),
                    kind: Some("creative".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        account_id
    }

    #[tokio::test]
    async fn updates_exactly_the_supplied_field() {
        let repo = MemoryRepository::default();
        let account_id = populated_account(&repo).await;
        let before = repo.get(&account_id).unwrap();

        let after = UpdateProfileUseCase::new(Arc::new(repo.clone()), config())
            .execute(
                &account_id,
                UpdateScope::SelfService,
                ProfileChanges {
                    phone_number: Some("555-0199".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(after.phone_number.as_deref(), Some("555-0199"));
        assert_eq!(after.full_name, before.full_name);
        assert_eq!(after.email, before.email);
        assert_eq!(after.address, before.address);
        assert_eq!(after.website, before.website);
        assert_eq!(after.kind, before.kind);
        assert_eq!(
            after.password_hash.as_phc_string(),
            before.password_hash.as_phc_string()
        );
    }

    #[tokio::test]
    async fn blank_fields_are_ignored() {
        let repo = MemoryRepository::default();
        let account_id = populated_account(&repo).await;
        let before = repo.get(&account_id).unwrap();

        let after = UpdateProfileUseCase::new(Arc::new(repo.clone()), config())
            .execute(
                &account_id,
                UpdateScope::SelfService,
                ProfileChanges {
                    full_name: Some("   ".to_string()),
                    address: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(after.full_name, before.full_name);
        assert_eq!(after.address, before.address);
    }

    #[tokio::test]
    async fn password_change_enforces_policy_and_rehashes() {
        let repo = MemoryRepository::default();
        let tokens = tokens();
        let account_id = populated_account(&repo).await;
        let use_case = UpdateProfileUseCase::new(Arc::new(repo.clone()), config());

        let result = use_case
            .execute(
                &account_id,
                UpdateScope::SelfService,
                ProfileChanges {
                    password: Some("weak".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(AccountError::Validation(_))));

        use_case
            .execute(
                &account_id,
                UpdateScope::SelfService,
                ProfileChanges {
                    password: Some("NewPass9".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(login(&repo, &tokens, "a@x.com", "Abc123").await.is_err());
        assert!(login(&repo, &tokens, "a@x.com", "NewPass9").await.is_ok());
    }

    #[tokio::test]
    async fn admin_scope_ignores_password_and_website() {
        let repo = MemoryRepository::default();
        let tokens = tokens();
        let account_id = populated_account(&repo).await;
        let before = repo.get(&account_id).unwrap();

        let after = UpdateProfileUseCase::new(Arc::new(repo.clone()), config())
            .execute(
                &account_id,
                UpdateScope::Admin,
                ProfileChanges {
                    full_name: Some("Renamed".to_string()),
                    website: Some("https://elsewhere.example".to_string()),
                    password: Some("Hijack1".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(after.full_name.as_deref(), Some("Renamed"));
        assert_eq!(after.website, before.website);
        assert_eq!(
            after.password_hash.as_phc_string(),
            before.password_hash.as_phc_string()
        );
        assert!(login(&repo, &tokens, "a@x.com", "Abc123").await.is_ok());
    }

    #[tokio::test]
    async fn email_change_is_validated_and_normalized() {
        let repo = MemoryRepository::default();
        let account_id = populated_account(&repo).await;
        let use_case = UpdateProfileUseCase::new(Arc::new(repo.clone()), config());

        let result = use_case
            .execute(
                &account_id,
                UpdateScope::SelfService,
                ProfileChanges {
                    email: Some("broken@".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(AccountError::Validation(_))));

        let after = use_case
            .execute(
                &account_id,
                UpdateScope::SelfService,
                ProfileChanges {
                    email: Some("New@X.COM".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(after.email.as_str(), "new@x.com");
    }

    #[tokio::test]
    async fn unknown_account_is_not_found() {
        let repo = MemoryRepository::default();
        let use_case = UpdateProfileUseCase::new(Arc::new(repo.clone()), config());

        let result = use_case
            .execute(
                &AccountId::new(),
                UpdateScope::SelfService,
                ProfileChanges::default(),
            )
            .await;

        assert!(matches!(result, Err(AccountError::NotFound)));
    }
}

// ============================================================================
// Admin flow
// ============================================================================

mod admin {
    use super::*;

    #[tokio::test]
    async fn list_agencies_excludes_admins() {
        let repo = MemoryRepository::default();
        signed_up(&repo, "a@x.com", "Abc123", "agency").await;
        signed_up(&repo, "b@x.com", "Abc123", "agency").await;
        signed_up(&repo, "admin@x.com", "Abc123", "admin").await;

        let agencies = ListAgenciesUseCase::new(Arc::new(repo.clone()))
            .execute()
            .await
            .unwrap();

        assert_eq!(agencies.len(), 2);
        assert!(agencies.iter().all(|a| a.role == AccountRole::Agency));
    }

    #[tokio::test]
    async fn toggle_active_flips_both_ways() {
        let repo = MemoryRepository::default();
        let account_id = signed_up(&repo, "a@x.com", "Abc123", "agency").await;
        let use_case = ToggleActiveUseCase::new(Arc::new(repo.clone()));

        assert!(!use_case.execute(&account_id).await.unwrap());
        assert!(!repo.get(&account_id).unwrap().active);

        assert!(use_case.execute(&account_id).await.unwrap());
        assert!(repo.get(&account_id).unwrap().active);
    }

    #[tokio::test]
    async fn toggle_unknown_account_is_not_found() {
        let repo = MemoryRepository::default();
        let use_case = ToggleActiveUseCase::new(Arc::new(repo.clone()));

        let result = use_case.execute(&AccountId::new()).await;
        assert!(matches!(result, Err(AccountError::NotFound)));
    }
}
