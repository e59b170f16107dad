//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::AccountId;
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::Account;
use crate::domain::repository::{
    AccountRepository, AgencyCounts, ProjectCounts, StatsRepository,
};
use crate::domain::value_object::{AccountRole, Email};
use crate::error::{AccountError, AccountResult};

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AccountRepository for PgAccountRepository {
    async fn create(&self, account: &Account) -> AccountResult<()> {
        sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id,
                full_name,
                email,
                password_hash,
                address,
                phone_number,
                website,
                account_type,
                role,
                active,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(&account.full_name)
        .bind(account.email.as_str())
        .bind(account.password_hash.as_phc_string())
        .bind(&account.address)
        .bind(&account.phone_number)
        .bind(&account.website)
        .bind(&account.kind)
        .bind(account.role.code())
        .bind(account.active)
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AccountResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                full_name,
                email,
                password_hash,
                address,
                phone_number,
                website,
                account_type,
                role,
                active,
                created_at,
                updated_at
            FROM accounts
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                full_name,
                email,
                password_hash,
                address,
                phone_number,
                website,
                account_type,
                role,
                active,
                created_at,
                updated_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE email = $1)",
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update(&self, account: &Account) -> AccountResult<()> {
        sqlx::query(
            r#"
            UPDATE accounts SET
                full_name = $2,
                email = $3,
                password_hash = $4,
                address = $5,
                phone_number = $6,
                website = $7,
                account_type = $8,
                active = $9,
                updated_at = $10
            WHERE account_id = $1
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(&account.full_name)
        .bind(account.email.as_str())
        .bind(account.password_hash.as_phc_string())
        .bind(&account.address)
        .bind(&account.phone_number)
        .bind(&account.website)
        .bind(&account.kind)
        .bind(account.active)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_by_role(&self, role: AccountRole) -> AccountResult<Vec<Account>> {
        let rows = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                full_name,
                email,
                password_hash,
                address,
                phone_number,
                website,
                account_type,
                role,
                active,
                created_at,
                updated_at
            FROM accounts
            WHERE role = $1
            ORDER BY created_at
            "#,
        )
        .bind(role.code())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_account()).collect()
    }

    async fn toggle_active(&self, account_id: &AccountId) -> AccountResult<Option<bool>> {
        // Single statement: no read-modify-write window between concurrent
        // toggles.
        let active = sqlx::query_scalar::<_, bool>(
            r#"
            UPDATE accounts
            SET active = NOT active, updated_at = $2
            WHERE account_id = $1
            RETURNING active
            "#,
        )
        .bind(account_id.as_uuid())
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(active)
    }
}

impl StatsRepository for PgAccountRepository {
    async fn project_counts(&self, owner: Option<&AccountId>) -> AccountResult<ProjectCounts> {
        let (total, completed) = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT COUNT(*), COUNT(*) FILTER (WHERE completed)
            FROM projects
            WHERE ($1::uuid IS NULL OR agency_id = $1)
            "#,
        )
        .bind(owner.map(|id| *id.as_uuid()))
        .fetch_one(&self.pool)
        .await?;

        Ok(ProjectCounts { total, completed })
    }

    async fn agency_counts(&self) -> AccountResult<AgencyCounts> {
        let (total, active) = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT COUNT(*), COUNT(*) FILTER (WHERE active)
            FROM accounts
            WHERE role = 'agency'
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(AgencyCounts { total, active })
    }
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    full_name: Option<String>,
    email: String,
    password_hash: String,
    address: Option<String>,
    phone_number: Option<String>,
    website: Option<String>,
    account_type: Option<String>,
    role: String,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> AccountResult<Account> {
        let role = AccountRole::from_code(&self.role)
            .ok_or_else(|| AccountError::Internal(format!("Invalid role in store: {}", self.role)))?;

        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| AccountError::Internal(format!("Invalid password hash in store: {}", e)))?;

        Ok(Account {
            account_id: AccountId::from_uuid(self.account_id),
            full_name: self.full_name,
            email: Email::from_db(self.email),
            password_hash,
            address: self.address,
            phone_number: self.phone_number,
            website: self.website,
            kind: self.account_type,
            role,
            active: self.active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
