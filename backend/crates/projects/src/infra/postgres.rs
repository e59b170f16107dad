//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{AccountId, ProjectId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::project::{Project, ProjectListing};
use crate::domain::repository::{OwnerDirectory, ProjectRepository};
use crate::error::ProjectResult;

/// PostgreSQL-backed project repository
#[derive(Clone)]
pub struct PgProjectRepository {
    pool: PgPool,
}

impl PgProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProjectRepository for PgProjectRepository {
    async fn create(&self, project: &Project) -> ProjectResult<()> {
        sqlx::query(
            r#"
            INSERT INTO projects (
                project_id,
                project_name,
                completed,
                agency_id,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(project.project_id.as_uuid())
        .bind(&project.name)
        .bind(project.completed)
        .bind(project.agency_id.as_uuid())
        .bind(project.created_at)
        .bind(project.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self, owner: Option<&AccountId>) -> ProjectResult<Vec<ProjectListing>> {
        let rows = sqlx::query_as::<_, ProjectListingRow>(
            r#"
            SELECT
                p.project_id,
                p.project_name,
                p.completed,
                p.agency_id,
                p.created_at,
                p.updated_at,
                a.full_name AS owner_name,
                a.account_type AS owner_kind
            FROM projects p
            JOIN accounts a ON a.account_id = p.agency_id
            WHERE ($1::uuid IS NULL OR p.agency_id = $1)
            ORDER BY p.created_at
            "#,
        )
        .bind(owner.map(|id| *id.as_uuid()))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_listing()).collect())
    }

    async fn set_completed(
        &self,
        project_id: &ProjectId,
        completed: bool,
    ) -> ProjectResult<Option<bool>> {
        let completed = sqlx::query_scalar::<_, bool>(
            r#"
            UPDATE projects
            SET completed = $2, updated_at = $3
            WHERE project_id = $1
            RETURNING completed
            "#,
        )
        .bind(project_id.as_uuid())
        .bind(completed)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(completed)
    }

    async fn delete(&self, project_id: &ProjectId) -> ProjectResult<bool> {
        let deleted = sqlx::query("DELETE FROM projects WHERE project_id = $1")
            .bind(project_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

impl OwnerDirectory for PgProjectRepository {
    async fn owner_role(&self, account_id: &AccountId) -> ProjectResult<Option<String>> {
        let role = sqlx::query_scalar::<_, String>(
            "SELECT role FROM accounts WHERE account_id = $1",
        )
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(role)
    }
}

#[derive(sqlx::FromRow)]
struct ProjectListingRow {
    project_id: Uuid,
    project_name: String,
    completed: bool,
    agency_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    owner_name: Option<String>,
    owner_kind: Option<String>,
}

impl ProjectListingRow {
    fn into_listing(self) -> ProjectListing {
        ProjectListing {
            project: Project {
                project_id: ProjectId::from_uuid(self.project_id),
                name: self.project_name,
                completed: self.completed,
                agency_id: AccountId::from_uuid(self.agency_id),
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            owner_name: self.owner_name,
            owner_kind: self.owner_kind,
        }
    }
}
