//! Role-Scoped Profile Statistics
//!
//! Each role has its own aggregate set, resolved by its own strategy
//! function. Adding a role means adding a variant and an arm in
//! [`ProfileStats::collect`]; the handlers never branch on role
//! themselves.

use kernel::id::AccountId;
use serde::Serialize;

use crate::domain::repository::StatsRepository;
use crate::domain::value_object::AccountRole;
use crate::error::AccountResult;

/// Aggregates attached to a profile response, keyed by the account's role.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ProfileStats {
    /// Agency view: the account's own projects.
    #[serde(rename_all = "camelCase")]
    Agency {
        total_projects: i64,
        completed_projects: i64,
    },
    /// Admin view: system-wide totals.
    #[serde(rename_all = "camelCase")]
    Admin {
        total_projects: i64,
        completed_projects: i64,
        total_agencies: i64,
        active_agencies: i64,
    },
}

impl ProfileStats {
    /// Dispatch to the role's strategy. Aggregates are computed fresh on
    /// every call.
    pub async fn collect<S>(
        role: AccountRole,
        account_id: &AccountId,
        stats: &S,
    ) -> AccountResult<Self>
    where
        S: StatsRepository + Sync,
    {
        match role {
            AccountRole::Agency => Self::for_agency(account_id, stats).await,
            AccountRole::Admin => Self::for_admin(stats).await,
        }
    }

    async fn for_agency<S>(account_id: &AccountId, stats: &S) -> AccountResult<Self>
    where
        S: StatsRepository + Sync,
    {
        let projects = stats.project_counts(Some(account_id)).await?;

        Ok(Self::Agency {
            total_projects: projects.total,
            completed_projects: projects.completed,
        })
    }

    async fn for_admin<S>(stats: &S) -> AccountResult<Self>
    where
        S: StatsRepository + Sync,
    {
        let projects = stats.project_counts(None).await?;
        let agencies = stats.agency_counts().await?;

        Ok(Self::Admin {
            total_projects: projects.total,
            completed_projects: projects.completed,
            total_agencies: agencies.total,
            active_agencies: agencies.active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agency_stats_wire_keys() {
        let stats = ProfileStats::Agency {
            total_projects: 3,
            completed_projects: 1,
        };
        let body = serde_json::to_value(&stats).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"totalProjects": 3, "completedProjects": 1})
        );
    }

    #[test]
    fn test_admin_stats_wire_keys() {
        let stats = ProfileStats::Admin {
            total_projects: 10,
            completed_projects: 4,
            total_agencies: 5,
            active_agencies: 2,
        };
        let body = serde_json::to_value(&stats).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "totalProjects": 10,
                "completedProjects": 4,
                "totalAgencies": 5,
                "activeAgencies": 2
            })
        );
    }
}
