//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use commune_core::error::DomainError;
use commune_core::traits::{MemberRepository, RepoResult};
use commune_core::value_objects::Snowflake;

use super::error::{map_db_error, map_unique_violation, member_not_found};

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn is_member(&self, server_id: Snowflake, user_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM server_members WHERE server_id = $1 AND user_id = $2)
            ",
        )
        .bind(server_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn member_ids(&self, server_id: Snowflake) -> RepoResult<Vec<Snowflake>> {
        let ids = sqlx::query_scalar::<_, i64>(
            r"
            SELECT user_id FROM server_members WHERE server_id = $1 ORDER BY user_id
            ",
        )
        .bind(server_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ids.into_iter().map(Snowflake::new).collect())
    }

    #[instrument(skip(self))]
    async fn member_ids_for_servers(
        &self,
        server_ids: &[Snowflake],
    ) -> RepoResult<Vec<(Snowflake, Snowflake)>> {
        if server_ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw_ids: Vec<i64> = server_ids.iter().map(|id| id.into_inner()).collect();

        let rows = sqlx::query_as::<_, (i64, i64)>(
            r"
            SELECT server_id, user_id
            FROM server_members
            WHERE server_id = ANY($1)
            ORDER BY server_id, user_id
            ",
        )
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|(server_id, user_id)| (Snowflake::new(server_id), Snowflake::new(user_id)))
            .collect())
    }

    #[instrument(skip(self))]
    async fn add(&self, server_id: Snowflake, user_id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO server_members (server_id, user_id)
            VALUES ($1, $2)
            ",
        )
        .bind(server_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyMember))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, server_id: Snowflake, user_id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM server_members WHERE server_id = $1 AND user_id = $2
            ",
        )
        .bind(server_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(member_not_found());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgMemberRepository>();
    }
}
