//! PostgreSQL implementation of ServerRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use commune_core::entities::Server;
use commune_core::traits::{RepoResult, ServerListing, ServerQuery, ServerRepository};
use commune_core::value_objects::Snowflake;

use crate::models::{ServerListingModel, ServerModel};

use super::error::{map_db_error, server_not_found};

/// PostgreSQL implementation of ServerRepository
#[derive(Clone)]
pub struct PgServerRepository {
    pool: PgPool,
}

impl PgServerRepository {
    /// Create a new PgServerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServerRepository for PgServerRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Server>> {
        let result = sqlx::query_as::<_, ServerModel>(
            r"
            SELECT id, name, owner_id, category_id, description, icon, banner,
                   created_at, updated_at
            FROM servers
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Server::from))
    }

    #[instrument(skip(self))]
    async fn find_by_category(&self, category_id: Snowflake) -> RepoResult<Vec<Server>> {
        let results = sqlx::query_as::<_, ServerModel>(
            r"
            SELECT id, name, owner_id, category_id, description, icon, banner,
                   created_at, updated_at
            FROM servers
            WHERE category_id = $1
            ORDER BY id
            ",
        )
        .bind(category_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Server::from).collect())
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &ServerQuery) -> RepoResult<Vec<ServerListing>> {
        let mut builder = QueryBuilder::<Postgres>::new(
            "SELECT s.id, s.name, s.owner_id, s.category_id, s.description, \
             s.icon, s.banner, s.created_at, s.updated_at, ",
        );

        if query.with_member_count {
            builder.push(
                "(SELECT COUNT(*) FROM server_members m WHERE m.server_id = s.id) AS member_count ",
            );
        } else {
            builder.push("NULL::BIGINT AS member_count ");
        }

        builder.push("FROM servers s ");

        if query.category_name.is_some() {
            builder.push("JOIN categories c ON c.id = s.category_id ");
        }

        builder.push("WHERE TRUE ");

        if let Some(name) = &query.category_name {
            builder.push("AND c.name = ");
            builder.push_bind(name.clone());
            builder.push(" ");
        }

        if let Some(member_id) = query.member_id {
            builder.push(
                "AND EXISTS (SELECT 1 FROM server_members m \
                 WHERE m.server_id = s.id AND m.user_id = ",
            );
            builder.push_bind(member_id.into_inner());
            builder.push(") ");
        }

        if let Some(id) = query.id {
            builder.push("AND s.id = ");
            builder.push_bind(id.into_inner());
            builder.push(" ");
        }

        builder.push("ORDER BY s.id ");

        if let Some(limit) = query.limit {
            builder.push("LIMIT ");
            builder.push_bind(limit);
        }

        let results = builder
            .build_query_as::<ServerListingModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(ServerListing::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, server: &Server) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO servers (id, name, owner_id, category_id, description, icon, banner,
                                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(server.id.into_inner())
        .bind(&server.name)
        .bind(server.owner_id.into_inner())
        .bind(server.category_id.into_inner())
        .bind(&server.description)
        .bind(&server.icon)
        .bind(&server.banner)
        .bind(server.created_at)
        .bind(server.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, server: &Server) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE servers
            SET name = $2, category_id = $3, description = $4, icon = $5, banner = $6,
                updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(server.id.into_inner())
        .bind(&server.name)
        .bind(server.category_id.into_inner())
        .bind(&server.description)
        .bind(&server.icon)
        .bind(&server.banner)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(server_not_found(server.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM servers WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(server_not_found(id));
        }

        Ok(())
    }
}
