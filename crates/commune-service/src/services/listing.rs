//! Server listing service
//!
//! Interprets the raw string parameters of the listing endpoint into a
//! [`ServerQuery`] and executes it. Interpretation is a pure function, so
//! the whole parameter matrix is unit-testable without a database.

use std::collections::HashMap;

use commune_common::AppError;
use commune_core::traits::ServerQuery;
use commune_core::Snowflake;
use tracing::instrument;

use crate::dto::mappers::server_list_item;
use crate::dto::{ServerListItemResponse, ServerSelectParams};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Server listing service
pub struct ListingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ListingService<'a> {
    /// Create a new ListingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Interpret raw listing parameters into a query descriptor
    ///
    /// Stages apply in a fixed order: category filter, membership filter,
    /// member counting, id restriction, then truncation. The id restriction
    /// is interpreted before the quantity limit, so `server_id` narrows the
    /// set that `quantity` truncates.
    ///
    /// # Errors
    /// - `by_user=true` without an authenticated caller is a 401
    /// - a non-numeric `quantity` is rejected as "Invalid quantity value"
    /// - a non-numeric `server_id` is rejected as "Invalid server id"
    pub fn build_query(
        params: &ServerSelectParams,
        user: Option<Snowflake>,
    ) -> ServiceResult<ServerQuery> {
        let mut query = ServerQuery::default();

        if let Some(category) = params.category.as_deref() {
            if !category.is_empty() {
                query = query.with_category(category);
            }
        }

        if flag(params.by_user.as_deref()) {
            let user = user.ok_or(ServiceError::App(AppError::MissingAuth))?;
            query = query.for_member(user);
        }

        if flag(params.by_num_member.as_deref()) {
            query = query.counting_members();
        }

        if let Some(raw) = params.server_id.as_deref() {
            let id = raw
                .parse::<Snowflake>()
                .map_err(|_| ServiceError::validation("Invalid server id"))?;
            query = query.with_id(id);
        }

        if let Some(raw) = params.quantity.as_deref() {
            let quantity = raw
                .parse::<i64>()
                .map_err(|_| ServiceError::validation("Invalid quantity value"))?;
            query = query.take(quantity);
        }

        Ok(query)
    }

    /// Execute a listing request
    ///
    /// When the query named a specific server and nothing matched, the
    /// response is a validation error rather than an empty list. A limit of
    /// zero forces an empty page for any query, so it never triggers that
    /// error.
    #[instrument(skip(self, params))]
    pub async fn select(
        &self,
        params: &ServerSelectParams,
        user: Option<Snowflake>,
    ) -> ServiceResult<Vec<ServerListItemResponse>> {
        let query = Self::build_query(params, user)?;

        let listings = self.ctx.server_repo().search(&query).await?;

        if listings.is_empty() {
            if let Some(id) = unmatched_server_id(&query) {
                return Err(ServiceError::validation(format!(
                    "Server with id {id} does not exist"
                )));
            }
        }

        let server_ids: Vec<Snowflake> = listings.iter().map(|l| l.server.id).collect();
        let pairs = self
            .ctx
            .member_repo()
            .member_ids_for_servers(&server_ids)
            .await?;

        let mut members_by_server: HashMap<Snowflake, Vec<Snowflake>> = HashMap::new();
        for (server_id, user_id) in pairs {
            members_by_server.entry(server_id).or_default().push(user_id);
        }

        Ok(listings
            .iter()
            .map(|listing| {
                let members = members_by_server
                    .get(&listing.server.id)
                    .map_or(&[][..], Vec::as_slice);
                server_list_item(listing, members, self.ctx.media_store())
            })
            .collect())
    }
}

/// A flag parameter is set only by the exact string "true"
fn flag(value: Option<&str>) -> bool {
    value == Some("true")
}

/// The server id to report as missing when a query came back empty
///
/// A zero limit yields an empty page even when the named server exists, so
/// it says nothing about the id.
fn unmatched_server_id(query: &ServerQuery) -> Option<Snowflake> {
    if query.limit == Some(0) {
        return None;
    }
    query.id
}
