//! Server service
//!
//! Handles server CRUD, image uploads, and membership. Only the owner may
//! mutate a server; any authenticated user may join one. Image files are
//! removed as an explicit step of the mutation that orphans them.

use commune_core::entities::{HasImages, Server};
use commune_core::validation::{validate_icon_image_size, validate_image_file_extension};
use commune_core::{ImageField, Snowflake};
use commune_storage::paths;
use tracing::{info, instrument};

use crate::dto::mappers::server_response;
use crate::dto::{ChannelResponse, CreateServerRequest, ServerResponse, UpdateServerRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Server service
pub struct ServerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ServerService<'a> {
    /// Create a new ServerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get server by ID, with channels and member ids
    #[instrument(skip(self))]
    pub async fn get_server(&self, server_id: Snowflake) -> ServiceResult<ServerResponse> {
        let server = self.get_entity(server_id).await?;
        self.to_response(&server).await
    }

    /// Create a new server
    ///
    /// The owner becomes the first member.
    #[instrument(skip(self, request))]
    pub async fn create_server(
        &self,
        owner_id: Snowflake,
        request: CreateServerRequest,
    ) -> ServiceResult<ServerResponse> {
        let category_id = parse_id(&request.category_id, "Invalid category_id format")?;

        self.ctx
            .category_repo()
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", category_id.to_string()))?;

        let mut server = Server::new(self.ctx.generate_id(), request.name, owner_id, category_id);
        server.description = request.description;

        self.ctx.server_repo().create(&server).await?;
        self.ctx.member_repo().add(server.id, owner_id).await?;

        info!(server_id = %server.id, owner_id = %owner_id, "Server created");

        self.to_response(&server).await
    }

    /// Update server settings (owner only)
    #[instrument(skip(self, request))]
    pub async fn update_server(
        &self,
        server_id: Snowflake,
        user_id: Snowflake,
        request: UpdateServerRequest,
    ) -> ServiceResult<ServerResponse> {
        let mut server = self.get_owned_entity(server_id, user_id).await?;

        if let Some(name) = request.name {
            server.set_name(name);
        }
        if let Some(description) = request.description {
            server.set_description(Some(description));
        }
        if let Some(raw) = request.category_id {
            let category_id = parse_id(&raw, "Invalid category_id format")?;
            self.ctx
                .category_repo()
                .find_by_id(category_id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Category", category_id.to_string()))?;
            server.set_category(category_id);
        }

        self.ctx.server_repo().update(&server).await?;

        self.to_response(&server).await
    }

    /// Delete a server (owner only)
    ///
    /// Icon and banner files are removed once the row is gone.
    #[instrument(skip(self))]
    pub async fn delete_server(&self, server_id: Snowflake, user_id: Snowflake) -> ServiceResult<()> {
        let server = self.get_owned_entity(server_id, user_id).await?;

        self.ctx.server_repo().delete(server_id).await?;

        for (_, path) in server.image_paths() {
            self.ctx.media_store().remove_best_effort(path).await;
        }

        info!(server_id = %server_id, "Server deleted");

        Ok(())
    }

    /// Upload or replace a server image (owner only)
    ///
    /// Every upload is checked by filename extension; icons additionally
    /// must decode to at most 70x70 pixels. The superseded file is removed
    /// after the database row points at the new one.
    #[instrument(skip(self, data))]
    pub async fn upload_image(
        &self,
        server_id: Snowflake,
        user_id: Snowflake,
        field: ImageField,
        filename: &str,
        data: &[u8],
    ) -> ServiceResult<ServerResponse> {
        validate_image_file_extension(filename)?;
        if field == ImageField::Icon {
            validate_icon_image_size(data)?;
        }

        let mut server = self.get_owned_entity(server_id, user_id).await?;

        let relative = paths::server_image(server_id, field, filename);
        self.ctx.media_store().store(&relative, data).await?;

        let superseded = server.set_image(field, Some(relative));
        self.ctx.server_repo().update(&server).await?;

        if let Some(old) = superseded {
            self.ctx.media_store().remove_best_effort(&old).await;
        }

        self.to_response(&server).await
    }

    /// Remove a server image (owner only), deleting the underlying file
    #[instrument(skip(self))]
    pub async fn remove_image(
        &self,
        server_id: Snowflake,
        user_id: Snowflake,
        field: ImageField,
    ) -> ServiceResult<ServerResponse> {
        let mut server = self.get_owned_entity(server_id, user_id).await?;

        if let Some(removed) = server.set_image(field, None) {
            self.ctx.server_repo().update(&server).await?;
            self.ctx.media_store().remove_best_effort(&removed).await;
        }

        self.to_response(&server).await
    }

    /// Join a server
    #[instrument(skip(self))]
    pub async fn join(&self, server_id: Snowflake, user_id: Snowflake) -> ServiceResult<()> {
        self.get_entity(server_id).await?;
        self.ctx.member_repo().add(server_id, user_id).await?;

        info!(server_id = %server_id, user_id = %user_id, "User joined server");

        Ok(())
    }

    /// Leave a server
    ///
    /// The owner cannot leave an owned server.
    #[instrument(skip(self))]
    pub async fn leave(&self, server_id: Snowflake, user_id: Snowflake) -> ServiceResult<()> {
        let server = self.get_entity(server_id).await?;

        if server.is_owner(user_id) {
            return Err(commune_core::DomainError::OwnerCannotLeave.into());
        }

        self.ctx.member_repo().remove(server_id, user_id).await?;

        info!(server_id = %server_id, user_id = %user_id, "User left server");

        Ok(())
    }

    async fn get_entity(&self, server_id: Snowflake) -> ServiceResult<Server> {
        self.ctx
            .server_repo()
            .find_by_id(server_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Server", server_id.to_string()))
    }

    async fn get_owned_entity(
        &self,
        server_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<Server> {
        let server = self.get_entity(server_id).await?;
        if !server.is_owner(user_id) {
            return Err(ServiceError::permission_denied(
                "only the server owner may do this",
            ));
        }
        Ok(server)
    }

    async fn to_response(&self, server: &Server) -> ServiceResult<ServerResponse> {
        let channels = self.ctx.channel_repo().find_by_server(server.id).await?;
        let members = self.ctx.member_repo().member_ids(server.id).await?;

        let channel_responses: Vec<ChannelResponse> =
            channels.iter().map(ChannelResponse::from).collect();

        Ok(server_response(
            server,
            channel_responses,
            &members,
            self.ctx.media_store(),
        ))
    }
}

/// Parse a Snowflake carried as a decimal string in a request body
fn parse_id(raw: &str, message: &str) -> ServiceResult<Snowflake> {
    raw.parse::<Snowflake>()
        .map_err(|_| ServiceError::validation(message))
}
