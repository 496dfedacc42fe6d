//! Channel service
//!
//! Channels live inside a server; names are lowercased by the entity on
//! every write. Mutations require the caller to own the channel or the
//! enclosing server.

use commune_core::entities::{Channel, Server};
use commune_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{ChannelResponse, CreateChannelRequest, UpdateChannelRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Channel service
pub struct ChannelService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChannelService<'a> {
    /// Create a new ChannelService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List channels of a server
    #[instrument(skip(self))]
    pub async fn list_channels(&self, server_id: Snowflake) -> ServiceResult<Vec<ChannelResponse>> {
        self.get_server(server_id).await?;
        let channels = self.ctx.channel_repo().find_by_server(server_id).await?;
        Ok(channels.iter().map(ChannelResponse::from).collect())
    }

    /// Get channel by ID
    #[instrument(skip(self))]
    pub async fn get_channel(&self, channel_id: Snowflake) -> ServiceResult<ChannelResponse> {
        let channel = self.get_entity(channel_id).await?;
        Ok(ChannelResponse::from(&channel))
    }

    /// Create a channel in a server
    ///
    /// The caller must be a member of the server and becomes the channel
    /// owner.
    #[instrument(skip(self, request))]
    pub async fn create_channel(
        &self,
        server_id: Snowflake,
        user_id: Snowflake,
        request: CreateChannelRequest,
    ) -> ServiceResult<ChannelResponse> {
        self.get_server(server_id).await?;

        if !self.ctx.member_repo().is_member(server_id, user_id).await? {
            return Err(ServiceError::permission_denied(
                "only members may create channels",
            ));
        }

        let channel = Channel::new(
            self.ctx.generate_id(),
            &request.name,
            user_id,
            request.topic.unwrap_or_default(),
            server_id,
        );

        self.ctx.channel_repo().create(&channel).await?;

        info!(channel_id = %channel.id, server_id = %server_id, "Channel created");

        Ok(ChannelResponse::from(&channel))
    }

    /// Update channel name or topic
    #[instrument(skip(self, request))]
    pub async fn update_channel(
        &self,
        channel_id: Snowflake,
        user_id: Snowflake,
        request: UpdateChannelRequest,
    ) -> ServiceResult<ChannelResponse> {
        let mut channel = self.get_entity(channel_id).await?;
        self.require_manage(&channel, user_id).await?;

        if let Some(name) = request.name {
            channel.set_name(&name);
        }
        if let Some(topic) = request.topic {
            channel.set_topic(topic);
        }

        self.ctx.channel_repo().update(&channel).await?;

        Ok(ChannelResponse::from(&channel))
    }

    /// Delete a channel
    #[instrument(skip(self))]
    pub async fn delete_channel(&self, channel_id: Snowflake, user_id: Snowflake) -> ServiceResult<()> {
        let channel = self.get_entity(channel_id).await?;
        self.require_manage(&channel, user_id).await?;

        self.ctx.channel_repo().delete(channel_id).await?;

        info!(channel_id = %channel_id, "Channel deleted");

        Ok(())
    }

    /// A channel is managed by its owner or the owner of its server
    async fn require_manage(&self, channel: &Channel, user_id: Snowflake) -> ServiceResult<()> {
        if channel.owner_id == user_id {
            return Ok(());
        }
        let server = self.get_server(channel.server_id).await?;
        if server.is_owner(user_id) {
            return Ok(());
        }
        Err(ServiceError::permission_denied(
            "only the channel or server owner may do this",
        ))
    }

    async fn get_entity(&self, channel_id: Snowflake) -> ServiceResult<Channel> {
        self.ctx
            .channel_repo()
            .find_by_id(channel_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Channel", channel_id.to_string()))
    }

    async fn get_server(&self, server_id: Snowflake) -> ServiceResult<Server> {
        self.ctx
            .server_repo()
            .find_by_id(server_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Server", server_id.to_string()))
    }
}
