//! Mappers from domain entities to response DTOs

use commune_core::entities::{Category, Channel, Server};
use commune_core::traits::ServerListing;
use commune_core::value_objects::Snowflake;
use commune_storage::MediaStore;

use super::responses::{
    CategoryResponse, ChannelResponse, ServerListItemResponse, ServerResponse,
};

impl From<&Channel> for ChannelResponse {
    fn from(channel: &Channel) -> Self {
        Self {
            id: channel.id.to_string(),
            name: channel.name.clone(),
            owner_id: channel.owner_id.to_string(),
            topic: channel.topic.clone(),
            server_id: channel.server_id.to_string(),
            created_at: channel.created_at,
            updated_at: channel.updated_at,
        }
    }
}

/// Map a category entity, resolving its icon path to a public URL
#[must_use]
pub fn category_response(category: &Category, media: &MediaStore) -> CategoryResponse {
    CategoryResponse {
        id: category.id.to_string(),
        name: category.name.clone(),
        description: category.description.clone(),
        icon: category.icon.as_deref().map(|rel| media.url(rel)),
        created_at: category.created_at,
        updated_at: category.updated_at,
    }
}

/// Map a server entity with its channels and member ids
#[must_use]
pub fn server_response(
    server: &Server,
    channels: Vec<ChannelResponse>,
    members: &[Snowflake],
    media: &MediaStore,
) -> ServerResponse {
    ServerResponse {
        id: server.id.to_string(),
        name: server.name.clone(),
        owner_id: server.owner_id.to_string(),
        category_id: server.category_id.to_string(),
        description: server.description.clone(),
        icon: server.icon.as_deref().map(|rel| media.url(rel)),
        banner: server.banner.as_deref().map(|rel| media.url(rel)),
        channels,
        members: members.iter().map(Snowflake::to_string).collect(),
        created_at: server.created_at,
        updated_at: server.updated_at,
    }
}

/// Map one listing row with its member ids
#[must_use]
pub fn server_list_item(
    listing: &ServerListing,
    members: &[Snowflake],
    media: &MediaStore,
) -> ServerListItemResponse {
    let server = &listing.server;
    ServerListItemResponse {
        id: server.id.to_string(),
        name: server.name.clone(),
        owner_id: server.owner_id.to_string(),
        category_id: server.category_id.to_string(),
        description: server.description.clone(),
        icon: server.icon.as_deref().map(|rel| media.url(rel)),
        banner: server.banner.as_deref().map(|rel| media.url(rel)),
        members: members.iter().map(Snowflake::to_string).collect(),
        num_members: listing.member_count,
        created_at: server.created_at,
    }
}
