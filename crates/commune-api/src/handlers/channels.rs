//! Channel handlers
//!
//! Endpoints for channel management within servers.

use axum::{
    extract::{Path, State},
    Json,
};
use commune_core::Snowflake;
use commune_service::dto::{ChannelResponse, CreateChannelRequest, UpdateChannelRequest};
use commune_service::services::ChannelService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

fn parse_server_id(raw: &str) -> Result<Snowflake, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid server_id format"))
}

fn parse_channel_id(raw: &str) -> Result<Snowflake, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid channel_id format"))
}

/// List channels of a server
///
/// GET /servers/{server_id}/channels
pub async fn list_server_channels(
    State(state): State<AppState>,
    Path(server_id): Path<String>,
) -> ApiResult<Json<Vec<ChannelResponse>>> {
    let server_id = parse_server_id(&server_id)?;

    let service = ChannelService::new(state.service_context());
    let response = service.list_channels(server_id).await?;
    Ok(Json(response))
}

/// Create a channel in a server
///
/// POST /servers/{server_id}/channels
pub async fn create_channel(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(server_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateChannelRequest>,
) -> ApiResult<Created<Json<ChannelResponse>>> {
    let server_id = parse_server_id(&server_id)?;

    let service = ChannelService::new(state.service_context());
    let response = service.create_channel(server_id, auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Get channel by ID
///
/// GET /channels/{channel_id}
pub async fn get_channel(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
) -> ApiResult<Json<ChannelResponse>> {
    let channel_id = parse_channel_id(&channel_id)?;

    let service = ChannelService::new(state.service_context());
    let response = service.get_channel(channel_id).await?;
    Ok(Json(response))
}

/// Update channel name or topic
///
/// PATCH /channels/{channel_id}
pub async fn update_channel(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(channel_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateChannelRequest>,
) -> ApiResult<Json<ChannelResponse>> {
    let channel_id = parse_channel_id(&channel_id)?;

    let service = ChannelService::new(state.service_context());
    let response = service.update_channel(channel_id, auth.user_id, request).await?;
    Ok(Json(response))
}

/// Delete channel
///
/// DELETE /channels/{channel_id}
pub async fn delete_channel(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(channel_id): Path<String>,
) -> ApiResult<NoContent> {
    let channel_id = parse_channel_id(&channel_id)?;

    let service = ChannelService::new(state.service_context());
    service.delete_channel(channel_id, auth.user_id).await?;
    Ok(NoContent)
}
