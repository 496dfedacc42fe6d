//! Server handlers
//!
//! Endpoints for server management, image uploads, and membership.

use axum::{
    extract::{Path, State},
    Json,
};
use commune_core::{ImageField, Snowflake};
use commune_service::dto::{CreateServerRequest, ServerResponse, UpdateServerRequest};
use commune_service::services::ServerService;

use crate::extractors::{AuthUser, ImageUpload, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

fn parse_server_id(raw: &str) -> Result<Snowflake, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid server_id format"))
}

/// Create a new server
///
/// POST /servers
pub async fn create_server(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateServerRequest>,
) -> ApiResult<Created<Json<ServerResponse>>> {
    let service = ServerService::new(state.service_context());
    let response = service.create_server(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Get server by ID
///
/// GET /servers/{server_id}
pub async fn get_server(
    State(state): State<AppState>,
    Path(server_id): Path<String>,
) -> ApiResult<Json<ServerResponse>> {
    let server_id = parse_server_id(&server_id)?;

    let service = ServerService::new(state.service_context());
    let response = service.get_server(server_id).await?;
    Ok(Json(response))
}

/// Update server settings
///
/// PATCH /servers/{server_id}
pub async fn update_server(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(server_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateServerRequest>,
) -> ApiResult<Json<ServerResponse>> {
    let server_id = parse_server_id(&server_id)?;

    let service = ServerService::new(state.service_context());
    let response = service.update_server(server_id, auth.user_id, request).await?;
    Ok(Json(response))
}

/// Delete server
///
/// DELETE /servers/{server_id}
pub async fn delete_server(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(server_id): Path<String>,
) -> ApiResult<NoContent> {
    let server_id = parse_server_id(&server_id)?;

    let service = ServerService::new(state.service_context());
    service.delete_server(server_id, auth.user_id).await?;
    Ok(NoContent)
}

/// Upload or replace the server icon
///
/// PUT /servers/{server_id}/icon
pub async fn upload_icon(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(server_id): Path<String>,
    upload: ImageUpload,
) -> ApiResult<Json<ServerResponse>> {
    upload_image(state, auth, &server_id, ImageField::Icon, upload).await
}

/// Remove the server icon
///
/// DELETE /servers/{server_id}/icon
pub async fn remove_icon(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(server_id): Path<String>,
) -> ApiResult<Json<ServerResponse>> {
    remove_image(state, auth, &server_id, ImageField::Icon).await
}

/// Upload or replace the server banner
///
/// PUT /servers/{server_id}/banner
pub async fn upload_banner(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(server_id): Path<String>,
    upload: ImageUpload,
) -> ApiResult<Json<ServerResponse>> {
    upload_image(state, auth, &server_id, ImageField::Banner, upload).await
}

/// Remove the server banner
///
/// DELETE /servers/{server_id}/banner
pub async fn remove_banner(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(server_id): Path<String>,
) -> ApiResult<Json<ServerResponse>> {
    remove_image(state, auth, &server_id, ImageField::Banner).await
}

/// Join a server
///
/// POST /servers/{server_id}/members/@me
pub async fn join_server(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(server_id): Path<String>,
) -> ApiResult<NoContent> {
    let server_id = parse_server_id(&server_id)?;

    let service = ServerService::new(state.service_context());
    service.join(server_id, auth.user_id).await?;
    Ok(NoContent)
}

/// Leave a server
///
/// DELETE /servers/{server_id}/members/@me
pub async fn leave_server(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(server_id): Path<String>,
) -> ApiResult<NoContent> {
    let server_id = parse_server_id(&server_id)?;

    let service = ServerService::new(state.service_context());
    service.leave(server_id, auth.user_id).await?;
    Ok(NoContent)
}

async fn upload_image(
    state: AppState,
    auth: AuthUser,
    raw_server_id: &str,
    field: ImageField,
    upload: ImageUpload,
) -> ApiResult<Json<ServerResponse>> {
    let server_id = parse_server_id(raw_server_id)?;

    let service = ServerService::new(state.service_context());
    let response = service
        .upload_image(server_id, auth.user_id, field, &upload.filename, &upload.data)
        .await?;
    Ok(Json(response))
}

async fn remove_image(
    state: AppState,
    auth: AuthUser,
    raw_server_id: &str,
    field: ImageField,
) -> ApiResult<Json<ServerResponse>> {
    let server_id = parse_server_id(raw_server_id)?;

    let service = ServerService::new(state.service_context());
    let response = service.remove_image(server_id, auth.user_id, field).await?;
    Ok(Json(response))
}
