//! Category handlers
//!
//! Endpoints for category management and icon uploads.

use axum::{
    extract::{Path, State},
    Json,
};
use commune_core::Snowflake;
use commune_service::dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
use commune_service::services::CategoryService;

use crate::extractors::{AuthUser, ImageUpload, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

fn parse_category_id(raw: &str) -> Result<Snowflake, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid category_id format"))
}

/// List all categories
///
/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    let response = service.list_categories().await?;
    Ok(Json(response))
}

/// Get category by ID
///
/// GET /categories/{category_id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> ApiResult<Json<CategoryResponse>> {
    let category_id = parse_category_id(&category_id)?;

    let service = CategoryService::new(state.service_context());
    let response = service.get_category(category_id).await?;
    Ok(Json(response))
}

/// Create a new category
///
/// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCategoryRequest>,
) -> ApiResult<Created<Json<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    let response = service.create_category(request).await?;
    Ok(Created(Json(response)))
}

/// Update category settings
///
/// PATCH /categories/{category_id}
pub async fn update_category(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(category_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateCategoryRequest>,
) -> ApiResult<Json<CategoryResponse>> {
    let category_id = parse_category_id(&category_id)?;

    let service = CategoryService::new(state.service_context());
    let response = service.update_category(category_id, request).await?;
    Ok(Json(response))
}

/// Delete category
///
/// DELETE /categories/{category_id}
pub async fn delete_category(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(category_id): Path<String>,
) -> ApiResult<NoContent> {
    let category_id = parse_category_id(&category_id)?;

    let service = CategoryService::new(state.service_context());
    service.delete_category(category_id).await?;
    Ok(NoContent)
}

/// Upload or replace the category icon
///
/// PUT /categories/{category_id}/icon
pub async fn upload_icon(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(category_id): Path<String>,
    upload: ImageUpload,
) -> ApiResult<Json<CategoryResponse>> {
    let category_id = parse_category_id(&category_id)?;

    let service = CategoryService::new(state.service_context());
    let response = service
        .upload_icon(category_id, &upload.filename, &upload.data)
        .await?;
    Ok(Json(response))
}

/// Remove the category icon
///
/// DELETE /categories/{category_id}/icon
pub async fn remove_icon(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(category_id): Path<String>,
) -> ApiResult<Json<CategoryResponse>> {
    let category_id = parse_category_id(&category_id)?;

    let service = CategoryService::new(state.service_context());
    let response = service.remove_icon(category_id).await?;
    Ok(Json(response))
}
