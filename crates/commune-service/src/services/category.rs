//! Category service
//!
//! Handles category CRUD and the icon file lifecycle. File cleanup is an
//! explicit step of each mutation: replacing an icon removes the superseded
//! file, and deleting a category removes its icon along with the image files
//! of every server the cascade takes with it.

use commune_core::entities::{Category, HasImages};
use commune_core::validation::{validate_icon_image_size, validate_image_file_extension};
use commune_core::Snowflake;
use commune_storage::paths;
use tracing::{info, instrument};

use crate::dto::mappers::category_response;
use crate::dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Category service
pub struct CategoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CategoryService<'a> {
    /// Create a new CategoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all categories
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> ServiceResult<Vec<CategoryResponse>> {
        let categories = self.ctx.category_repo().find_all().await?;
        Ok(categories
            .iter()
            .map(|c| category_response(c, self.ctx.media_store()))
            .collect())
    }

    /// Get category by ID
    #[instrument(skip(self))]
    pub async fn get_category(&self, category_id: Snowflake) -> ServiceResult<CategoryResponse> {
        let category = self.get_entity(category_id).await?;
        Ok(category_response(&category, self.ctx.media_store()))
    }

    /// Create a new category
    #[instrument(skip(self, request))]
    pub async fn create_category(
        &self,
        request: CreateCategoryRequest,
    ) -> ServiceResult<CategoryResponse> {
        let mut category = Category::new(self.ctx.generate_id(), request.name);
        category.description = request.description;

        self.ctx.category_repo().create(&category).await?;

        info!(category_id = %category.id, "Category created");

        Ok(category_response(&category, self.ctx.media_store()))
    }

    /// Update category name or description
    #[instrument(skip(self, request))]
    pub async fn update_category(
        &self,
        category_id: Snowflake,
        request: UpdateCategoryRequest,
    ) -> ServiceResult<CategoryResponse> {
        let mut category = self.get_entity(category_id).await?;

        if let Some(name) = request.name {
            category.set_name(name);
        }
        if let Some(description) = request.description {
            category.set_description(Some(description));
        }

        self.ctx.category_repo().update(&category).await?;

        Ok(category_response(&category, self.ctx.media_store()))
    }

    /// Delete a category
    ///
    /// The database cascade removes the category's servers, so their image
    /// files are swept here before the row disappears.
    #[instrument(skip(self))]
    pub async fn delete_category(&self, category_id: Snowflake) -> ServiceResult<()> {
        let category = self.get_entity(category_id).await?;

        let servers = self.ctx.server_repo().find_by_category(category_id).await?;

        self.ctx.category_repo().delete(category_id).await?;

        for (_, path) in category.image_paths() {
            self.ctx.media_store().remove_best_effort(path).await;
        }
        for server in &servers {
            for (_, path) in server.image_paths() {
                self.ctx.media_store().remove_best_effort(path).await;
            }
        }

        info!(category_id = %category_id, swept_servers = servers.len(), "Category deleted");

        Ok(())
    }

    /// Upload or replace the category icon
    ///
    /// Validates the filename extension and the decoded image dimensions
    /// before anything is written. The superseded file is removed after the
    /// database row points at the new one.
    #[instrument(skip(self, data))]
    pub async fn upload_icon(
        &self,
        category_id: Snowflake,
        filename: &str,
        data: &[u8],
    ) -> ServiceResult<CategoryResponse> {
        validate_image_file_extension(filename)?;
        validate_icon_image_size(data)?;

        let mut category = self.get_entity(category_id).await?;

        let relative = paths::category_icon(category_id, filename);
        self.ctx.media_store().store(&relative, data).await?;

        let superseded = category.set_icon(Some(relative));
        self.ctx.category_repo().update(&category).await?;

        if let Some(old) = superseded {
            self.ctx.media_store().remove_best_effort(&old).await;
        }

        Ok(category_response(&category, self.ctx.media_store()))
    }

    /// Remove the category icon, deleting the underlying file
    #[instrument(skip(self))]
    pub async fn remove_icon(&self, category_id: Snowflake) -> ServiceResult<CategoryResponse> {
        let mut category = self.get_entity(category_id).await?;

        if let Some(removed) = category.set_icon(None) {
            self.ctx.category_repo().update(&category).await?;
            self.ctx.media_store().remove_best_effort(&removed).await;
        }

        Ok(category_response(&category, self.ctx.media_store()))
    }

    async fn get_entity(&self, category_id: Snowflake) -> ServiceResult<Category> {
        self.ctx
            .category_repo()
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Category", category_id.to_string()))
    }
}
