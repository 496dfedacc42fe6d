//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Category Requests
// ============================================================================

/// Create category request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Category name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
}

/// Update category request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Category name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
}

// ============================================================================
// Server Requests
// ============================================================================

/// Create server request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateServerRequest {
    #[validate(length(min = 1, max = 100, message = "Server name must be 1-100 characters"))]
    pub name: String,

    /// Category ID (Snowflake as string)
    pub category_id: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
}

/// Update server request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateServerRequest {
    #[validate(length(min = 1, max = 100, message = "Server name must be 1-100 characters"))]
    pub name: Option<String>,

    /// Move the server to another category (Snowflake as string)
    pub category_id: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
}

// ============================================================================
// Channel Requests
// ============================================================================

/// Create channel request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateChannelRequest {
    #[validate(length(min = 1, max = 100, message = "Channel name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 100, message = "Topic must be at most 100 characters"))]
    pub topic: Option<String>,
}

/// Update channel request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateChannelRequest {
    #[validate(length(min = 1, max = 100, message = "Channel name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 100, message = "Topic must be at most 100 characters"))]
    pub topic: Option<String>,
}

// ============================================================================
// Server Listing Parameters
// ============================================================================

/// Query parameters for the server listing endpoint
///
/// All values arrive as raw strings and are interpreted by the listing
/// service, so a bad `quantity` or `server_id` yields a structured 400
/// instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerSelectParams {
    /// Exact category name to filter by
    pub category: Option<String>,

    /// "true" restricts results to servers the caller has joined
    pub by_user: Option<String>,

    /// "true" annotates each result with its member count
    pub by_num_member: Option<String>,

    /// Maximum number of results, as a decimal string
    pub quantity: Option<String>,

    /// Restrict to a single server id, as a decimal string
    pub server_id: Option<String>,
}
