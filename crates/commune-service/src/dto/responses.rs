//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// ============================================================================
// Category Responses
// ============================================================================

/// Category response
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Public URL of the icon, if one is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Server Responses
// ============================================================================

/// Full server response with channels and member ids
#[derive(Debug, Clone, Serialize)]
pub struct ServerResponse {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub category_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Public URL of the icon, if one is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Public URL of the banner, if one is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    pub channels: Vec<ChannelResponse>,
    pub members: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One row of the server listing endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ServerListItemResponse {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub category_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    pub members: Vec<String>,
    /// Present only when the query asked for member counts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_members: Option<i64>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Channel Responses
// ============================================================================

/// Channel response
#[derive(Debug, Clone, Serialize)]
pub struct ChannelResponse {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub topic: String,
    pub server_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
