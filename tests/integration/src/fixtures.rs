//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A valid 1x1 PNG, small enough to pass the icon dimension check
pub fn tiny_png() -> Vec<u8> {
    vec![
        137, 80, 78, 71, 13, 10, 26, 10, 0, 0, 0, 13, 73, 72, 68, 82, 0, 0, 0, 1, 0, 0, 0, 1, 8,
        6, 0, 0, 0, 31, 21, 196, 137, 0, 0, 0, 13, 73, 68, 65, 84, 120, 218, 99, 100, 96, 248, 95,
        15, 0, 2, 135, 1, 128, 235, 71, 186, 146, 0, 0, 0, 0, 73, 69, 78, 68, 174, 66, 96, 130,
    ]
}

/// Create category request
#[derive(Debug, Serialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
}

impl CreateCategoryRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Category {suffix}"),
            description: Some("A test category".to_string()),
        }
    }
}

/// Update category request
#[derive(Debug, Default, Serialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Category response
#[derive(Debug, Deserialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Create server request
#[derive(Debug, Serialize)]
pub struct CreateServerRequest {
    pub name: String,
    pub category_id: String,
    pub description: Option<String>,
}

impl CreateServerRequest {
    pub fn unique(category_id: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Server {suffix}"),
            category_id: category_id.to_string(),
            description: Some("A test server".to_string()),
        }
    }
}

/// Update server request
#[derive(Debug, Default, Serialize)]
pub struct UpdateServerRequest {
    pub name: Option<String>,
    pub category_id: Option<String>,
    pub description: Option<String>,
}

/// Server response
#[derive(Debug, Deserialize)]
pub struct ServerResponse {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub category_id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub banner: Option<String>,
    pub channels: Vec<ChannelResponse>,
    pub members: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// One row of the server listing endpoint
#[derive(Debug, Deserialize)]
pub struct ServerListItemResponse {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub category_id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub banner: Option<String>,
    pub members: Vec<String>,
    #[serde(default)]
    pub num_members: Option<i64>,
    pub created_at: String,
}

/// Create channel request
#[derive(Debug, Serialize)]
pub struct CreateChannelRequest {
    pub name: String,
    pub topic: Option<String>,
}

impl CreateChannelRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("test-channel-{suffix}"),
            topic: Some("Test topic".to_string()),
        }
    }
}

/// Update channel request
#[derive(Debug, Default, Serialize)]
pub struct UpdateChannelRequest {
    pub name: Option<String>,
    pub topic: Option<String>,
}

/// Channel response
#[derive(Debug, Deserialize)]
pub struct ChannelResponse {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub topic: String,
    pub server_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Health check response
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
