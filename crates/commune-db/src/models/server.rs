//! Server database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the servers table
#[derive(Debug, Clone, FromRow)]
pub struct ServerModel {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub category_id: i64,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub banner: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing row: server columns plus the optional member-count annotation
#[derive(Debug, Clone, FromRow)]
pub struct ServerListingModel {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub category_id: i64,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub banner: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub member_count: Option<i64>,
}
