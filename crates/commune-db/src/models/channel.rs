//! Channel database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the channels table
#[derive(Debug, Clone, FromRow)]
pub struct ChannelModel {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub topic: String,
    pub server_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
