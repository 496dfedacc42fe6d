//! User entity
//!
//! The user table is owned by an external auth collaborator; this entity
//! carries only what ownership and membership edges need.

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User entity (minimal projection)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User
    pub fn new(id: Snowflake, username: String) -> Self {
        Self {
            id,
            username,
            created_at: Utc::now(),
        }
    }
}
