//! Channel entity - a named sub-topic within a server
//!
//! Channel names are normalized to lowercase on every write, so two
//! channels never differ only by case.

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Channel entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: Snowflake,
    pub name: String,
    pub owner_id: Snowflake,
    pub topic: String,
    pub server_id: Snowflake,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Channel {
    /// Create a new Channel; the name is lowercased unconditionally
    pub fn new(id: Snowflake, name: &str, owner_id: Snowflake, topic: String, server_id: Snowflake) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.to_lowercase(),
            owner_id,
            topic,
            server_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the channel name; lowercased unconditionally
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_lowercase();
        self.updated_at = Utc::now();
    }

    /// Update the channel topic
    pub fn set_topic(&mut self, topic: String) {
        self.topic = topic;
        self.updated_at = Utc::now();
    }
}
