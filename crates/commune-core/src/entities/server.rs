//! Server entity - a community owned by a user, containing channels and members

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

use super::images::{HasImages, ImageField};

/// Server entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    pub id: Snowflake,
    pub name: String,
    pub owner_id: Snowflake,
    pub category_id: Snowflake,
    pub description: Option<String>,
    /// Relative media path of the icon file, if one is set
    pub icon: Option<String>,
    /// Relative media path of the banner file, if one is set
    pub banner: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Server {
    /// Create a new Server
    pub fn new(id: Snowflake, name: String, owner_id: Snowflake, category_id: Snowflake) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            owner_id,
            category_id,
            description: None,
            icon: None,
            banner: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if a user is the server owner
    #[inline]
    pub fn is_owner(&self, user_id: Snowflake) -> bool {
        self.owner_id == user_id
    }

    /// Update the server name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Update the server description
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }

    /// Move the server to another category
    pub fn set_category(&mut self, category_id: Snowflake) {
        self.category_id = category_id;
        self.updated_at = Utc::now();
    }

    /// Replace an image path, returning the superseded path if it differs
    pub fn set_image(&mut self, field: ImageField, path: Option<String>) -> Option<String> {
        let slot = match field {
            ImageField::Icon => &mut self.icon,
            ImageField::Banner => &mut self.banner,
        };
        if *slot == path {
            return None;
        }
        let previous = slot.take();
        *slot = path;
        self.updated_at = Utc::now();
        previous
    }
}

impl HasImages for Server {
    const IMAGE_FIELDS: &'static [ImageField] = &[ImageField::Icon, ImageField::Banner];

    fn image_path(&self, field: ImageField) -> Option<&str> {
        match field {
            ImageField::Icon => self.icon.as_deref(),
            ImageField::Banner => self.banner.as_deref(),
        }
    }
}
