//! Category entity - a grouping applied to servers

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

use super::images::{HasImages, ImageField};

/// Category entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Snowflake,
    pub name: String,
    pub description: Option<String>,
    /// Relative media path of the icon file, if one is set
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a new Category
    pub fn new(id: Snowflake, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description: None,
            icon: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the category name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Update the category description
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }

    /// Replace the icon path, returning the superseded path if it differs
    pub fn set_icon(&mut self, icon: Option<String>) -> Option<String> {
        if self.icon == icon {
            return None;
        }
        let previous = self.icon.take();
        self.icon = icon;
        self.updated_at = Utc::now();
        previous
    }
}

impl HasImages for Category {
    const IMAGE_FIELDS: &'static [ImageField] = &[ImageField::Icon];

    fn image_path(&self, field: ImageField) -> Option<&str> {
        match field {
            ImageField::Icon => self.icon.as_deref(),
            ImageField::Banner => None,
        }
    }
}
