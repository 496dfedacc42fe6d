//! Image-backed field declarations
//!
//! Each entity that owns uploaded image files declares them as an explicit,
//! static list. Cleanup code walks the list instead of reflecting over
//! field metadata at runtime, so the file-lifecycle contract is visible in
//! the type system.

/// An image slot on an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageField {
    Icon,
    Banner,
}

impl ImageField {
    /// Directory segment used in media paths
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::Icon => "icon",
            Self::Banner => "banner",
        }
    }
}

/// Entities carrying file-backed image fields
///
/// Invariant: at most one file on disk per declared field at any time.
/// Replacing or deleting a field's image must remove the superseded file.
pub trait HasImages {
    /// The image fields this entity type declares
    const IMAGE_FIELDS: &'static [ImageField];

    /// Relative media path currently stored for a field, if any
    fn image_path(&self, field: ImageField) -> Option<&str>;

    /// All currently stored image paths, paired with their field
    fn image_paths(&self) -> Vec<(ImageField, &str)> {
        Self::IMAGE_FIELDS
            .iter()
            .filter_map(|&field| self.image_path(field).map(|path| (field, path)))
            .collect()
    }
}
