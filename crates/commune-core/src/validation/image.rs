//! Image upload validators
//!
//! Both validators run before anything is persisted; a failure prevents
//! the write entirely. Dimension checking decodes the full image, the
//! extension check is a pure function of the filename.

use std::path::Path;

use crate::error::DomainError;

/// Maximum icon width/height in pixels
pub const MAX_ICON_DIMENSION: u32 = 70;

/// Accepted image file extensions (lowercase, without the dot)
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// Validate that an icon image fits within 70x70 pixels
///
/// # Errors
/// Returns `DomainError::InvalidImageData` when the bytes do not decode as
/// an image, and `DomainError::ImageTooLarge` when either dimension exceeds
/// the limit.
pub fn validate_icon_image_size(data: &[u8]) -> Result<(), DomainError> {
    let img = image::load_from_memory(data)
        .map_err(|e| DomainError::InvalidImageData(e.to_string()))?;

    let (width, height) = (img.width(), img.height());
    if width > MAX_ICON_DIMENSION || height > MAX_ICON_DIMENSION {
        return Err(DomainError::ImageTooLarge {
            max: MAX_ICON_DIMENSION,
            width,
            height,
        });
    }

    Ok(())
}

/// Validate an uploaded image filename by extension (case-insensitive)
///
/// # Errors
/// Returns `DomainError::UnsupportedImageExtension` when the extension is
/// missing or not in the accepted set.
pub fn validate_image_file_extension(filename: &str) -> Result<(), DomainError> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if !ALLOWED_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        return Err(DomainError::UnsupportedImageExtension { extension });
    }

    Ok(())
}
