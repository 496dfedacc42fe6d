//! Relative media path construction
//!
//! Layout under the media root:
//! - `category/<id>/icon/<filename>`
//! - `server/<id>/icon/<filename>`
//! - `server/<id>/banner/<filename>`
//!
//! Uploaded filenames are reduced to their final path component, so a
//! hostile `../../etc/passwd` upload cannot escape the record's directory.

use std::path::Path;

use commune_core::{ImageField, Snowflake};

/// Strip any directory components from an uploaded filename
#[must_use]
pub fn sanitize_filename(filename: &str) -> String {
    Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload")
        .to_string()
}

/// Relative path for a category icon file
#[must_use]
pub fn category_icon(category_id: Snowflake, filename: &str) -> String {
    format!("category/{}/icon/{}", category_id, sanitize_filename(filename))
}

/// Relative path for a server image file (icon or banner)
#[must_use]
pub fn server_image(server_id: Snowflake, field: ImageField, filename: &str) -> String {
    format!(
        "server/{}/{}/{}",
        server_id,
        field.segment(),
        sanitize_filename(filename)
    )
}
