//! Upload validators

mod image;

pub use image::{
    validate_icon_image_size, validate_image_file_extension, ALLOWED_IMAGE_EXTENSIONS,
    MAX_ICON_DIMENSION,
};
