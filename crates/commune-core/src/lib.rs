//! # commune-core
//!
//! Domain layer containing entities, value objects, repository traits, and
//! image validators. This crate has zero dependencies on infrastructure
//! (database, web framework, file storage, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod validation;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Category, Channel, HasImages, ImageField, Server, User};
pub use error::DomainError;
pub use traits::{
    CategoryRepository, ChannelRepository, MemberRepository, RepoResult, ServerListing,
    ServerQuery, ServerRepository, UserRepository,
};
pub use validation::{
    validate_icon_image_size, validate_image_file_extension, ALLOWED_IMAGE_EXTENSIONS,
    MAX_ICON_DIMENSION,
};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
