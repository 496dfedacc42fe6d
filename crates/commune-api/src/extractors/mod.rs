//! Request extractors
//!
//! Type-safe extraction of authentication, validated JSON bodies, and
//! multipart image uploads.

mod auth;
mod upload;
mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use upload::ImageUpload;
pub use validated::ValidatedJson;
