//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Category not found: {0}")]
    CategoryNotFound(Snowflake),

    #[error("Server not found: {0}")]
    ServerNotFound(Snowflake),

    #[error("Channel not found: {0}")]
    ChannelNotFound(Snowflake),

    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Member not found in server")]
    MemberNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("The maximum image size allowed is {max}x{max} - size of the image uploaded: {width}x{height}")]
    ImageTooLarge { max: u32, width: u32, height: u32 },

    #[error("Unsupported file extension '{extension}'. Supported extensions: .jpg, .jpeg, .png, .gif")]
    UnsupportedImageExtension { extension: String },

    #[error("Could not decode uploaded image: {0}")]
    InvalidImageData(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Already a member of this server")]
    AlreadyMember,

    #[error("Category name already in use")]
    CategoryNameExists,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Not server owner")]
    NotServerOwner,

    #[error("Owner cannot leave an owned server")]
    OwnerCannotLeave,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::ServerNotFound(_) => "UNKNOWN_SERVER",
            Self::ChannelNotFound(_) => "UNKNOWN_CHANNEL",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::MemberNotFound => "UNKNOWN_MEMBER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::ImageTooLarge { .. } => "IMAGE_TOO_LARGE",
            Self::UnsupportedImageExtension { .. } => "UNSUPPORTED_IMAGE_EXTENSION",
            Self::InvalidImageData(_) => "INVALID_IMAGE_DATA",

            // Conflict
            Self::AlreadyMember => "ALREADY_MEMBER",
            Self::CategoryNameExists => "CATEGORY_NAME_EXISTS",

            // Business Rules
            Self::NotServerOwner => "NOT_SERVER_OWNER",
            Self::OwnerCannotLeave => "OWNER_CANNOT_LEAVE",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CategoryNotFound(_)
                | Self::ServerNotFound(_)
                | Self::ChannelNotFound(_)
                | Self::UserNotFound(_)
                | Self::MemberNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::ImageTooLarge { .. }
                | Self::UnsupportedImageExtension { .. }
                | Self::InvalidImageData(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotServerOwner | Self::OwnerCannotLeave)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AlreadyMember | Self::CategoryNameExists)
    }
}
