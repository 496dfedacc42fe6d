//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod category;
pub mod channel;
pub mod context;
pub mod error;
pub mod listing;
pub mod server;

// Re-export all services for convenience
pub use category::CategoryService;
pub use channel::ChannelService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use listing::ListingService;
pub use server::ServerService;
