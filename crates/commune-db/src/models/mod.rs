//! Database models - SQLx-compatible structs for PostgreSQL tables

mod category;
mod channel;
mod server;
mod user;

pub use category::CategoryModel;
pub use channel::ChannelModel;
pub use server::{ServerListingModel, ServerModel};
pub use user::UserModel;
