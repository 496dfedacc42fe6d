//! Domain entities - core business objects

mod category;
mod channel;
mod images;
mod server;
mod user;

pub use category::Category;
pub use channel::Channel;
pub use images::{HasImages, ImageField};
pub use server::Server;
pub use user::User;
