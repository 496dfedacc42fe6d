//! PostgreSQL repository implementations

mod category;
mod channel;
mod error;
mod member;
mod server;
mod user;

pub use category::PgCategoryRepository;
pub use channel::PgChannelRepository;
pub use member::PgMemberRepository;
pub use server::PgServerRepository;
pub use user::PgUserRepository;
