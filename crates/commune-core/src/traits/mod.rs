//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CategoryRepository, ChannelRepository, MemberRepository, RepoResult, ServerListing,
    ServerQuery, ServerRepository, UserRepository,
};
