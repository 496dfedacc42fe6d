//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Category, Channel, Server, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Server Query Pipeline
// ============================================================================

/// Declarative query descriptor for server listings
///
/// Built as a pure pipeline: each stage consumes the descriptor and returns
/// a new one, so no shared collection is mutated across branches. The `id`
/// restriction applies before `limit` truncation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerQuery {
    /// Exact, case-sensitive category name match
    pub category_name: Option<String>,
    /// Restrict to servers this user is a member of
    pub member_id: Option<Snowflake>,
    /// Annotate each row with its member count
    pub with_member_count: bool,
    /// Restrict to a single server id
    pub id: Option<Snowflake>,
    /// Truncate the result set
    pub limit: Option<i64>,
}

impl ServerQuery {
    /// Restrict to servers whose category name matches exactly
    #[must_use]
    pub fn with_category(mut self, name: impl Into<String>) -> Self {
        self.category_name = Some(name.into());
        self
    }

    /// Restrict to servers where the given user is a member
    #[must_use]
    pub fn for_member(mut self, user_id: Snowflake) -> Self {
        self.member_id = Some(user_id);
        self
    }

    /// Annotate each result with its member count
    #[must_use]
    pub fn counting_members(mut self) -> Self {
        self.with_member_count = true;
        self
    }

    /// Restrict to the single server with this id
    #[must_use]
    pub fn with_id(mut self, id: Snowflake) -> Self {
        self.id = Some(id);
        self
    }

    /// Truncate the result set to at most `limit` leading rows
    #[must_use]
    pub fn take(mut self, limit: i64) -> Self {
        self.limit = Some(limit.max(0));
        self
    }
}

/// One server listing row, optionally annotated with its member count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerListing {
    pub server: Server,
    /// Present when the query requested member counting
    pub member_count: Option<i64>,
}

// ============================================================================
// Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find category by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Category>>;

    /// List all categories ordered by id
    async fn find_all(&self) -> RepoResult<Vec<Category>>;

    /// Create a new category
    async fn create(&self, category: &Category) -> RepoResult<()>;

    /// Update an existing category
    async fn update(&self, category: &Category) -> RepoResult<()>;

    /// Delete a category (cascades to its servers)
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Server Repository
// ============================================================================

#[async_trait]
pub trait ServerRepository: Send + Sync {
    /// Find server by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Server>>;

    /// List all servers in a category ordered by id
    async fn find_by_category(&self, category_id: Snowflake) -> RepoResult<Vec<Server>>;

    /// Execute a listing query built from the pure pipeline
    async fn search(&self, query: &ServerQuery) -> RepoResult<Vec<ServerListing>>;

    /// Create a new server
    async fn create(&self, server: &Server) -> RepoResult<()>;

    /// Update an existing server
    async fn update(&self, server: &Server) -> RepoResult<()>;

    /// Delete a server (cascades to channels and memberships)
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Channel Repository
// ============================================================================

#[async_trait]
pub trait ChannelRepository: Send + Sync {
    /// Find channel by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Channel>>;

    /// List all channels in a server ordered by id
    async fn find_by_server(&self, server_id: Snowflake) -> RepoResult<Vec<Channel>>;

    /// Create a new channel
    async fn create(&self, channel: &Channel) -> RepoResult<()>;

    /// Update an existing channel
    async fn update(&self, channel: &Channel) -> RepoResult<()>;

    /// Delete a channel
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Check membership
    async fn is_member(&self, server_id: Snowflake, user_id: Snowflake) -> RepoResult<bool>;

    /// Member user ids of one server, ordered by user id
    async fn member_ids(&self, server_id: Snowflake) -> RepoResult<Vec<Snowflake>>;

    /// Member user ids for a batch of servers, as (server_id, user_id) pairs
    async fn member_ids_for_servers(
        &self,
        server_ids: &[Snowflake],
    ) -> RepoResult<Vec<(Snowflake, Snowflake)>>;

    /// Add a user to a server's member set
    async fn add(&self, server_id: Snowflake, user_id: Snowflake) -> RepoResult<()>;

    /// Remove a user from a server's member set
    async fn remove(&self, server_id: Snowflake, user_id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;
}
