//! HTTP server configuration object.

use std::net::SocketAddr;

use webinars::domain::UserId;
use webinars::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) requester: UserId,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Configuration with the in-memory webinar store; every request acts
    /// as `requester`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, requester: UserId) -> Self {
        Self {
            bind_addr,
            requester,
            db_pool: None,
        }
    }

    /// Store webinars in PostgreSQL through this pool.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
