//! bb8 pool of async Diesel connections for the webinar store.
//!
//! The pool is sized from [`AppSettings`]: `db_max_connections` bounds it and
//! `db_checkout_timeout_secs` limits how long a request waits for a
//! connection before the repository reports the store as unreachable.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use thiserror::Error;

use crate::settings::AppSettings;

/// Failures building the pool or checking out a connection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// No connection became available before the checkout timeout.
    #[error("failed to get connection from pool: {message}")]
    Checkout {
        /// Reason reported by bb8.
        message: String,
    },

    /// The URL was rejected or the pool could not start.
    #[error("failed to build connection pool: {message}")]
    Build {
        /// Reason reported by bb8.
        message: String,
    },
}

/// Where the pool connects and how large it grows.
///
/// ```
/// use std::time::Duration;
/// use webinars::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://localhost/webinars", 4, Duration::from_secs(5));
/// assert_eq!(config.database_url(), "postgres://localhost/webinars");
/// assert_eq!(config.max_size(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    checkout_timeout: Duration,
}

impl PoolConfig {
    /// Describe a pool of at most `max_size` connections to `database_url`.
    ///
    /// A zero `max_size` is raised to one so bb8 accepts the builder.
    pub fn new(
        database_url: impl Into<String>,
        max_size: u32,
        checkout_timeout: Duration,
    ) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: max_size.max(1),
            checkout_timeout,
        }
    }

    /// Pool settings for the configured database, or `None` when webinars
    /// are kept in memory.
    pub fn from_settings(settings: &AppSettings) -> Option<Self> {
        settings.database_url().map(|url| {
            Self::new(
                url,
                settings.db_max_connections(),
                settings.db_checkout_timeout(),
            )
        })
    }

    /// PostgreSQL connection string.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Upper bound on open connections.
    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    /// Longest wait for a free connection.
    pub fn checkout_timeout(&self) -> Duration {
        self.checkout_timeout
    }
}

/// Shared pool of async PostgreSQL connections.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build the pool. Connections are opened lazily on first checkout.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Build`] when bb8 rejects the configuration.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.database_url);
        let inner = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.checkout_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::Build {
                message: err.to_string(),
            })?;

        Ok(Self { inner })
    }

    /// Check out a connection.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Checkout`] when no connection frees up in time
    /// or a new one cannot be opened.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner.get().await.map_err(|err| PoolError::Checkout {
            message: err.to_string(),
        })
    }
}
