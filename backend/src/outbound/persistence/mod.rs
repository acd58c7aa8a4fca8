//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories here are thin translators between Diesel rows and domain
//! types. Row structs (`models.rs`) and table definitions (`schema.rs`)
//! never leave this module; every database failure is mapped onto the
//! owning port's error type.
//!
//! ```no_run
//! use std::time::Duration;
//! use webinars::outbound::persistence::{DbPool, DieselWebinarRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PoolConfig::new("postgres://localhost/webinars", 10, Duration::from_secs(30));
//! let pool = DbPool::new(config).await?;
//! let repo = DieselWebinarRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_webinar_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_webinar_repository::DieselWebinarRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
