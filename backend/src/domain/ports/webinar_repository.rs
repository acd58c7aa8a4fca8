//! Port for webinar persistence.
//!
//! Adapters store whole [`Webinar`] values keyed by [`WebinarId`]. Lookups
//! report absence as `Ok(None)` so the caller owns not-found semantics, while
//! writes are strict: `create` refuses an existing id and `update` refuses an
//! unknown one.

use async_trait::async_trait;

use crate::domain::{Webinar, WebinarId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by webinar repository adapters.
    pub enum WebinarRepositoryError {
        /// The store could not be reached.
        Connection { message: String } =>
            "webinar repository connection failed: {message}",
        /// A query or mutation failed during execution.
        Query { message: String } =>
            "webinar repository query failed: {message}",
        /// `create` was called with an id that is already stored.
        DuplicateKey { id: String } => "webinar {id} already exists",
        /// `update` was called with an id that is not stored.
        NotFound { id: String } => "webinar {id} does not exist",
    }
}

/// Storage contract for webinars.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebinarRepository: Send + Sync {
    /// Fetch a webinar by id, returning `None` when it does not exist.
    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, WebinarRepositoryError>;

    /// Insert a new webinar.
    ///
    /// Fails with [`WebinarRepositoryError::DuplicateKey`] when the id is
    /// already taken.
    async fn create(&self, webinar: &Webinar) -> Result<(), WebinarRepositoryError>;

    /// Overwrite every field of an existing webinar, keyed by its id.
    ///
    /// Fails with [`WebinarRepositoryError::NotFound`] when no webinar has
    /// that id; adapters must never treat a missing row as success.
    async fn update(&self, webinar: &Webinar) -> Result<(), WebinarRepositoryError>;
}
