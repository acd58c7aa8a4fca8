//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see driving ports, so
//! they can be exercised with mocks and no I/O.

use std::sync::Arc;

use crate::domain::{User, UserId};
use crate::domain::ports::WebinarSeatsCommand;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Seat-change use case.
    pub seats: Arc<dyn WebinarSeatsCommand>,
    requester: UserId,
}

impl HttpState {
    /// Bundle the use case with the user every request acts as.
    ///
    /// The service has no authentication, so the requester comes from
    /// configuration and never from the request itself.
    pub fn new(seats: Arc<dyn WebinarSeatsCommand>, requester: UserId) -> Self {
        Self { seats, requester }
    }

    /// The user on whose behalf commands run.
    pub fn requester(&self) -> User {
        User::new(self.requester.clone())
    }
}
