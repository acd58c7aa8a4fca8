//! Driving port for changing a webinar's seat capacity.

use async_trait::async_trait;

use crate::domain::{ChangeSeatsError, User, WebinarId};

/// Command asking to set a webinar's seat count.
///
/// `seats` is any integer the caller sent. Negative or oversized values are
/// not rejected here; they reach the use case so the ordered rules decide
/// which refusal applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSeatsRequest {
    /// User on whose behalf the change runs.
    pub user: User,
    /// Webinar to resize.
    pub webinar_id: WebinarId,
    /// Requested seat count.
    pub seats: i64,
}

/// Use-case entry point consumed by inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebinarSeatsCommand: Send + Sync {
    /// Validate and apply a seat change.
    ///
    /// Returns the first violated rule as a [`ChangeSeatsError`] variant; on
    /// error nothing has been written.
    async fn change_seats(&self, request: ChangeSeatsRequest) -> Result<(), ChangeSeatsError>;
}
