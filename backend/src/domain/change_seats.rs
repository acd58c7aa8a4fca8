//! Seat-change use case.
//!
//! [`ChangeSeats`] loads a webinar through the [`WebinarRepository`] port,
//! runs an ordered validation chain, and persists the new capacity only when
//! every check passes:
//!
//! 1. the webinar exists;
//! 2. the requester organizes it;
//! 3. the new count is not lower than the current one;
//! 4. the new count does not exceed [`MAX_WEBINAR_SEATS`].
//!
//! The first failing check wins and nothing is written. An equal seat count
//! is accepted and written back unchanged.
//!
//! Known limitation: the read-then-write sequence carries no version token,
//! so two concurrent changes to the same webinar can lose an update.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    ChangeSeatsRequest, WebinarRepository, WebinarRepositoryError, WebinarSeatsCommand,
};
use crate::domain::{Error, UserId, Webinar};

/// Upper bound on a webinar's seat count after a change.
pub const MAX_WEBINAR_SEATS: u32 = 1000;

/// Why a seat change was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChangeSeatsError {
    /// No webinar exists for the requested id.
    #[error("Webinar not found")]
    WebinarNotFound,
    /// The requester is not the webinar's organizer.
    #[error("User is not allowed to update this webinar")]
    WebinarNotOrganizer,
    /// The requested count is lower than the current one.
    #[error("You cannot reduce the number of seats")]
    WebinarReduceSeats,
    /// The requested count is above [`MAX_WEBINAR_SEATS`].
    #[error("Webinar must have at most {} seats", MAX_WEBINAR_SEATS)]
    WebinarTooManySeats,
    /// The storage adapter failed; passed through unchanged.
    #[error(transparent)]
    Repository(#[from] WebinarRepositoryError),
}

/// Payload-free discriminant of [`ChangeSeatsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeSeatsErrorKind {
    /// See [`ChangeSeatsError::WebinarNotFound`].
    WebinarNotFound,
    /// See [`ChangeSeatsError::WebinarNotOrganizer`].
    WebinarNotOrganizer,
    /// See [`ChangeSeatsError::WebinarReduceSeats`].
    WebinarReduceSeats,
    /// See [`ChangeSeatsError::WebinarTooManySeats`].
    WebinarTooManySeats,
    /// See [`ChangeSeatsError::Repository`].
    Repository,
}

impl ChangeSeatsError {
    /// Discriminant for callers that only need to branch on the failure.
    pub fn kind(&self) -> ChangeSeatsErrorKind {
        match self {
            Self::WebinarNotFound => ChangeSeatsErrorKind::WebinarNotFound,
            Self::WebinarNotOrganizer => ChangeSeatsErrorKind::WebinarNotOrganizer,
            Self::WebinarReduceSeats => ChangeSeatsErrorKind::WebinarReduceSeats,
            Self::WebinarTooManySeats => ChangeSeatsErrorKind::WebinarTooManySeats,
            Self::Repository(_) => ChangeSeatsErrorKind::Repository,
        }
    }
}

impl From<ChangeSeatsError> for Error {
    fn from(value: ChangeSeatsError) -> Self {
        let message = value.to_string();
        match value {
            ChangeSeatsError::WebinarNotFound => Error::not_found(message),
            ChangeSeatsError::WebinarNotOrganizer => Error::unauthorized(message),
            ChangeSeatsError::WebinarReduceSeats => {
                Error::invalid_request(message).with_details(json!({
                    "field": "seats",
                    "code": "seats_reduced",
                }))
            }
            ChangeSeatsError::WebinarTooManySeats => {
                Error::invalid_request(message).with_details(json!({
                    "field": "seats",
                    "code": "too_many_seats",
                    "max": MAX_WEBINAR_SEATS,
                }))
            }
            ChangeSeatsError::Repository(WebinarRepositoryError::Connection { message }) => {
                Error::service_unavailable(format!("webinar repository unavailable: {message}"))
            }
            ChangeSeatsError::Repository(err) => {
                Error::internal(format!("webinar repository error: {err}"))
            }
        }
    }
}

/// Seat-change use case over a webinar repository.
#[derive(Clone)]
pub struct ChangeSeats<R> {
    webinars: Arc<R>,
}

impl<R> ChangeSeats<R> {
    /// Create the use case over the given repository.
    pub fn new(webinars: Arc<R>) -> Self {
        Self { webinars }
    }
}

impl<R> ChangeSeats<R>
where
    R: WebinarRepository,
{
    /// Run the validation chain and persist the new seat count.
    pub async fn execute(&self, request: ChangeSeatsRequest) -> Result<(), ChangeSeatsError> {
        let ChangeSeatsRequest {
            user,
            webinar_id,
            seats,
        } = request;
        debug!(%webinar_id, user_id = %user.id(), seats, "changing webinar seats");

        let Some(webinar) = self.webinars.find_by_id(&webinar_id).await? else {
            warn!(%webinar_id, "seat change refused: webinar not found");
            return Err(ChangeSeatsError::WebinarNotFound);
        };

        let accepted = check_seat_change(&webinar, user.id(), seats).inspect_err(|err| {
            warn!(
                %webinar_id,
                user_id = %user.id(),
                requested = seats,
                current = webinar.seats(),
                reason = %err,
                "seat change refused"
            );
        })?;

        self.webinars.update(&webinar.with_seats(accepted)).await?;
        info!(%webinar_id, previous = webinar.seats(), seats, "webinar seats updated");
        Ok(())
    }
}

/// Authorization and capacity checks, in their fixed order.
///
/// Returns the accepted count, which lies between the current count and
/// [`MAX_WEBINAR_SEATS`].
fn check_seat_change(
    webinar: &Webinar,
    user_id: &UserId,
    seats: i64,
) -> Result<u32, ChangeSeatsError> {
    if !webinar.is_organized_by(user_id) {
        return Err(ChangeSeatsError::WebinarNotOrganizer);
    }
    if seats < i64::from(webinar.seats()) {
        return Err(ChangeSeatsError::WebinarReduceSeats);
    }
    if seats > i64::from(MAX_WEBINAR_SEATS) {
        return Err(ChangeSeatsError::WebinarTooManySeats);
    }
    u32::try_from(seats).map_err(|_| ChangeSeatsError::WebinarReduceSeats)
}

#[async_trait]
impl<R> WebinarSeatsCommand for ChangeSeats<R>
where
    R: WebinarRepository,
{
    async fn change_seats(&self, request: ChangeSeatsRequest) -> Result<(), ChangeSeatsError> {
        self.execute(request).await
    }
}

#[cfg(test)]
#[path = "change_seats_tests.rs"]
mod tests;
