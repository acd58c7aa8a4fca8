//! Webinar entity.
//!
//! A [`Webinar`] is an immutable value: every field is read through an
//! accessor and the seat count only changes by deriving a new value with
//! [`Webinar::with_seats`]. Construction checks structural shape (a title and
//! ordered dates); capacity rules live in the seat-change use case because a
//! value that is fine at creation time may still be refused as a change.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::UserId;

/// Validation errors raised by [`WebinarId::new`] and [`Webinar::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebinarValidationError {
    /// The identifier is empty.
    #[error("webinar id must not be empty")]
    EmptyId,
    /// The identifier carries leading or trailing whitespace.
    #[error("webinar id must not contain surrounding whitespace")]
    PaddedId,
    /// The title is empty once trimmed.
    #[error("webinar title must not be empty")]
    EmptyTitle,
    /// `end_date` precedes `start_date`.
    #[error("webinar must not end before it starts")]
    EndsBeforeStart,
}

/// Opaque webinar identifier, assigned at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WebinarId(String);

impl WebinarId {
    /// Validate and construct a [`WebinarId`].
    ///
    /// # Examples
    /// ```
    /// use webinars::domain::WebinarId;
    ///
    /// let id = WebinarId::new("webinar-id").expect("valid id");
    /// assert_eq!(id.as_ref(), "webinar-id");
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Self, WebinarValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(WebinarValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(WebinarValidationError::PaddedId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for WebinarId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for WebinarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<WebinarId> for String {
    fn from(value: WebinarId) -> Self {
        value.0
    }
}

impl TryFrom<String> for WebinarId {
    type Error = WebinarValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Property bag a [`Webinar`] is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebinarProps {
    /// Identifier assigned at creation.
    pub id: WebinarId,
    /// User who owns the webinar and may resize it.
    pub organizer_id: UserId,
    /// Display title; must not be blank.
    pub title: String,
    /// Scheduled start.
    pub start_date: DateTime<Utc>,
    /// Scheduled end; never before `start_date`.
    pub end_date: DateTime<Utc>,
    /// Seat capacity.
    pub seats: u32,
}

/// A scheduled webinar and its seat capacity.
///
/// ## Invariants
/// - `title` is non-empty once trimmed.
/// - `end_date >= start_date`.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use webinars::domain::{UserId, Webinar, WebinarId, WebinarProps};
///
/// let webinar = Webinar::new(WebinarProps {
///     id: WebinarId::new("webinar-id").expect("id"),
///     organizer_id: UserId::new("alice").expect("organizer"),
///     title: "Webinar title".to_owned(),
///     start_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
///     end_date: Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap(),
///     seats: 100,
/// })
/// .expect("valid webinar");
///
/// let resized = webinar.with_seats(200);
/// assert_eq!(webinar.seats(), 100);
/// assert_eq!(resized.seats(), 200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WebinarProps", into = "WebinarProps")]
pub struct Webinar {
    props: WebinarProps,
}

impl Webinar {
    /// Build a webinar after checking its structural shape.
    pub fn new(props: WebinarProps) -> Result<Self, WebinarValidationError> {
        if props.title.trim().is_empty() {
            return Err(WebinarValidationError::EmptyTitle);
        }
        if props.end_date < props.start_date {
            return Err(WebinarValidationError::EndsBeforeStart);
        }
        Ok(Self { props })
    }

    /// Borrow every property at once.
    pub fn props(&self) -> &WebinarProps {
        &self.props
    }

    /// Webinar identifier.
    pub fn id(&self) -> &WebinarId {
        &self.props.id
    }

    /// Identifier of the organizing user.
    pub fn organizer_id(&self) -> &UserId {
        &self.props.organizer_id
    }

    /// Display title.
    pub fn title(&self) -> &str {
        self.props.title.as_str()
    }

    /// Scheduled start.
    pub fn start_date(&self) -> DateTime<Utc> {
        self.props.start_date
    }

    /// Scheduled end.
    pub fn end_date(&self) -> DateTime<Utc> {
        self.props.end_date
    }

    /// Current seat capacity.
    pub fn seats(&self) -> u32 {
        self.props.seats
    }

    /// Whether `user_id` owns this webinar.
    pub fn is_organized_by(&self, user_id: &UserId) -> bool {
        self.props.organizer_id == *user_id
    }

    /// Derive a copy with a different seat count and every other field kept.
    #[must_use]
    pub fn with_seats(&self, seats: u32) -> Self {
        let mut props = self.props.clone();
        props.seats = seats;
        Self { props }
    }
}

impl TryFrom<WebinarProps> for Webinar {
    type Error = WebinarValidationError;

    fn try_from(value: WebinarProps) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Webinar> for WebinarProps {
    fn from(value: Webinar) -> Self {
        value.props
    }
}
