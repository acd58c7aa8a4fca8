//! Requesting user identity.
//!
//! The seat-change flow only needs to know *who* is asking, so a user is
//! reduced to its opaque identifier. Identifiers are issued elsewhere and are
//! not required to be UUIDs.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors returned when constructing a [`UserId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// The identifier is empty.
    #[error("user id must not be empty")]
    EmptyId,
    /// The identifier carries leading or trailing whitespace.
    #[error("user id must not contain surrounding whitespace")]
    PaddedId,
}

/// Opaque identifier of a user.
///
/// # Examples
/// ```
/// use webinars::domain::UserId;
///
/// let id = UserId::new("alice").expect("valid id");
/// assert_eq!(id.as_ref(), "alice");
/// assert!(UserId::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::PaddedId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// The user on whose behalf a command runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
}

impl User {
    /// Build a user from its identifier.
    pub fn new(id: UserId) -> Self {
        Self { id }
    }

    /// Identifier of the user.
    pub fn id(&self) -> &UserId {
        &self.id
    }
}

impl From<UserId> for User {
    fn from(id: UserId) -> Self {
        Self::new(id)
    }
}
