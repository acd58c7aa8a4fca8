//! Domain primitives, ports and use cases.
//!
//! Purpose: hold the webinar aggregate and the seat-change use case free of
//! any transport or storage concern. Inbound adapters drive the domain
//! through [`ports::WebinarSeatsCommand`]; outbound adapters implement
//! [`ports::WebinarRepository`].
//!
//! Public surface:
//! - `Error`: transport-agnostic error payload.
//! - `ErrorCode`: stable error identifier.
//! - `Webinar`: the aggregate whose seats change.
//! - `ChangeSeats`: the seat-change use case.

pub mod change_seats;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod webinar;

pub use self::change_seats::{
    ChangeSeats, ChangeSeatsError, ChangeSeatsErrorKind, MAX_WEBINAR_SEATS,
};
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserValidationError};
pub use self::webinar::{Webinar, WebinarId, WebinarProps, WebinarValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use webinars::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("Webinar not found"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
