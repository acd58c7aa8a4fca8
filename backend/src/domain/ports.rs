//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports ([`WebinarRepository`]) describe what the domain needs from
//! storage; driving ports ([`WebinarSeatsCommand`]) describe what inbound
//! adapters may ask of the domain. Each port exposes a typed error so
//! adapters map their failures into predictable variants.

mod macros;
mod webinar_repository;
mod webinar_seats_command;

pub(crate) use macros::define_port_error;

#[cfg(test)]
pub use webinar_repository::MockWebinarRepository;
pub use webinar_repository::{WebinarRepository, WebinarRepositoryError};
#[cfg(test)]
pub use webinar_seats_command::MockWebinarSeatsCommand;
pub use webinar_seats_command::{ChangeSeatsRequest, WebinarSeatsCommand};
