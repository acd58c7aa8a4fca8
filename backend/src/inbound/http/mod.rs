//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod state;
pub mod webinars;

pub use crate::domain::ApiResult;
pub use error::{ErrorResponse, json_config};
