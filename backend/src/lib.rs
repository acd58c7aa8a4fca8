//! Webinar seat management service.
//!
//! Hexagonal layout: `domain` owns the aggregate, ports and use case;
//! `inbound` exposes HTTP; `outbound` stores webinars in memory or
//! PostgreSQL.

#![warn(missing_docs)]

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
