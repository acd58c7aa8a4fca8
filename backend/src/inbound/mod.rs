//! Inbound adapters that translate external requests into domain calls.
//!
//! HTTP handlers live under [`http`] and depend only on driving ports.

pub mod http;
