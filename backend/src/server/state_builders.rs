//! Builders wiring outbound adapters into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use webinars::domain::ChangeSeats;
use webinars::domain::ports::WebinarSeatsCommand;
use webinars::inbound::http::state::HttpState;
use webinars::outbound::memory::InMemoryWebinarRepository;
use webinars::outbound::persistence::DieselWebinarRepository;

use super::ServerConfig;

/// Pick the webinar repository and build the seat-change use case over it.
fn build_seats_command(config: &ServerConfig) -> Arc<dyn WebinarSeatsCommand> {
    match &config.db_pool {
        Some(pool) => {
            info!("webinars stored in PostgreSQL");
            Arc::new(ChangeSeats::new(Arc::new(DieselWebinarRepository::new(
                pool.clone(),
            ))))
        }
        None => {
            warn!("no database configured; webinars are kept in memory and start empty");
            Arc::new(ChangeSeats::new(Arc::new(
                InMemoryWebinarRepository::default(),
            )))
        }
    }
}

pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        build_seats_command(config),
        config.requester.clone(),
    ))
}
