//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use state_builders::build_http_state;
use webinars::Trace;
use webinars::inbound::http::json_config;
use webinars::inbound::http::state::HttpState;
use webinars::inbound::http::webinars::change_seats;

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Trace)
        .service(change_seats)
}

/// Construct an Actix HTTP server from the given configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = build_http_state(&config);

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(config.bind_addr)?
        .run();

    Ok(server)
}
