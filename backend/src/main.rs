//! Webinar service entry point: loads settings, wires adapters and serves HTTP.

mod server;

use color_eyre::eyre::{WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use webinars::domain::UserId;
use webinars::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use webinars::settings::AppSettings;

#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let requester =
        UserId::new(settings.default_user_id()).wrap_err("invalid default user id")?;
    let bind_addr = settings.bind_addr();
    let mut config = ServerConfig::new(bind_addr, requester);

    if let Some(pool_config) = PoolConfig::from_settings(&settings) {
        if settings.run_migrations {
            run_pending_migrations(pool_config.database_url())
                .await
                .wrap_err("database migrations failed")?;
        }
        let pool = DbPool::new(pool_config)
            .await
            .wrap_err("failed to build database pool")?;
        config = config.with_db_pool(pool);
    }

    let server = create_server(config)?;
    info!(%bind_addr, "webinar service listening");
    server.await?;
    Ok(())
}
