//! Service configuration loaded via OrthoConfig.
//!
//! Values layer CLI flags over `WEBINARS_*` environment variables over
//! defaults. Optional fields fall back to the defaults exposed through the
//! accessor methods, so callers never see an unset value.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_CHECKOUT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_ID: &str = "test-user";

/// Runtime settings for the webinar service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "WEBINARS")]
pub struct AppSettings {
    /// Socket address the HTTP server listens on.
    pub bind_addr: Option<SocketAddr>,
    /// PostgreSQL connection string. Webinars are kept in memory when unset.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Seconds a request waits for a pooled connection.
    pub db_checkout_timeout_secs: Option<u64>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = true)]
    pub run_migrations: bool,
    /// User every request acts as.
    pub default_user_id: Option<String>,
}

impl AppSettings {
    /// Return the configured bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
            .unwrap_or_else(|| SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)))
    }

    /// Return the database URL, if one was configured.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Return the pool size, falling back to the default.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }

    /// Return the pool checkout timeout, falling back to thirty seconds.
    pub fn db_checkout_timeout(&self) -> Duration {
        Duration::from_secs(
            self.db_checkout_timeout_secs
                .unwrap_or(DEFAULT_CHECKOUT_TIMEOUT_SECS),
        )
    }

    /// Return the user every request acts as.
    pub fn default_user_id(&self) -> &str {
        self.default_user_id.as_deref().unwrap_or(DEFAULT_USER_ID)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 6] = [
        "WEBINARS_BIND_ADDR",
        "WEBINARS_DATABASE_URL",
        "WEBINARS_DB_MAX_CONNECTIONS",
        "WEBINARS_DB_CHECKOUT_TIMEOUT_SECS",
        "WEBINARS_RUN_MIGRATIONS",
        "WEBINARS_DEFAULT_USER_ID",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("webinars")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "0.0.0.0:8080".parse().expect("addr"));
        assert_eq!(settings.database_url(), None);
        assert_eq!(settings.db_max_connections(), DEFAULT_MAX_CONNECTIONS);
        assert_eq!(settings.db_checkout_timeout(), Duration::from_secs(30));
        assert!(settings.run_migrations);
        assert_eq!(settings.default_user_id(), "test-user");
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("WEBINARS_BIND_ADDR", Some("127.0.0.1:9090".to_owned())),
            (
                "WEBINARS_DATABASE_URL",
                Some("postgres://localhost/webinars".to_owned()),
            ),
            ("WEBINARS_DB_MAX_CONNECTIONS", Some("4".to_owned())),
            ("WEBINARS_DB_CHECKOUT_TIMEOUT_SECS", Some("5".to_owned())),
            ("WEBINARS_RUN_MIGRATIONS", Some("false".to_owned())),
            ("WEBINARS_DEFAULT_USER_ID", Some("alice".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr(),
            "127.0.0.1:9090".parse().expect("addr")
        );
        assert_eq!(
            settings.database_url(),
            Some("postgres://localhost/webinars")
        );
        assert_eq!(settings.db_max_connections(), 4);
        assert_eq!(settings.db_checkout_timeout(), Duration::from_secs(5));
        assert!(!settings.run_migrations);
        assert_eq!(settings.default_user_id(), "alice");
    }
}
