//! Configuration for Productos API

use core_config::{app_info, env_or_default, env_parse_or, server::ServerConfig, AppInfo, FromEnv};
use domain_products::DEFAULT_TIMESTAMP_FORMAT;
use std::path::PathBuf;
use std::time::Duration;

pub use core_config::Environment;

pub const SEED_PATH_VAR: &str = "PRODUCTS_SEED_PATH";
pub const TIMESTAMP_FORMAT_VAR: &str = "INGESTION_TIMESTAMP_FORMAT";
pub const SHUTDOWN_TIMEOUT_VAR: &str = "SHUTDOWN_TIMEOUT_SECS";

const DEFAULT_SEED_PATH: &str = "data/productos.json";
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// JSON file the catalog is seeded from at startup
    pub seed_path: PathBuf,
    /// strftime pattern for `ingestion_timestamp`
    pub timestamp_format: String,
    pub shutdown_timeout: Duration,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        let seed_path = PathBuf::from(env_or_default(SEED_PATH_VAR, DEFAULT_SEED_PATH));
        let timestamp_format = env_or_default(TIMESTAMP_FORMAT_VAR, DEFAULT_TIMESTAMP_FORMAT);
        let shutdown_timeout = Duration::from_secs(env_parse_or(
            SHUTDOWN_TIMEOUT_VAR,
            DEFAULT_SHUTDOWN_TIMEOUT_SECS,
        )?);

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            seed_path,
            timestamp_format,
            shutdown_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset(
            [
                "APP_ENV",
                "HOST",
                "PORT",
                SEED_PATH_VAR,
                TIMESTAMP_FORMAT_VAR,
                SHUTDOWN_TIMEOUT_VAR,
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.server.port, 3000);
                assert_eq!(config.environment, Environment::Development);
                assert_eq!(config.seed_path, PathBuf::from("data/productos.json"));
                assert_eq!(config.timestamp_format, DEFAULT_TIMESTAMP_FORMAT);
                assert_eq!(config.shutdown_timeout, Duration::from_secs(30));
                assert_eq!(config.app.name, "productos_api");
            },
        );
    }

    #[test]
    fn test_overrides() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("PORT", Some("8080")),
                (SEED_PATH_VAR, Some("/srv/seed.json")),
                (TIMESTAMP_FORMAT_VAR, Some("%Y-%m-%d %H:%M:%S")),
                (SHUTDOWN_TIMEOUT_VAR, Some("5")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.environment.is_production());
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.seed_path, PathBuf::from("/srv/seed.json"));
                assert_eq!(config.timestamp_format, "%Y-%m-%d %H:%M:%S");
                assert_eq!(config.shutdown_timeout, Duration::from_secs(5));
            },
        );
    }

    #[test]
    fn test_unparsable_timeout_is_an_error() {
        temp_env::with_var(SHUTDOWN_TIMEOUT_VAR, Some("soon"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
