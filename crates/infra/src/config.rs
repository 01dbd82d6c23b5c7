//! Configuration loading and representation.
//!
//! Sources, lowest to highest precedence:
//! 1. built-in defaults,
//! 2. a TOML file (`catalog.toml`, or the path in `CATALOG_CONFIG`),
//! 3. `CATALOG_`-prefixed environment variables, nested with `__`
//!    (`CATALOG_SERVER__PORT=9000`, `CATALOG_DATABASE__URL=sqlite://catalog.db`).

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "CATALOG_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "catalog.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(#[from] figment::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite URL; `sqlite::memory:` keeps the catalog in process memory.
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Default filter directive; `RUST_LOG` overrides it.
    pub log_level: String,
    /// JSON lines when true, human-readable text otherwise.
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub telemetry: TelemetryConfig,
    /// Populate an empty store with the sample catalog at startup.
    pub seed_on_startup: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            telemetry: TelemetryConfig::default(),
            seed_on_startup: true,
        }
    }
}

impl CatalogConfig {
    /// Load from defaults, the config file and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// The layered provider stack used by [`CatalogConfig::load`].
    pub fn figment() -> Figment {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        Figment::from(Serialized::defaults(CatalogConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("CATALOG_").ignore(&["config"]).split("__"))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        Ok(figment.extract()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_without_file_or_env() {
        Jail::expect_with(|_jail| {
            let config: CatalogConfig = CatalogConfig::figment().extract()?;
            assert_eq!(config, CatalogConfig::default());
            assert_eq!(config.server.bind_addr(), "0.0.0.0:8080");
            assert_eq!(config.database.url, "sqlite::memory:");
            assert!(config.seed_on_startup);
            Ok(())
        });
    }

    #[test]
    fn file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "catalog.toml",
                r#"
                seed_on_startup = false

                [database]
                url = "sqlite://catalog.db"

                [telemetry]
                json = false
                "#,
            )?;

            let config: CatalogConfig = CatalogConfig::figment().extract()?;
            assert!(!config.seed_on_startup);
            assert_eq!(config.database.url, "sqlite://catalog.db");
            assert_eq!(config.database.max_connections, 5);
            assert!(!config.telemetry.json);
            assert_eq!(config.telemetry.log_level, "info");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "[server]\nport = 7000\nhost = \"127.0.0.1\"")?;
            jail.set_env("CATALOG_CONFIG", "custom.toml");
            jail.set_env("CATALOG_SERVER__PORT", "9000");
            jail.set_env("CATALOG_TELEMETRY__LOG_LEVEL", "debug");

            let config: CatalogConfig = CatalogConfig::figment().extract()?;
            assert_eq!(config.server.host, "127.0.0.1");
            assert_eq!(config.server.port, 9000);
            assert_eq!(config.telemetry.log_level, "debug");
            Ok(())
        });
    }

    #[test]
    fn malformed_values_are_load_errors() {
        Jail::expect_with(|jail| {
            jail.set_env("CATALOG_SERVER__PORT", "not-a-port");
            assert!(matches!(CatalogConfig::load(), Err(ConfigError::Load(_))));
            Ok(())
        });
    }
}
