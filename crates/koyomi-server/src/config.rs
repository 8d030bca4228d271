//! Server configuration

use std::collections::HashMap;
use std::net::SocketAddr;

use config::{Config, ConfigError, Environment, File};
use koyomi_core::Locale;
use serde::Deserialize;

/// Prefix of the environment variables read by [`ServerConfig::load`].
pub const ENV_PREFIX: &str = "KOYOMI";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// REST API address
    #[serde(default = "default_rest_addr")]
    pub rest_addr: SocketAddr,

    /// PostgreSQL URL; events are kept in memory when unset
    #[serde(default)]
    pub database_url: Option<String>,

    /// Connection pool size
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Origins allowed by CORS
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// Label language of calendar and holiday responses
    #[serde(default)]
    pub locale: Locale,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,

    /// Apply pending migrations at startup
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

fn default_rest_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_max_connections() -> u32 {
    5
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            rest_addr: default_rest_addr(),
            database_url: None,
            max_connections: default_max_connections(),
            allowed_origins: default_allowed_origins(),
            locale: Locale::default(),
            log_format: LogFormat::default(),
            run_migrations: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from files and the process environment.
    ///
    /// Sources, later overriding earlier:
    /// 1. `config/default.toml`
    /// 2. `config/{KOYOMI_ENV}.toml` (`development` when unset)
    /// 3. `KOYOMI_*` environment variables, e.g. `KOYOMI_DATABASE_URL`
    /// 4. `PORT`, which replaces the port of `rest_addr`
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("KOYOMI_ENV").unwrap_or_else(|_| "development".into());
        let mut config = Self::from_sources("config", &env, None)?;
        config.override_port(std::env::var("PORT").ok().as_deref())?;
        Ok(config)
    }

    /// Load from `{dir}/default.toml`, `{dir}/{env}.toml` and `KOYOMI_*`
    /// variables.  `vars` replaces the process environment when given.
    pub fn from_sources(
        dir: &str,
        env: &str,
        vars: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(&format!("{dir}/default")).required(false))
            .add_source(File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("allowed_origins")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?
            .try_deserialize()
    }

    /// Replace the port of `rest_addr` with `port`, if given.  A blank value
    /// counts as unset.
    pub fn override_port(&mut self, port: Option<&str>) -> Result<(), ConfigError> {
        if let Some(port) = port.filter(|p| !p.trim().is_empty()) {
            let port: u16 = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::Message(format!("invalid PORT value {port:?}")))?;
            self.rest_addr.set_port(port);
        }
        Ok(())
    }
}
