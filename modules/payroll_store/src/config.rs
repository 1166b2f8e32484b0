//! Configuration for the payroll store

use anyhow::Context;
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable prefix, e.g. `YEOCONNECT_DATABASE_URL`
pub const ENV_PREFIX: &str = "YEOCONNECT_";

/// Keys read from the environment; other `YEOCONNECT_*` variables are ignored
const ENV_KEYS: &[&str] = &[
    "database_url",
    "max_connections",
    "connect_timeout",
    "sqlx_logging",
];

/// Payroll store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Database connection URL
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Maximum pooled connections (in-memory SQLite always uses one)
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Timeout for acquiring a connection
    #[serde(default = "default_connect_timeout", with = "humantime_serde")]
    pub connect_timeout: Duration,

    /// Let sqlx log every statement
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            max_connections: default_max_connections(),
            connect_timeout: default_connect_timeout(),
            sqlx_logging: false,
        }
    }
}

impl StoreConfig {
    /// Configuration for a private in-memory SQLite database
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            ..Self::default()
        }
    }

    /// Layer defaults, an optional YAML file and `YEOCONNECT_*` environment variables
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).only(ENV_KEYS))
            .extract()
            .context("failed to load payroll store configuration")
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }

    /// Pool size after accounting for in-memory databases
    pub fn effective_max_connections(&self) -> u32 {
        if self.is_in_memory() {
            1
        } else {
            self.max_connections.max(1)
        }
    }
}

fn default_database_url() -> String {
    "sqlite://yeoconnect.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(8)
}
