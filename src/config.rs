use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::debug;

/// Env var naming a TOML file with database settings
pub const CONFIG_PATH_VAR: &str = "LIGHTBNB_CONFIG";

/// Env var holding a full connection URL; wins over the individual settings
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Connection settings for the LightBnB database
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    #[serde(skip)]
    pub url_override: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "vagrant".to_string(),
            password: "123".to_string(),
            database: "lightbnb".to_string(),
            max_connections: 5,
            acquire_timeout_secs: 30,
            url_override: None,
        }
    }
}

impl DatabaseConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse database config")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
    }

    /// Settings from `LIGHTBNB_CONFIG` (or defaults), with `DATABASE_URL` applied on top
    pub fn load() -> Result<Self> {
        let mut config = match env::var(CONFIG_PATH_VAR) {
            Ok(path) => {
                debug!("Loading database config from {}", path);
                Self::from_file(path)?
            }
            Err(_) => Self::default(),
        };
        config.url_override = env::var(DATABASE_URL_VAR).ok();
        Ok(config)
    }

    pub fn url(&self) -> String {
        match &self.url_override {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.database
            ),
        }
    }
}
