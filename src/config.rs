use std::env;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use dotenvy::dotenv;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum StoreBackend {
    Mysql,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub store_backend: StoreBackend,
    pub database_url: Option<String>,
    pub database_max_connections: u32,

    pub api_prefix: String,

    // Rate limiting, per client IP; 0 disables
    pub rate_api_per_min: u32,

    pub log_dir: String,
    pub log_level: tracing::Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "0.0.0.0:8000".to_string(),
            store_backend: StoreBackend::Mysql,
            database_url: None,
            database_max_connections: 10,
            api_prefix: "/api".to_string(),
            rate_api_per_min: 600,
            log_dir: "logs".to_string(),
            log_level: tracing::Level::INFO,
        }
    }
}

/// Parse `key` if set, otherwise keep `default`.
fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{} has invalid value '{}': {}", key, raw, e)),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default();
        let config = Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or(defaults.server_addr),
            store_backend: parse_var("STORE_BACKEND", defaults.store_backend)?,
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            database_max_connections: parse_var(
                "DATABASE_MAX_CONNECTIONS",
                defaults.database_max_connections,
            )?,
            api_prefix: env::var("API_PREFIX").unwrap_or(defaults.api_prefix),
            rate_api_per_min: parse_var("RATE_API_PER_MIN", defaults.rate_api_per_min)?,
            log_dir: env::var("LOG_DIR").unwrap_or(defaults.log_dir),
            log_level: parse_var("LOG_LEVEL", defaults.log_level)?,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.store_backend == StoreBackend::Mysql && self.database_url.is_none() {
            bail!("DATABASE_URL must be set when STORE_BACKEND=mysql");
        }
        if !self.api_prefix.starts_with('/') {
            bail!("API_PREFIX must start with '/', got '{}'", self.api_prefix);
        }
        Ok(())
    }

    pub fn database_url(&self) -> Result<&str> {
        self.database_url
            .as_deref()
            .context("DATABASE_URL must be set")
    }

    /// Schema named in the path of `DATABASE_URL`, if any.
    pub fn database_name(&self) -> Option<&str> {
        let url = self.database_url.as_deref()?;
        let (_, rest) = url.split_once("://")?;
        let (_, path) = rest.split_once('/')?;
        let name = path.split(['?', '#']).next().unwrap_or_default();
        (!name.is_empty()).then_some(name)
    }
}
