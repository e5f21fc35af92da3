//! Process configuration read from `CATEGORYDESK_*` environment variables.

use std::net::SocketAddr;

use thiserror::Error;

use categorydesk_observability::LogFormat;

pub const BIND_ADDR: &str = "CATEGORYDESK_BIND_ADDR";
pub const SEED_DATA: &str = "CATEGORYDESK_SEED_DATA";
pub const MAX_PAGE_SIZE: &str = "CATEGORYDESK_MAX_PAGE_SIZE";
pub const LOG_FORMAT: &str = "CATEGORYDESK_LOG_FORMAT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Load the demo dataset at startup.
    pub seed_data: bool,
    /// Upper bound applied to the SKU listing `limit`.
    pub max_page_size: u32,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            seed_data: true,
            max_page_size: 100,
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Read from the process environment. Call `dotenvy::dotenv()` first to
    /// pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup(BIND_ADDR) {
            config.bind_addr = parse(BIND_ADDR, &v)?;
        }
        if let Some(v) = lookup(SEED_DATA) {
            config.seed_data = parse(SEED_DATA, &v)?;
        }
        if let Some(v) = lookup(MAX_PAGE_SIZE) {
            config.max_page_size = parse(MAX_PAGE_SIZE, &v)?;
            if config.max_page_size == 0 {
                return Err(ConfigError::Invalid {
                    key: MAX_PAGE_SIZE,
                    value: v,
                    reason: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(v) = lookup(LOG_FORMAT) {
            config.log_format = parse(LOG_FORMAT, &v)?;
        }

        Ok(config)
    }
}

fn parse<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
