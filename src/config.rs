// src/config.rs

use dotenvy::dotenv;
use std::{env, fmt};

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string.
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub log_dir: String,
    /// Always at least 1.
    pub questions_per_page: usize,
    pub db_max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            rust_log: "info".to_string(),
            log_dir: "logs".to_string(),
            questions_per_page: 10,
            db_max_connections: 5,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    Missing { key: &'static str },
    /// A variable was set but could not be used.
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing { key } => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, value } => {
                write!(f, "invalid value for {}: {:?}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing {
                key: "DATABASE_URL",
            })?;

        let host = lookup("HOST").unwrap_or(defaults.host);

        let rust_log = lookup("RUST_LOG").unwrap_or(defaults.rust_log);

        let log_dir = lookup("LOG_DIR").unwrap_or(defaults.log_dir);

        let questions_per_page =
            parse_var(&lookup, "QUESTIONS_PER_PAGE", defaults.questions_per_page)?;
        if questions_per_page == 0 {
            return Err(ConfigError::Invalid {
                key: "QUESTIONS_PER_PAGE",
                value: questions_per_page.to_string(),
            });
        }

        Ok(Self {
            database_url,
            host,
            port: parse_var(&lookup, "PORT", defaults.port)?,
            rust_log,
            log_dir,
            questions_per_page,
            db_max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", defaults.db_max_connections)?,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
