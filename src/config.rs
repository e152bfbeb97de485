use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

pub const BIND_ADDR_ENV: &str = "PROPERLY_BIND_ADDR";
pub const LISTINGS_URL_ENV: &str = "PROPERLY_LISTINGS_URL";
pub const FETCH_TIMEOUT_ENV: &str = "PROPERLY_FETCH_TIMEOUT_SECS";
pub const MAX_WORKERS_ENV: &str = "PROPERLY_MAX_WORKERS";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_LISTINGS_URL: &str = "http://127.0.0.1:5000/properties";
pub const DEFAULT_MAX_WORKERS: usize = 8;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub listings_url: Url,
    /// `None` means the fetch may block indefinitely.
    pub fetch_timeout: Option<Duration>,
    pub max_workers: usize,
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Invalid { key: &'static str, value: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value, reason } => {
                write!(f, "invalid {key}={value:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Reads configuration from the process environment.
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup(BIND_ADDR_ENV).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| invalid(BIND_ADDR_ENV, &bind_raw, e))?;

        let url_raw = lookup(LISTINGS_URL_ENV).unwrap_or_else(|| DEFAULT_LISTINGS_URL.to_string());
        let listings_url = Url::parse(&url_raw).map_err(|e| invalid(LISTINGS_URL_ENV, &url_raw, e))?;
        if !matches!(listings_url.scheme(), "http" | "https") {
            return Err(invalid(LISTINGS_URL_ENV, &url_raw, "scheme must be http or https"));
        }

        let fetch_timeout = match lookup(FETCH_TIMEOUT_ENV) {
            Some(raw) => {
                let secs = raw
                    .parse::<u64>()
                    .map_err(|e| invalid(FETCH_TIMEOUT_ENV, &raw, e))?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let max_workers = match lookup(MAX_WORKERS_ENV) {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                Ok(_) => return Err(invalid(MAX_WORKERS_ENV, &raw, "must be at least 1")),
                Err(e) => return Err(invalid(MAX_WORKERS_ENV, &raw, e)),
            },
            None => DEFAULT_MAX_WORKERS,
        };

        Ok(Config {
            bind_addr,
            listings_url,
            fetch_timeout,
            max_workers,
        })
    }
}

fn invalid(key: &'static str, value: &str, reason: impl fmt::Display) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
