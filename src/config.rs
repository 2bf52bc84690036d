use std::fmt;
use std::time::Duration;
use thiserror::Error;
use crate::{initialize_client, ClientError, YouTubeDataV3Client, YouTubeDataV3Source, DEFAULT_HOST, DEFAULT_TIMEOUT};

pub const API_KEY_VAR: &str = "YT_API_KEY";
pub const HOST_VAR: &str = "YT_API_HOST";
pub const TIMEOUT_VAR: &str = "YT_API_TIMEOUT_SECS";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingApiKey(&'static str),
    #[error("Invalid {var}: {value:?}")]
    InvalidTimeout { var: &'static str, value: String },
    #[error("Client error: {0}")]
    Client(#[from] ClientError),
}

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub host: String,
    pub timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("host", &self.host)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey(API_KEY_VAR))?;

        let host = lookup(HOST_VAR)
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout { var: TIMEOUT_VAR, value }),
            },
            None => DEFAULT_TIMEOUT,
        };

        Ok(Config { api_key, host, timeout })
    }

    pub fn build_source(&self) -> Result<YouTubeDataV3Source, ConfigError> {
        let client = YouTubeDataV3Client::new(self.host.clone(), initialize_client()?)
            .with_timeout(self.timeout);
        Ok(YouTubeDataV3Source::new(client, self.api_key.clone()))
    }
}
