use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

const DEFAULT_DATA_URL: &str = "https://25.javascript.pages.academy/keksobooking/data";

/// Where the offers come from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataOrigin {
    Http(Url),
    File(PathBuf),
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub data_origin: DataOrigin,
    pub debounce: Duration,
    pub fetch_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_origin = match lookup("OFFERS_DATA_FILE") {
            Some(path) if !path.trim().is_empty() => DataOrigin::File(PathBuf::from(path)),
            _ => {
                let raw = lookup("OFFERS_DATA_URL").unwrap_or_else(|| DEFAULT_DATA_URL.to_string());
                DataOrigin::Http(
                    Url::parse(&raw).context("OFFERS_DATA_URL must be a valid URL")?,
                )
            }
        };

        let debounce_ms: u64 = lookup("FILTER_DEBOUNCE_MS")
            .unwrap_or_else(|| "500".to_string())
            .parse()
            .context("FILTER_DEBOUNCE_MS must be a valid number")?;

        let fetch_timeout_secs: u64 = lookup("FETCH_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .context("FETCH_TIMEOUT_SECS must be a valid number")?;

        Ok(Self {
            data_origin,
            debounce: Duration::from_millis(debounce_ms),
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),
        })
    }
}
