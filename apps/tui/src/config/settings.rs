use dotenv::dotenv;
use reqwest::Url;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_DATA_URL: &str = "https://r-eco-52zl8.ondigitalocean.app/visualising";
pub const DEFAULT_GEO_URL: &str =
    "https://raw.githubusercontent.com/holtzy/D3-graph-gallery/master/DATA/world.geojson";
pub const DEFAULT_LOG_FILE: &str = "radiopharma-tui.log";

pub const DATA_URL_VAR: &str = "RADIOPHARMA_DATA_URL";
pub const GEO_URL_VAR: &str = "RADIOPHARMA_GEO_URL";
pub const REFRESH_SECS_VAR: &str = "RADIOPHARMA_REFRESH_SECS";
pub const TIMEOUT_SECS_VAR: &str = "RADIOPHARMA_TIMEOUT_SECS";
pub const LOG_FILE_VAR: &str = "RADIOPHARMA_LOG_FILE";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} is not an http(s) URL: {value}")]
    InvalidUrl { key: &'static str, value: String },

    #[error("{key} must be a whole number of seconds, got {value}")]
    InvalidSeconds { key: &'static str, value: String },
}

/// Runtime configuration resolved from `.env`, the environment and CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_url: String,
    pub geo_url: String,
    /// Refetch the document on this interval; `None` refreshes only on demand.
    pub refresh_interval: Option<Duration>,
    /// Per-request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub log_file: PathBuf,
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            geo_url: DEFAULT_GEO_URL.to_string(),
            refresh_interval: None,
            timeout: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            debug: false,
        }
    }
}

impl Settings {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let data_url = match value(DATA_URL_VAR) {
            Some(url) => validate_url(DATA_URL_VAR, url)?,
            None => defaults.data_url,
        };
        let geo_url = match value(GEO_URL_VAR) {
            Some(url) => validate_url(GEO_URL_VAR, url)?,
            None => defaults.geo_url,
        };

        Ok(Self {
            data_url,
            geo_url,
            refresh_interval: value(REFRESH_SECS_VAR)
                .map(|raw| parse_seconds(REFRESH_SECS_VAR, raw))
                .transpose()?
                .flatten(),
            timeout: value(TIMEOUT_SECS_VAR)
                .map(|raw| parse_seconds(TIMEOUT_SECS_VAR, raw))
                .transpose()?
                .flatten(),
            log_file: value(LOG_FILE_VAR).map_or(defaults.log_file, PathBuf::from),
            debug: value("DEBUG").is_some_and(|flag| matches!(flag.as_str(), "1" | "true" | "yes")),
        })
    }
}

fn validate_url(key: &'static str, value: String) -> Result<String, ConfigError> {
    match Url::parse(&value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(value),
        _ => Err(ConfigError::InvalidUrl { key, value }),
    }
}

// Zero disables the setting.
fn parse_seconds(key: &'static str, value: String) -> Result<Option<Duration>, ConfigError> {
    match value.parse::<u64>() {
        Ok(0) => Ok(None),
        Ok(seconds) => Ok(Some(Duration::from_secs(seconds))),
        Err(_) => Err(ConfigError::InvalidSeconds { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, Settings, DATA_URL_VAR, DEFAULT_GEO_URL, REFRESH_SECS_VAR, TIMEOUT_SECS_VAR};
    use std::collections::HashMap;
    use std::time::Duration;

    fn settings(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() -> Result<(), ConfigError> {
        assert_eq!(settings(&[])?, Settings::default());
        Ok(())
    }

    #[test]
    fn reads_overrides() -> Result<(), ConfigError> {
        let settings = settings(&[
            (DATA_URL_VAR, "http://localhost:8080/visualising"),
            (REFRESH_SECS_VAR, "300"),
            (TIMEOUT_SECS_VAR, " 15 "),
            ("RADIOPHARMA_LOG_FILE", "/tmp/radiopharma.log"),
            ("DEBUG", "1"),
        ])?;

        assert_eq!(settings.data_url, "http://localhost:8080/visualising");
        assert_eq!(settings.geo_url, DEFAULT_GEO_URL);
        assert_eq!(settings.refresh_interval, Some(Duration::from_secs(300)));
        assert_eq!(settings.timeout, Some(Duration::from_secs(15)));
        assert_eq!(settings.log_file.to_str(), Some("/tmp/radiopharma.log"));
        assert!(settings.debug);
        Ok(())
    }

    #[test]
    fn zero_seconds_disables_refresh() -> Result<(), ConfigError> {
        assert_eq!(settings(&[(REFRESH_SECS_VAR, "0")])?.refresh_interval, None);
        Ok(())
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(
            settings(&[(DATA_URL_VAR, "ftp://example.org/data")]),
            Err(ConfigError::InvalidUrl {
                key: DATA_URL_VAR,
                value: "ftp://example.org/data".to_string(),
            })
        );
        assert!(settings(&[(DATA_URL_VAR, "not a url")]).is_err());
        assert!(matches!(
            settings(&[(TIMEOUT_SECS_VAR, "soon")]),
            Err(ConfigError::InvalidSeconds { .. })
        ));
    }
}
