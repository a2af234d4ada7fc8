use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not load config from file: {0}")]
    Load(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Port cannot be 0")]
    InvalidPort,

    #[error("Upstream base URL must use http or https")]
    UnsupportedScheme,
}

/// Stagefront configuration
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Listener for incoming requests
    pub listener: Listener,
    /// Remote artist catalog to proxy
    pub upstream: UpstreamConfig,
    /// Landing page and static assets
    pub pages: PagesConfig,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let config = serde_yaml::from_reader(file)?;

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.listener.validate()?;

        if !matches!(self.upstream.base_url.scheme(), "http" | "https") {
            return Err(ValidationError::UnsupportedScheme);
        }

        Ok(())
    }
}

/// Network listener configuration
#[derive(Clone, Debug, Deserialize)]
pub struct Listener {
    /// Host address to bind to (e.g., "0.0.0.0" or "127.0.0.1")
    pub host: String,
    /// Port number to listen on
    pub port: u16,
}

impl Listener {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        Ok(())
    }
}

/// Upstream catalog configuration
#[derive(Clone, Debug, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the catalog API; the four resource paths are appended
    /// to it.
    ///
    /// Note: Uses the `url::Url` type so invalid URLs are rejected during
    /// config deserialization.
    pub base_url: Url,
    /// Total per-request timeout against the upstream
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

/// Landing page configuration
#[derive(Clone, Debug, Deserialize)]
pub struct PagesConfig {
    /// Directory holding `index.hbs` and the static assets served under
    /// `/templates/*`
    pub templates_dir: PathBuf,
}
