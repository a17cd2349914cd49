//! Configuration loading and constants.
//!
//! Loads the optional TOML configuration file and defines defaults for the
//! listener address, the log filter and the version label. `AppConfig` is the root
//! configuration struct; the version label is never read from the file, only
//! from the `APP_VERSION` environment variable.

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

use crate::version::VersionLabel;

// =============================================================================
// Version Label
// =============================================================================

/// Environment variable holding the deployment version label
pub const APP_VERSION_ENV: &str = "APP_VERSION";

/// Label used when `APP_VERSION` is unset or empty
pub const DEFAULT_VERSION_LABEL: &str = "blue";

// =============================================================================
// HTTP Listener
// =============================================================================

/// Listen on all interfaces by default
pub const DEFAULT_HTTP_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

pub const DEFAULT_HTTP_PORT: u16 = 5000;

/// Health responses must never be served from an intermediary cache
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "greeter=info";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Deployment label, populated from the environment at start-up
    #[serde(skip)]
    pub version: VersionLabel,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    /// IPv4 or IPv6 literal, e.g. "0.0.0.0" or "::"
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: IpAddr,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> IpAddr {
        DEFAULT_HTTP_HOST
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the version label from `APP_VERSION`.
    pub fn with_env_version(self) -> Self {
        self.with_version(VersionLabel::from_env())
    }

    pub fn with_version(mut self, version: VersionLabel) -> Self {
        self.version = version;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation(
                "http.port must be between 1 and 65535".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
