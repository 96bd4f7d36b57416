//! Configuration management for sentiment-hue.
//!
//! Covers the outer surfaces only: where the server listens and how large
//! rendered swatches are. The sentiment colors themselves are fixed.

use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Swatch rendering configuration
    pub swatch: SwatchConfig,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Default host address
    pub default_host: IpAddr,
    /// Default port
    pub default_port: u16,
}

/// Swatch rendering configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwatchConfig {
    /// Width of the SVG swatch in pixels
    pub width: u32,
    /// Height of the SVG swatch in pixels
    pub height: u32,
}

/// CLI configuration overrides
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Host override
    pub host: Option<IpAddr>,
    /// Port override
    pub port: Option<u16>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            default_host: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            default_port: 8080,
        }
    }
}

impl Default for SwatchConfig {
    fn default() -> Self {
        Self {
            width: 120,
            height: 60,
        }
    }
}

/// Reads and parses an environment variable, warning when it is set but unparsable.
fn env_var<T: FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(variable = name, value = %raw, "Ignoring unparsable environment variable");
            None
        }
    }
}

impl Config {
    /// Load configuration with CLI overrides.
    ///
    /// Precedence is CLI, then environment (`HOST`, `PORT`, `SWATCH_WIDTH`,
    /// `SWATCH_HEIGHT`), then defaults.
    pub fn load(cli_overrides: Option<CliOverrides>) -> Self {
        let mut config = Self::default();
        let overrides = cli_overrides.unwrap_or_default();

        if let Some(host) = overrides.host.or_else(|| env_var("HOST")) {
            config.server.default_host = host;
        }
        if let Some(port) = overrides.port.or_else(|| env_var("PORT")) {
            config.server.default_port = port;
        }

        if let Some(width) = env_var::<u32>("SWATCH_WIDTH") {
            config.swatch.width = width.max(1);
        }
        if let Some(height) = env_var::<u32>("SWATCH_HEIGHT") {
            config.swatch.height = height.max(1);
        }

        tracing::debug!(?config, "Configuration loaded");

        config
    }

    /// Get the default host address
    pub fn default_host(&self) -> IpAddr {
        self.server.default_host
    }

    /// Get the default port
    pub fn default_port(&self) -> u16 {
        self.server.default_port
    }

    /// Get the swatch configuration
    pub fn swatch_config(&self) -> &SwatchConfig {
        &self.swatch
    }
}

impl CliOverrides {
    /// Create CLI overrides from CLI arguments
    pub fn from_cli_args(host: Option<IpAddr>, port: Option<u16>) -> Self {
        Self { host, port }
    }
}
