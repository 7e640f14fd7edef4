//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/cafe-finder/config.toml

pub mod defaults;

use crate::constants::api::{OVERPASS_KUMI_URL, OVERPASS_MAIN_URL};
use crate::constants::search::DISPLAY_LIMIT;
use crate::error::{Error, Result};
use crate::geo::resolver::{resolve, LocationInput};
use crate::geo::Coordinates;
use crate::poi::fetcher::FetchPolicy;
use crate::poi::clamp_radius;
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Search defaults
    #[serde(default)]
    pub search: SearchConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Overpass mirror settings
    #[serde(default)]
    pub overpass: OverpassConfig,

    /// Location settings
    #[serde(default)]
    pub location: LocationConfig,

    /// Directions link settings
    #[serde(default)]
    pub directions: DirectionsConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Search defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search radius in meters (clamped to [500, 2000] when used)
    #[serde(default = "default_radius")]
    pub radius: i64,

    /// Number of cafes listed
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

/// Overpass mirror settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverpassConfig {
    /// Equivalent endpoints, tried in order
    #[serde(default = "default_mirrors")]
    pub mirrors: Vec<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Pause between attempts in milliseconds
    #[serde(default = "default_retry_pause_ms")]
    pub retry_pause_ms: u64,
}

/// Location settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Try IP geolocation first
    #[serde(default = "default_auto_detect")]
    pub auto_detect: bool,

    /// "lat,lng" used when no manual location is given
    #[serde(default = "default_manual")]
    pub default_manual: String,
}

/// Directions link settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsConfig {
    /// Routing engine identifier
    #[serde(default = "default_engine")]
    pub engine: String,

    /// Link template with {engine}, {from_lat}, {from_lng}, {to_lat}, {to_lng}
    #[serde(default = "default_template")]
    pub template: String,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

// Default value functions for serde
fn default_radius() -> i64 {
    DEFAULT_RADIUS
}
fn default_display_limit() -> usize {
    DEFAULT_DISPLAY_LIMIT
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_mirrors() -> Vec<String> {
    vec![OVERPASS_MAIN_URL.to_string(), OVERPASS_KUMI_URL.to_string()]
}
fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_retry_pause_ms() -> u64 {
    DEFAULT_RETRY_PAUSE_MS
}
fn default_auto_detect() -> bool {
    DEFAULT_AUTO_DETECT
}
fn default_manual() -> String {
    DEFAULT_MANUAL_LOCATION.to_string()
}
fn default_engine() -> String {
    DEFAULT_DIRECTIONS_ENGINE.to_string()
}
fn default_template() -> String {
    DEFAULT_DIRECTIONS_TEMPLATE.to_string()
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            display_limit: default_display_limit(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            mirrors: default_mirrors(),
            timeout_secs: default_timeout_secs(),
            retry_pause_ms: default_retry_pause_ms(),
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            auto_detect: default_auto_detect(),
            default_manual: default_manual(),
        }
    }
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            template: default_template(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl OverpassConfig {
    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl DirectionsConfig {
    /// Build a directions link from `from` to `to`
    pub fn link(&self, from: Coordinates, to: Coordinates) -> String {
        self.template
            .replace("{engine}", &self.engine)
            .replace("{from_lat}", &from.lat().to_string())
            .replace("{from_lng}", &from.lng().to_string())
            .replace("{to_lat}", &to.lat().to_string())
            .replace("{to_lng}", &to.lng().to_string())
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, creating it if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read config file: {}", e))
            })?;

            toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse config file: {}", e))
            })
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, content).map_err(|e| {
            Error::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["search", "radius"] => Some(self.search.radius.to_string()),
            ["search", "display_limit"] => Some(self.search.display_limit.to_string()),

            ["output", "format"] => Some(self.output.format.clone()),

            ["overpass", "mirrors"] => Some(self.overpass.mirrors.join(",")),
            ["overpass", "timeout_secs"] => Some(self.overpass.timeout_secs.to_string()),
            ["overpass", "retry_pause_ms"] => Some(self.overpass.retry_pause_ms.to_string()),

            ["location", "auto_detect"] => Some(self.location.auto_detect.to_string()),
            ["location", "default_manual"] => Some(self.location.default_manual.clone()),

            ["directions", "engine"] => Some(self.directions.engine.clone()),
            ["directions", "template"] => Some(self.directions.template.clone()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["search", "radius"] => {
                let radius: i64 = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid radius value: {}", value))
                })?;
                self.search.radius = i64::from(clamp_radius(radius));
            }
            ["search", "display_limit"] => {
                let limit: usize = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid display limit: {}", value))
                })?;
                self.search.display_limit = limit.min(DISPLAY_LIMIT);
            }

            ["output", "format"] => {
                self.output.format = value.to_string();
            }

            ["overpass", "mirrors"] => {
                let mirrors: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .map(str::to_string)
                    .collect();
                if mirrors.is_empty() {
                    return Err(Error::Config("At least one mirror is required".to_string()));
                }
                self.overpass.mirrors = mirrors;
            }
            ["overpass", "timeout_secs"] => {
                self.overpass.timeout_secs = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid timeout value: {}", value))
                })?;
            }
            ["overpass", "retry_pause_ms"] => {
                self.overpass.retry_pause_ms = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid pause value: {}", value))
                })?;
            }

            ["location", "auto_detect"] => {
                self.location.auto_detect = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid boolean value: {}", value))
                })?;
            }
            ["location", "default_manual"] => {
                resolve(LocationInput::Manual(value))
                    .map_err(|e| Error::Config(e.to_string()))?;
                self.location.default_manual = value.trim().to_string();
            }

            ["directions", "engine"] => {
                self.directions.engine = value.to_string();
            }
            ["directions", "template"] => {
                self.directions.template = value.to_string();
            }

            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid port value: {}", value))
                })?;
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "search.radius",
            "search.display_limit",
            "output.format",
            "overpass.mirrors",
            "overpass.timeout_secs",
            "overpass.retry_pause_ms",
            "location.auto_detect",
            "location.default_manual",
            "directions.engine",
            "directions.template",
            "server.host",
            "server.port",
        ]
    }

    /// Mirror order and pause used by the POI fetcher
    pub fn fetch_policy(&self) -> FetchPolicy {
        FetchPolicy {
            mirrors: self.overpass.mirrors.clone(),
            retry_pause: Duration::from_millis(self.overpass.retry_pause_ms),
        }
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
