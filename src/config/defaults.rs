//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default search radius in meters
pub const DEFAULT_RADIUS: i64 = 1000;

/// Default number of cafes listed
pub const DEFAULT_DISPLAY_LIMIT: usize = 20;

/// Per-request timeout for Overpass mirrors, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 25;

/// Pause between mirror attempts, in milliseconds
pub const DEFAULT_RETRY_PAUSE_MS: u64 = 1000;

/// Try IP geolocation before falling back to manual input
pub const DEFAULT_AUTO_DETECT: bool = true;

/// Manual location used when none is given
pub const DEFAULT_MANUAL_LOCATION: &str = "12.9716,77.5946";

/// Default routing engine for directions links
pub const DEFAULT_DIRECTIONS_ENGINE: &str = "fossgis_osrm_car";

/// Default directions link template
pub const DEFAULT_DIRECTIONS_TEMPLATE: &str = "https://www.openstreetmap.org/directions?engine={engine}&route={from_lat},{from_lng}%3B{to_lat},{to_lng}";

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 7879;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "cafe-finder";
