//! Centralized constants for the cafe-finder crate
//!
//! Values shared by several modules live here; tunable defaults that can be
//! overridden from the config file live in `config::defaults`.

/// Search policy
pub mod search {
    /// Smallest search radius accepted, in meters
    pub const MIN_RADIUS_METERS: u32 = 500;

    /// Largest search radius accepted, in meters
    pub const MAX_RADIUS_METERS: u32 = 2000;

    /// Number of cafes shown to the user
    pub const DISPLAY_LIMIT: usize = 20;

    /// OSM tag value selecting cafes
    pub const AMENITY: &str = "cafe";
}

/// Display strings
pub mod display {
    /// Label for cafes without a `name` tag
    pub const UNNAMED_CAFE: &str = "Unnamed Cafe";

    /// Label for the origin marker
    pub const ORIGIN_LABEL: &str = "You are here";
}

/// External API endpoints
pub mod api {
    /// IP geolocation API (free, no key required)
    pub const IP_API_URL: &str = "http://ip-api.com/json";

    /// Primary Overpass mirror
    pub const OVERPASS_MAIN_URL: &str = "https://overpass-api.de/api/interpreter";

    /// Secondary Overpass mirror
    pub const OVERPASS_KUMI_URL: &str = "https://overpass.kumi.systems/api/interpreter";

    /// User-Agent sent to public OSM services
    pub const USER_AGENT: &str = concat!("cafe-finder/", env!("CARGO_PKG_VERSION"));
}
