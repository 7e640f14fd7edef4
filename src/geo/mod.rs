//! Geographic primitives
//!
//! Validated coordinates, manual location parsing, geodesic distance and
//! IP-based auto-detection.

pub mod distance;
pub mod ip_location;
pub mod resolver;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::str::FromStr;

/// A validated geographic coordinate (latitude, longitude) in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinates")]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

/// Unchecked wire form, validated through `Coordinates::new`
#[derive(Deserialize)]
struct RawCoordinates {
    lat: f64,
    lng: f64,
}

impl Coordinates {
    /// Create coordinates, rejecting out-of-range or non-finite values
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                lat
            )));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                lng
            )));
        }
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = Error;

    fn try_from(raw: RawCoordinates) -> Result<Self> {
        Self::new(raw.lat, raw.lng)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for Coordinates {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        resolver::resolve(resolver::LocationInput::Manual(s))
    }
}

/// Source of an automatically detected position
///
/// Failures are reported as `Error::ProviderUnavailable`; callers fall back to
/// manual input and never retry the provider.
pub trait LocationProvider: Send + Sync {
    fn detect(&self) -> impl Future<Output = Result<Coordinates>> + Send;
}
