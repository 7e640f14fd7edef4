//! IP-based geolocation
//!
//! Uses ip-api.com to guess the user's position. Treated as an opaque
//! provider: every failure becomes `Error::ProviderUnavailable`.

use crate::constants::api::{IP_API_URL, USER_AGENT};
use crate::error::{Error, Result};
use crate::geo::{Coordinates, LocationProvider};
use serde::Deserialize;
use std::time::Duration;

/// Auto-detect requests should not hold up the manual fallback for long
const DETECT_TIMEOUT: Duration = Duration::from_secs(10);

/// IP location service
#[derive(Debug, Clone)]
pub struct IpLocator {
    client: reqwest::Client,
    url: String,
}

/// ip-api.com response
#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
    city: Option<String>,
    country: Option<String>,
}

impl IpLocator {
    /// Create a locator against ip-api.com
    pub fn new() -> Result<Self> {
        Self::with_url(IP_API_URL)
    }

    /// Create a locator against a specific endpoint
    pub fn with_url(url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(DETECT_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Fetch location from the IP API
    async fn fetch_location(&self) -> Result<Coordinates> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::ProviderUnavailable(format!("IP location request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::ProviderUnavailable(format!(
                "IP location API returned status: {}",
                response.status()
            )));
        }

        let data: IpApiResponse = response.json().await.map_err(|e| {
            Error::ProviderUnavailable(format!("Failed to parse IP location response: {}", e))
        })?;

        if data.status != "success" {
            return Err(Error::ProviderUnavailable("IP location lookup failed".to_string()));
        }

        let lat = data
            .lat
            .ok_or_else(|| Error::ProviderUnavailable("No latitude in response".to_string()))?;
        let lng = data
            .lon
            .ok_or_else(|| Error::ProviderUnavailable("No longitude in response".to_string()))?;

        let coords =
            Coordinates::new(lat, lng).map_err(|e| Error::ProviderUnavailable(e.to_string()))?;

        let place = [data.city, data.country]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ");
        tracing::info!("Detected location {} ({})", coords, place);

        Ok(coords)
    }
}

impl LocationProvider for IpLocator {
    async fn detect(&self) -> Result<Coordinates> {
        self.fetch_location().await
    }
}
