//! Overpass API data source (OpenStreetMap)
//!
//! Every mirror exposes the same interpreter endpoint: an HTTP GET with the
//! Overpass QL program in the `data` query parameter, answering with JSON.

use crate::constants::api::USER_AGENT;
use crate::constants::search::AMENITY;
use crate::error::Result;
use crate::geo::Coordinates;
use crate::poi::PointOfInterest;
use serde::Deserialize;
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// A backend that can run a POI query against one endpoint
pub trait PoiSource: Send + Sync {
    /// Run `query` against `endpoint`, returning the parsed elements
    fn query(
        &self,
        endpoint: &str,
        query: &str,
    ) -> impl Future<Output = Result<Vec<PointOfInterest>>> + Send;
}

/// Build the Overpass QL program selecting cafe nodes around `origin`
pub fn cafe_query(origin: Coordinates, radius_m: u32) -> String {
    format!(
        "[out:json];node[amenity={}](around:{},{},{});out;",
        AMENITY,
        radius_m,
        origin.lat(),
        origin.lng()
    )
}

/// Interpreter response body
#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    #[serde(default)]
    id: i64,
    lat: Option<f64>,
    lon: Option<f64>,
    #[serde(default)]
    tags: HashMap<String, String>,
}

impl OverpassResponse {
    fn into_pois(self) -> Vec<PointOfInterest> {
        self.elements
            .into_iter()
            .filter_map(OverpassElement::into_poi)
            .collect()
    }
}

impl OverpassElement {
    fn into_poi(mut self) -> Option<PointOfInterest> {
        let (Some(lat), Some(lon)) = (self.lat, self.lon) else {
            debug!("Skipping element {} without coordinates", self.id);
            return None;
        };
        let location = match Coordinates::new(lat, lon) {
            Ok(location) => location,
            Err(e) => {
                debug!("Skipping element {}: {}", self.id, e);
                return None;
            }
        };

        Some(PointOfInterest {
            id: self.id,
            location,
            name: self.tags.remove("name"),
        })
    }
}

/// HTTP client for Overpass interpreter endpoints
#[derive(Debug, Clone)]
pub struct OverpassClient {
    client: reqwest::Client,
}

impl OverpassClient {
    /// Create a client with the given per-request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

impl PoiSource for OverpassClient {
    async fn query(&self, endpoint: &str, query: &str) -> Result<Vec<PointOfInterest>> {
        let response = self
            .client
            .get(endpoint)
            .query(&[("data", query)])
            .send()
            .await?
            .error_for_status()?;

        let body: OverpassResponse = response.json().await?;
        Ok(body.into_pois())
    }
}
