//! Points of interest
//!
//! This module handles:
//! - The search request and its radius policy
//! - Querying Overpass mirrors for cafes
//! - Ranking results by geodesic distance

pub mod fetcher;
pub mod overpass;
pub mod rank;

use crate::constants::search::{MAX_RADIUS_METERS, MIN_RADIUS_METERS};
use crate::geo::Coordinates;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Clamp a requested radius to the allowed [500, 2000] meter range
pub fn clamp_radius(requested: i64) -> u32 {
    requested.clamp(i64::from(MIN_RADIUS_METERS), i64::from(MAX_RADIUS_METERS)) as u32
}

/// One search, created per "find cafes" action
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    origin: Coordinates,
    radius_m: u32,
}

impl SearchRequest {
    /// Create a request; the radius is clamped to the allowed range
    pub fn new(origin: Coordinates, radius: i64) -> Self {
        Self {
            origin,
            radius_m: clamp_radius(radius),
        }
    }

    pub fn origin(&self) -> Coordinates {
        self.origin
    }

    pub fn radius_m(&self) -> u32 {
        self.radius_m
    }
}

/// A cafe as returned by the data source, before ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    /// OSM element id
    pub id: i64,
    pub location: Coordinates,
    /// Value of the `name` tag, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A POI with its distance from the search origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPoi {
    #[serde(flatten)]
    pub poi: PointOfInterest,
    pub distance_m: f64,
}

/// All fetched cafes, nearest first
///
/// The full set is kept; truncation for display happens in the presenter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResults {
    /// Unique id for this search
    pub id: String,
    pub origin: Coordinates,
    pub radius_m: u32,
    pub fetched_at: DateTime<Utc>,
    pub entries: Vec<RankedPoi>,
}

impl RankedResults {
    /// The `n` nearest entries
    pub fn top(&self, n: usize) -> &[RankedPoi] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
