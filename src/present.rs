//! Result presentation
//!
//! Projects ranked results into display entries, directions links and map
//! markers. No fetching or ranking happens here.

use crate::config::DirectionsConfig;
use crate::constants::display::{ORIGIN_LABEL, UNNAMED_CAFE};
use crate::constants::search::DISPLAY_LIMIT;
use crate::geo::Coordinates;
use crate::poi::RankedResults;
use serde::{Deserialize, Serialize};

/// One listed cafe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CafeEntry {
    /// 1-based position in the list
    pub rank: usize,
    pub name: String,
    /// Distance in whole meters (truncated)
    pub distance_m: u64,
    pub location: Coordinates,
    pub directions_url: String,
}

/// Marker kind, for map styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Origin,
    Cafe,
}

/// A point to draw on the map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapMarker {
    pub kind: MarkerKind,
    pub location: Coordinates,
    pub label: String,
}

/// Everything a front end needs to show one search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Presentation {
    /// Search id
    pub id: String,
    pub origin: Coordinates,
    pub radius_m: u32,
    /// Number of cafes found before truncation
    pub total_found: usize,
    pub entries: Vec<CafeEntry>,
    /// Origin marker first, then one per entry
    pub markers: Vec<MapMarker>,
}

/// Build the presentation for the `limit` nearest cafes
///
/// `limit` is capped at `DISPLAY_LIMIT`.
pub fn present(results: &RankedResults, directions: &DirectionsConfig, limit: usize) -> Presentation {
    let origin = results.origin;

    let entries: Vec<CafeEntry> = results
        .top(limit.min(DISPLAY_LIMIT))
        .iter()
        .enumerate()
        .map(|(i, ranked)| CafeEntry {
            rank: i + 1,
            name: ranked
                .poi
                .name
                .clone()
                .unwrap_or_else(|| UNNAMED_CAFE.to_string()),
            distance_m: ranked.distance_m.trunc() as u64,
            location: ranked.poi.location,
            directions_url: directions.link(origin, ranked.poi.location),
        })
        .collect();

    let mut markers = Vec::with_capacity(entries.len() + 1);
    markers.push(MapMarker {
        kind: MarkerKind::Origin,
        location: origin,
        label: ORIGIN_LABEL.to_string(),
    });
    markers.extend(entries.iter().map(|entry| MapMarker {
        kind: MarkerKind::Cafe,
        location: entry.location,
        label: format!("{} ({} m)", entry.name, entry.distance_m),
    }));

    Presentation {
        id: results.id.clone(),
        origin,
        radius_m: results.radius_m,
        total_found: results.len(),
        entries,
        markers,
    }
}
