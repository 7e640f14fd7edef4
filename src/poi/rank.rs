//! Distance ranking
//!
//! Every POI gets its geodesic distance from the origin exactly once, then
//! the whole set is stable-sorted nearest first.

use crate::geo::distance::geodesic_distance;
use crate::geo::Coordinates;
use crate::poi::{PointOfInterest, RankedPoi, RankedResults};
use chrono::Utc;
use uuid::Uuid;

/// Rank `pois` by geodesic distance from `origin`
///
/// Equal distances keep their input order. Nothing is dropped or truncated.
pub fn rank(origin: Coordinates, pois: Vec<PointOfInterest>, radius_m: u32) -> RankedResults {
    let mut entries: Vec<RankedPoi> = pois
        .into_iter()
        .map(|poi| {
            let distance_m = geodesic_distance(origin, poi.location);
            RankedPoi { poi, distance_m }
        })
        .collect();

    // sort_by is stable
    entries.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));

    RankedResults {
        id: Uuid::new_v4().to_string(),
        origin,
        radius_m,
        fetched_at: Utc::now(),
        entries,
    }
}
