//! Cafe fetching with mirror fallback
//!
//! Mirrors are tried strictly one after another. The first mirror that
//! answers with at least one cafe wins and later mirrors are never contacted.

use crate::geo::Coordinates;
use crate::poi::overpass::{cafe_query, PoiSource};
use crate::poi::PointOfInterest;
use std::time::Duration;
use tracing::{info, warn};

/// Mirror order and pacing for one fetch cycle
#[derive(Debug, Clone, PartialEq)]
pub struct FetchPolicy {
    /// Equivalent endpoints, in priority order
    pub mirrors: Vec<String>,
    /// Fixed pause before moving to the next mirror
    pub retry_pause: Duration,
}

/// Fetch raw cafes around `origin`
///
/// Returns an empty vector when every mirror failed or had no cafes. That is
/// not an error here; the session turns it into `Error::FetchExhausted`.
pub async fn fetch_cafes<S: PoiSource>(
    source: &S,
    policy: &FetchPolicy,
    origin: Coordinates,
    radius_m: u32,
) -> Vec<PointOfInterest> {
    let query = cafe_query(origin, radius_m);

    for (attempt, endpoint) in policy.mirrors.iter().enumerate() {
        match source.query(endpoint, &query).await {
            Ok(pois) if !pois.is_empty() => {
                info!("Fetched {} cafes from {}", pois.len(), endpoint);
                return pois;
            }
            Ok(_) => warn!("No cafes returned by {}", endpoint),
            Err(e) => warn!("Mirror {} failed: {}", endpoint, e),
        }

        if attempt + 1 < policy.mirrors.len() {
            tokio::time::sleep(policy.retry_pause).await;
        }
    }

    warn!("All {} mirrors failed or returned no cafes", policy.mirrors.len());
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::poi::overpass::OverpassClient;
    use crate::testing::{cafe_element, poi, spawn_stub};
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    enum Reply {
        Fail,
        Empty,
        Cafes(Vec<PointOfInterest>),
    }

    /// Scripted source keyed by endpoint, recording every call
    struct ScriptedSource {
        replies: Vec<(String, Reply)>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedSource {
        fn new(replies: Vec<(&str, Reply)>) -> Self {
            Self {
                replies: replies
                    .into_iter()
                    .map(|(e, r)| (e.to_string(), r))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl PoiSource for ScriptedSource {
        async fn query(&self, endpoint: &str, _query: &str) -> Result<Vec<PointOfInterest>> {
            self.calls.lock().unwrap().push(endpoint.to_string());
            match self.replies.iter().find(|(e, _)| e == endpoint).map(|(_, r)| r) {
                Some(Reply::Cafes(pois)) => Ok(pois.clone()),
                Some(Reply::Empty) => Ok(Vec::new()),
                Some(Reply::Fail) | None => Err(Error::Server("HTTP 500".to_string())),
            }
        }
    }

    fn policy(mirrors: &[&str]) -> FetchPolicy {
        FetchPolicy {
            mirrors: mirrors.iter().map(|m| m.to_string()).collect(),
            retry_pause: Duration::ZERO,
        }
    }

    fn origin() -> Coordinates {
        Coordinates::new(12.9716, 77.5946).unwrap()
    }

    #[tokio::test]
    async fn test_first_mirror_wins() {
        let source = ScriptedSource::new(vec![
            ("a", Reply::Cafes(vec![poi(1, 12.972, 77.595, Some("A"))])),
            ("b", Reply::Cafes(vec![poi(2, 12.973, 77.596, Some("B"))])),
        ]);

        let pois = fetch_cafes(&source, &policy(&["a", "b"]), origin(), 1000).await;

        assert_eq!(pois.len(), 1);
        assert_eq!(pois[0].id, 1);
        assert_eq!(source.calls(), vec!["a"]);
    }

    #[tokio::test]
    async fn test_failure_falls_through_without_third_attempt() {
        let source = ScriptedSource::new(vec![
            ("a", Reply::Fail),
            ("b", Reply::Cafes(vec![poi(2, 12.973, 77.596, Some("B"))])),
            ("c", Reply::Cafes(vec![poi(3, 12.974, 77.597, Some("C"))])),
        ]);

        let pois = fetch_cafes(&source, &policy(&["a", "b", "c"]), origin(), 1000).await;

        assert_eq!(pois.len(), 1);
        assert_eq!(pois[0].id, 2);
        assert_eq!(source.calls(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_empty_result_moves_on() {
        let source = ScriptedSource::new(vec![
            ("a", Reply::Empty),
            ("b", Reply::Cafes(vec![poi(2, 12.973, 77.596, None)])),
        ]);

        let pois = fetch_cafes(&source, &policy(&["a", "b"]), origin(), 1000).await;

        assert_eq!(pois.len(), 1);
        assert_eq!(source.calls(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_all_empty_returns_empty() {
        let source = ScriptedSource::new(vec![("a", Reply::Empty), ("b", Reply::Empty)]);

        let pois = fetch_cafes(&source, &policy(&["a", "b"]), origin(), 1000).await;

        assert!(pois.is_empty());
        assert_eq!(source.calls(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_all_failing_returns_empty() {
        let source = ScriptedSource::new(vec![("a", Reply::Fail), ("b", Reply::Fail)]);

        let pois = fetch_cafes(&source, &policy(&["a", "b"]), origin(), 1000).await;

        assert!(pois.is_empty());
    }

    #[tokio::test]
    async fn test_no_mirrors_returns_empty() {
        let source = ScriptedSource::new(vec![]);
        let pois = fetch_cafes(&source, &policy(&[]), origin(), 1000).await;
        assert!(pois.is_empty());
        assert!(source.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_between_attempts() {
        let source = ScriptedSource::new(vec![
            ("a", Reply::Fail),
            ("b", Reply::Empty),
            ("c", Reply::Empty),
        ]);
        let policy = FetchPolicy {
            mirrors: vec!["a".into(), "b".into(), "c".into()],
            retry_pause: Duration::from_secs(1),
        };

        let start = tokio::time::Instant::now();
        fetch_cafes(&source, &policy, origin(), 1000).await;

        // Two pauses between three mirrors, none after the last
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(2), "elapsed {:?}", elapsed);
        assert!(elapsed < Duration::from_secs(3), "elapsed {:?}", elapsed);
    }

    #[tokio::test]
    async fn test_http_500_then_success_over_the_wire() {
        let spare_hits = Arc::new(AtomicUsize::new(0));
        let hits = spare_hits.clone();

        let app = Router::new()
            .route(
                "/broken/api/interpreter",
                get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            )
            .route(
                "/good/api/interpreter",
                get(|| async {
                    Json(serde_json::json!({
                        "elements": [
                            cafe_element(10, 12.9720, 77.5950, Some("Good One")),
                            cafe_element(11, 12.9730, 77.5960, None)
                        ]
                    }))
                }),
            )
            .route(
                "/spare/api/interpreter",
                get(move || {
                    let hits = hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        Json(serde_json::json!({ "elements": [] }))
                    }
                }),
            );
        let base = spawn_stub(app).await;

        let policy = FetchPolicy {
            mirrors: vec![
                format!("{}/broken/api/interpreter", base),
                format!("{}/good/api/interpreter", base),
                format!("{}/spare/api/interpreter", base),
            ],
            retry_pause: Duration::ZERO,
        };
        let client = OverpassClient::new(Duration::from_secs(5)).unwrap();

        let pois = fetch_cafes(&client, &policy, origin(), 1000).await;

        assert_eq!(pois.len(), 2);
        assert_eq!(pois[0].name.as_deref(), Some("Good One"));
        assert_eq!(spare_hits.load(Ordering::SeqCst), 0);
    }
}
