//! Search session
//!
//! The caller owns a `SearchSession` and hands it to each operation; nothing
//! in the library keeps state between calls.
//!
//! ```text
//! Idle --begin--> Fetching --no cafes--> Failed
//!                          --cafes-----> ResultsReady
//! ```
//! `ResultsReady` and `Failed` last until the next `begin`.

use crate::error::{Error, Result};
use crate::geo::resolver::{resolve, LocationInput};
use crate::geo::{Coordinates, LocationProvider};
use crate::poi::fetcher::{fetch_cafes, FetchPolicy};
use crate::poi::overpass::PoiSource;
use crate::poi::rank::rank;
use crate::poi::{PointOfInterest, RankedResults, SearchRequest};
use tracing::{info, warn};

/// Where the session is in its search cycle
#[derive(Debug, Clone)]
pub enum SearchPhase {
    Idle,
    Fetching,
    /// Last search found nothing; holds the user-facing message
    Failed(String),
    ResultsReady(RankedResults),
}

impl SearchPhase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Fetching => "fetching",
            Self::Failed(_) => "failed",
            Self::ResultsReady(_) => "results_ready",
        }
    }
}

/// Per-user search state
#[derive(Debug, Clone)]
pub struct SearchSession {
    /// Try the location provider before manual input
    pub auto_detect: bool,
    request: Option<SearchRequest>,
    phase: SearchPhase,
}

impl SearchSession {
    pub fn new(auto_detect: bool) -> Self {
        Self {
            auto_detect,
            request: None,
            phase: SearchPhase::Idle,
        }
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    pub fn request(&self) -> Option<&SearchRequest> {
        self.request.as_ref()
    }

    /// Results of the last successful search, if still current
    pub fn results(&self) -> Option<&RankedResults> {
        match &self.phase {
            SearchPhase::ResultsReady(results) => Some(results),
            _ => None,
        }
    }

    /// Work out the search origin
    ///
    /// With auto-detect on, the provider is asked once. If it fails, auto-detect
    /// is switched off for the session and `manual` is used instead.
    pub async fn resolve_origin<P: LocationProvider>(
        &mut self,
        provider: &P,
        manual: &str,
    ) -> Result<Coordinates> {
        if self.auto_detect {
            match provider.detect().await {
                Ok(coords) => return resolve(LocationInput::Detected(coords)),
                Err(e) => {
                    warn!("{}; falling back to manual location", e);
                    self.auto_detect = false;
                }
            }
        }
        resolve(LocationInput::Manual(manual))
    }

    /// Start a new search cycle, discarding any previous results
    pub fn begin(&mut self, request: SearchRequest) {
        self.request = Some(request);
        self.phase = SearchPhase::Fetching;
    }

    /// Finish the current cycle with the fetched cafes
    ///
    /// An empty fetch resets the request and fails with `FetchExhausted`.
    pub fn complete(&mut self, pois: Vec<PointOfInterest>, attempts: usize) -> Result<&RankedResults> {
        let request = match (&self.phase, self.request) {
            (SearchPhase::Fetching, Some(request)) => request,
            _ => return Err(Error::Server("No search in progress".to_string())),
        };

        if pois.is_empty() {
            let err = Error::FetchExhausted { attempts };
            self.request = None;
            self.phase = SearchPhase::Failed(err.to_string());
            return Err(err);
        }

        let results = rank(request.origin(), pois, request.radius_m());
        info!(
            "Ranked {} cafes within {} m of {}",
            results.len(),
            request.radius_m(),
            request.origin()
        );
        self.phase = SearchPhase::ResultsReady(results);

        self.results()
            .ok_or_else(|| Error::Server("Results missing after ranking".to_string()))
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Run one full search cycle: fetch from the mirrors, then rank
pub async fn search<'s, S: PoiSource>(
    session: &'s mut SearchSession,
    source: &S,
    policy: &FetchPolicy,
    request: SearchRequest,
) -> Result<&'s RankedResults> {
    session.begin(request);
    let pois = fetch_cafes(source, policy, request.origin(), request.radius_m()).await;
    session.complete(pois, policy.mirrors.len())
}
