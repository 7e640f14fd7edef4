//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::error::Error;
use crate::geo::{Coordinates, LocationProvider};
use crate::poi::SearchRequest;
use crate::present::{present, Presentation};
use crate::server::state::{AppState, SessionSnapshot};
use crate::session::{search, SearchSession};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/status", get(status_handler))
        .route("/api/location", get(location_handler))
        .route("/api/search", post(search_handler))
        .route("/api/results", get(results_handler))
        .with_state(state)
}

/// Search request body
#[derive(Debug, Default, Deserialize)]
pub struct SearchBody {
    /// Manual location "lat,lng"; falls back to the configured default
    pub location: Option<String>,
    /// Auto-detect for this search; defaults to the config unless `location` is set
    pub auto_detect: Option<bool>,
    /// Search radius in meters (clamped to 500..=2000)
    pub radius: Option<i64>,
    /// Number of cafes to list (at most 20)
    pub limit: Option<usize>,
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.code.as_str() {
            "FETCH_EXHAUSTED" | "LOCATION_UNAVAILABLE" => StatusCode::SERVICE_UNAVAILABLE,
            "NOT_FOUND" => StatusCode::NOT_FOUND,
            "INTERNAL_ERROR" => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status(), Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidLocationFormat(_) => "INVALID_LOCATION_FORMAT",
            Error::InvalidCoordinates(_) => "INVALID_COORDINATES",
            Error::FetchExhausted { .. } => "FETCH_EXHAUSTED",
            Error::ProviderUnavailable(_) => "LOCATION_UNAVAILABLE",
            _ => "INTERNAL_ERROR",
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Uptime in seconds
    pub uptime_secs: u64,
    /// Session phase (idle, fetching, failed, results_ready)
    pub phase: String,
    /// Whether the session still tries auto-detect
    pub auto_detect: bool,
    /// Overpass mirrors in priority order
    pub mirrors: Vec<String>,
}

/// Server status
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let snapshot = state.snapshot();

    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.uptime_secs(),
        phase: snapshot.phase.to_string(),
        auto_detect: snapshot.auto_detect,
        mirrors: state.config.overpass.mirrors.clone(),
    })
}

/// Get current location from IP address
///
/// GET /api/location
async fn location_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Coordinates>, ApiError> {
    let coords = state.locator.detect().await.map_err(ApiError::from)?;
    Ok(Json(coords))
}

/// Run a search and return the presentation
///
/// POST /api/search
async fn search_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchBody>,
) -> Result<Json<Presentation>, ApiError> {
    let mut session = state.session.lock().await;
    let result = run_search(&state, &mut session, req).await;
    state.publish(SessionSnapshot::of(&session));
    result.map(Json)
}

async fn run_search(
    state: &AppState,
    session: &mut SearchSession,
    req: SearchBody,
) -> Result<Presentation, ApiError> {
    let config = &state.config;

    // An explicit location means manual; otherwise the configured mode is
    // retried on every search
    session.auto_detect = req
        .auto_detect
        .unwrap_or(req.location.is_none() && config.location.auto_detect);

    let manual = req
        .location
        .unwrap_or_else(|| config.location.default_manual.clone());
    let origin = session.resolve_origin(&state.locator, &manual).await?;

    let request = SearchRequest::new(origin, req.radius.unwrap_or(config.search.radius));
    let policy = config.fetch_policy();
    state.publish(SessionSnapshot {
        phase: "fetching",
        auto_detect: session.auto_detect,
    });
    let results = search(session, &state.client, &policy, request).await?;

    let limit = req.limit.unwrap_or(config.search.display_limit);
    Ok(present(results, &config.directions, limit))
}

/// Results query parameters
#[derive(Debug, Deserialize)]
pub struct ResultsQuery {
    pub limit: Option<usize>,
}

/// Latest results of the session
///
/// GET /api/results
async fn results_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ResultsQuery>,
) -> Result<Json<Presentation>, ApiError> {
    let session = state.session.lock().await;

    let results = session.results().ok_or_else(|| ApiError {
        error: format!("No results (session is {})", session.phase().name()),
        code: "NOT_FOUND".to_string(),
    })?;

    let limit = query.limit.unwrap_or(state.config.search.display_limit);
    Ok(Json(present(results, &state.config.directions, limit)))
}
