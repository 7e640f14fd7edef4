//! Server shared state
//!
//! Holds configuration, HTTP clients and the single search session.

use crate::config::Config;
use crate::error::Result;
use crate::geo::ip_location::IpLocator;
use crate::poi::overpass::OverpassClient;
use crate::session::SearchSession;
use std::time::Instant;
use tokio::sync::{watch, Mutex};

/// Session summary readable without taking the session lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub phase: &'static str,
    pub auto_detect: bool,
}

impl SessionSnapshot {
    pub fn of(session: &SearchSession) -> Self {
        Self {
            phase: session.phase().name(),
            auto_detect: session.auto_detect,
        }
    }
}

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Config,

    /// The one search session; held for the whole search cycle
    pub session: Mutex<SearchSession>,

    /// Latest session summary, published while the lock is held
    snapshot: watch::Sender<SessionSnapshot>,

    /// Overpass client
    pub client: OverpassClient,

    /// Auto-detect provider
    pub locator: IpLocator,

    started: Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Result<Self> {
        let session = SearchSession::new(config.location.auto_detect);
        let client = OverpassClient::new(config.overpass.timeout())?;
        let (snapshot, _) = watch::channel(SessionSnapshot::of(&session));

        Ok(Self {
            config,
            session: Mutex::new(session),
            snapshot,
            client,
            locator: IpLocator::new()?,
            started: Instant::now(),
        })
    }

    /// Replace the auto-detect provider
    pub fn with_locator(mut self, locator: IpLocator) -> Self {
        self.locator = locator;
        self
    }

    /// Current session summary; never waits on a running search
    pub fn snapshot(&self) -> SessionSnapshot {
        *self.snapshot.borrow()
    }

    /// Publish a new session summary
    pub fn publish(&self, snapshot: SessionSnapshot) {
        self.snapshot.send_replace(snapshot);
    }

    /// Seconds since the server started
    pub fn uptime_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}
