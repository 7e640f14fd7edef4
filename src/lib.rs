//! cafe-finder: nearby cafes from OpenStreetMap
//!
//! A library and CLI tool that finds cafes around a location, ranks them by
//! geodesic distance and renders directions links for the nearest ones.
//!
//! ## Features
//!
//! - IP-based location auto-detect with manual "lat,lng" fallback
//! - Overpass API queries with ordered mirror fallback
//! - WGS-84 geodesic distance ranking
//! - Text, JSON and GPX output
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use cafe_finder::config::DirectionsConfig;
//! use cafe_finder::geo::resolver::{resolve, LocationInput};
//! use cafe_finder::poi::rank::rank;
//! use cafe_finder::poi::PointOfInterest;
//! use cafe_finder::present::present;
//!
//! let origin = resolve(LocationInput::Manual("12.9716, 77.5946")).unwrap();
//! let cafes = vec![PointOfInterest {
//!     id: 1,
//!     location: "12.9730,77.5950".parse().unwrap(),
//!     name: Some("Corner Brew".to_string()),
//! }];
//!
//! let results = rank(origin, cafes, 1000);
//! let view = present(&results, &DirectionsConfig::default(), 20);
//! println!("{} is {} m away", view.entries[0].name, view.entries[0].distance_m);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod geo;
pub mod poi;
pub mod present;
pub mod server;
pub mod session;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use geo::Coordinates;
pub use poi::{PointOfInterest, RankedResults, SearchRequest};
pub use present::Presentation;
pub use session::{SearchPhase, SearchSession};
