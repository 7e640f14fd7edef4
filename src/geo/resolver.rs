//! Coordinate resolution
//!
//! Turns either an auto-detected position or a manual "lat,lng" string into
//! validated `Coordinates`.

use crate::error::{Error, Result};
use crate::geo::Coordinates;

/// Raw location input, before validation
#[derive(Debug, Clone, Copy)]
pub enum LocationInput<'a> {
    /// Position returned by an auto-detect provider
    Detected(Coordinates),
    /// User-entered "lat,lng" text
    Manual(&'a str),
}

/// Resolve a location input into coordinates
///
/// Manual input must be exactly two comma-separated numbers. Anything else,
/// including numbers outside the valid coordinate range, is reported as
/// `Error::InvalidLocationFormat`.
pub fn resolve(input: LocationInput<'_>) -> Result<Coordinates> {
    match input {
        LocationInput::Detected(coords) => Ok(coords),
        LocationInput::Manual(text) => parse_lat_lng(text),
    }
}

fn parse_lat_lng(text: &str) -> Result<Coordinates> {
    let fields: Vec<&str> = text.split(',').collect();
    let [lat, lng] = fields.as_slice() else {
        return Err(Error::InvalidLocationFormat(format!(
            "expected 2 fields, got {} in '{}'",
            fields.len(),
            text
        )));
    };

    let lat = parse_number(lat, "latitude")?;
    let lng = parse_number(lng, "longitude")?;

    Coordinates::new(lat, lng).map_err(|e| Error::InvalidLocationFormat(e.to_string()))
}

fn parse_number(token: &str, what: &str) -> Result<f64> {
    let token = token.trim();
    token
        .parse::<f64>()
        .map_err(|_| Error::InvalidLocationFormat(format!("{} '{}' is not a number", what, token)))
}
