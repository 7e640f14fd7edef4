//! Test helpers: local HTTP stubs standing in for Overpass mirrors and ip-api

use crate::geo::Coordinates;
use crate::poi::PointOfInterest;
use axum::Router;
use tokio::net::TcpListener;

/// Serve `app` on an ephemeral local port and return its base URL
pub async fn spawn_stub(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// An Overpass node element as returned by the interpreter
pub fn cafe_element(id: i64, lat: f64, lon: f64, name: Option<&str>) -> serde_json::Value {
    let mut tags = serde_json::json!({ "amenity": "cafe" });
    if let Some(name) = name {
        tags["name"] = serde_json::Value::String(name.to_string());
    }
    serde_json::json!({
        "type": "node",
        "id": id,
        "lat": lat,
        "lon": lon,
        "tags": tags,
    })
}

/// A raw POI at the given position
pub fn poi(id: i64, lat: f64, lng: f64, name: Option<&str>) -> PointOfInterest {
    PointOfInterest {
        id,
        location: Coordinates::new(lat, lng).unwrap(),
        name: name.map(str::to_string),
    }
}
