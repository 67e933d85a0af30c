//! Forward and reverse geocoding against the OpenStreetMap Nominatim API.

use contracts::domain::location::GeoPoint;
use serde::Deserialize;

const NOMINATIM_BASE: &str = "https://nominatim.openstreetmap.org";

#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

#[derive(Debug, Default, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
    error: Option<String>,
}

/// Resolve a free-text query to coordinates. `Ok(None)` means the service
/// answered but found nothing.
pub async fn search_address(query: &str) -> Result<Option<GeoPoint>, String> {
    let url = format!(
        "{NOMINATIM_BASE}/search?format=json&limit=1&q={}",
        urlencoding::encode(query)
    );
    let response = gloo_net::http::Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let hits: Vec<SearchHit> = response.json().await.map_err(|e| e.to_string())?;
    let Some(hit) = hits.first() else {
        return Ok(None);
    };
    let latitude = hit
        .lat
        .parse()
        .map_err(|_| format!("bad latitude: {}", hit.lat))?;
    let longitude = hit
        .lon
        .parse()
        .map_err(|_| format!("bad longitude: {}", hit.lon))?;
    Ok(Some(GeoPoint::new(latitude, longitude)))
}

/// Resolve coordinates to a human-readable address. `Ok(None)` means the
/// service could not name the point.
pub async fn resolve_address(point: GeoPoint) -> Result<Option<String>, String> {
    let url = format!(
        "{NOMINATIM_BASE}/reverse?format=json&lat={}&lon={}",
        point.latitude, point.longitude
    );
    let response = gloo_net::http::Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let reverse: ReverseResponse = response.json().await.map_err(|e| e.to_string())?;
    if reverse.error.is_some() {
        return Ok(None);
    }
    Ok(reverse.display_name)
}
