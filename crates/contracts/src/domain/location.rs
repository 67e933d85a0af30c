//! Geographic types exchanged between the map screen and the chat screen.

use serde::{Deserialize, Serialize};

/// WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A confirmed map selection handed back through the map screen's callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

impl SelectedLocation {
    pub fn new(point: GeoPoint, address: impl Into<String>) -> Self {
        Self {
            latitude: point.latitude,
            longitude: point.longitude,
            address: address.into(),
        }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_location_keeps_its_point() {
        let point = GeoPoint::new(37.78825, -122.4324);
        let selected = SelectedLocation::new(point, "123 Main St");
        assert_eq!(selected.point(), point);
        assert_eq!(selected.address, "123 Main St");
    }
}
