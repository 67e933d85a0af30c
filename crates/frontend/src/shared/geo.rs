//! Web-Mercator math for the slippy-tile map widget.
//!
//! Coordinates are projected into a global pixel space of
//! `TILE_SIZE * 2^zoom` pixels per side, the grid OpenStreetMap tiles are
//! addressed in.

use contracts::domain::location::GeoPoint;

pub const TILE_SIZE: f64 = 256.0;

/// Latitude bound of the Mercator projection.
pub const MAX_LATITUDE: f64 = 85.051_128_779_8;

/// Pixels per world side at `zoom`.
pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * (1u32 << zoom) as f64
}

/// Number of tiles per axis at `zoom`.
pub fn tile_count(zoom: u8) -> i32 {
    1 << zoom
}

pub fn clamp_latitude(latitude: f64) -> f64 {
    latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE)
}

/// Project a WGS84 point to global pixel coordinates at `zoom`.
pub fn project(point: GeoPoint, zoom: u8) -> (f64, f64) {
    let size = world_size(zoom);
    let lat = clamp_latitude(point.latitude).to_radians();
    let x = (point.longitude + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0 * size;
    (x, y)
}

/// Inverse of [`project`].
pub fn unproject(x: f64, y: f64, zoom: u8) -> GeoPoint {
    let size = world_size(zoom);
    let longitude = x / size * 360.0 - 180.0;
    let n = std::f64::consts::PI * (1.0 - 2.0 * y / size);
    let latitude = n.sinh().atan().to_degrees();
    GeoPoint::new(latitude, longitude)
}

/// Tile column holding global pixel `x`, wrapped around the antimeridian.
pub fn wrap_tile_x(tile_x: i32, zoom: u8) -> i32 {
    let count = tile_count(zoom);
    tile_x.rem_euclid(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_island_maps_to_world_center() {
        let origin = GeoPoint::new(0.0, 0.0);
        assert_eq!(project(origin, 0), (128.0, 128.0));
        assert_eq!(project(origin, 1), (256.0, 256.0));
    }

    #[test]
    fn test_project_unproject_round_trip() {
        let point = GeoPoint::new(37.78825, -122.4324);
        let (x, y) = project(point, 15);
        let back = unproject(x, y, 15);
        assert!((back.latitude - point.latitude).abs() < 1e-9);
        assert!((back.longitude - point.longitude).abs() < 1e-9);
    }

    #[test]
    fn test_latitude_is_clamped_to_mercator_bounds() {
        let pole = GeoPoint::new(90.0, 0.0);
        let (_, y) = project(pole, 3);
        assert!(y.is_finite());
        assert!(y >= 0.0);
    }

    #[test]
    fn test_tile_x_wraps_around_the_antimeridian() {
        assert_eq!(wrap_tile_x(-1, 2), 3);
        assert_eq!(wrap_tile_x(4, 2), 0);
        assert_eq!(wrap_tile_x(2, 2), 2);
    }
}
