//! Great-circle math for the radius search.
//!
//! The prefilter converts the radius to degrees with a flat 111 km/degree for
//! both axes. Longitude degrees shrink toward the poles, so the box is wider
//! than the circle at high latitudes; for a hyperlocal (≤10 km) radius that
//! over-selection is accepted and the haversine pass removes the excess.

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers per degree of latitude (and, approximately, longitude).
pub const KM_PER_DEGREE: f64 = 111.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub fn around(lat: f64, lng: f64, radius_km: f64) -> Self {
        let delta = radius_km / KM_PER_DEGREE;
        Self {
            min_lat: lat - delta,
            max_lat: lat + delta,
            min_lng: lng - delta,
            max_lng: lng + delta,
        }
    }

    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }
}

/// Haversine distance in kilometers between two WGS84 points.
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Exact circle membership test, boundary inclusive.
pub fn within_radius(center_lat: f64, center_lng: f64, lat: f64, lng: f64, radius_km: f64) -> bool {
    haversine_km(center_lat, center_lng, lat, lng) <= radius_km
}

#[cfg(test)]
mod tests {
    use super::*;

    // Lower Manhattan
    const CENTER: (f64, f64) = (40.7128, -74.0060);

    #[test]
    fn test_haversine_zero_distance() {
        assert_eq!(haversine_km(CENTER.0, CENTER.1, CENTER.0, CENTER.1), 0.0);
    }

    #[test]
    fn test_haversine_times_square_is_about_6km() {
        // Times Square area, ~6.1 km from the center
        let d = haversine_km(CENTER.0, CENTER.1, 40.7589, -73.9851);
        assert!((5.8..6.4).contains(&d), "got {}", d);
    }

    #[test]
    fn test_haversine_nearby_point_is_under_1km() {
        let d = haversine_km(CENTER.0, CENTER.1, 40.7150, -74.0080);
        assert!(d < 1.0, "got {}", d);
    }

    #[test]
    fn test_within_radius_end_to_end_scenario() {
        // 5 km search from lower Manhattan: Times Square out, neighbor in
        assert!(!within_radius(CENTER.0, CENTER.1, 40.7589, -73.9851, 5.0));
        assert!(within_radius(CENTER.0, CENTER.1, 40.7150, -74.0080, 5.0));
    }

    #[test]
    fn test_within_radius_boundary_is_inclusive() {
        // Walk due north by ~5 km, then search with the exact computed
        // distance as the radius: the boundary point must be included
        let lat = CENTER.0 + (5.0 / EARTH_RADIUS_KM).to_degrees();
        let d = haversine_km(CENTER.0, CENTER.1, lat, CENTER.1);
        assert!((d - 5.0).abs() < 1e-6, "got {}", d);
        assert!(within_radius(CENTER.0, CENTER.1, lat, CENTER.1, d));
    }

    #[test]
    fn test_bounding_box_around_center() {
        let bbox = BoundingBox::around(40.0, -74.0, 5.55);
        assert!((bbox.max_lat - 40.05).abs() < 1e-9);
        assert!((bbox.min_lat - 39.95).abs() < 1e-9);
        assert!((bbox.max_lng - -73.95).abs() < 1e-9);
        assert!((bbox.min_lng - -74.05).abs() < 1e-9);
    }

    #[test]
    fn test_bounding_box_contains() {
        let bbox = BoundingBox::around(40.0, -74.0, 5.0);
        assert!(bbox.contains(40.0, -74.0));
        assert!(bbox.contains(40.04, -74.04));
        assert!(!bbox.contains(40.1, -74.0));
        assert!(!bbox.contains(40.0, -73.9));
    }
}
