use crate::error::{AppError, Result};
use crate::item::item_models::Item;
use crate::item::item_repository::ItemRepository;
use crate::search::geo::{within_radius, BoundingBox};

pub const MIN_RADIUS_KM: f64 = 0.1;
pub const MAX_RADIUS_KM: f64 = 10.0;

/// A validated radius query. Construction fails before any store access.
#[derive(Debug, Clone, Copy)]
pub struct SearchArea {
    pub lat: f64,
    pub lng: f64,
    pub radius_km: f64,
}

impl SearchArea {
    pub fn new(lat: f64, lng: f64, radius_km: f64) -> Result<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(AppError::Validation("lat must be within [-90, 90]".into()));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(AppError::Validation("lng must be within [-180, 180]".into()));
        }
        if !radius_km.is_finite() || !(MIN_RADIUS_KM..=MAX_RADIUS_KM).contains(&radius_km) {
            return Err(AppError::Validation(
                "radius_km must be within [0.1, 10]".into(),
            ));
        }
        Ok(Self { lat, lng, radius_km })
    }
}

#[derive(Clone)]
pub struct SearchService {
    item_repo: ItemRepository,
}

impl SearchService {
    pub fn new(item_repo: ItemRepository) -> Self {
        Self { item_repo }
    }

    /// Two-phase radius search: rectangular prefilter against the store
    /// (capped, oldest-first), then the exact haversine circle test.
    pub async fn search(&self, area: SearchArea, category: Option<&str>) -> Result<Vec<Item>> {
        let bbox = BoundingBox::around(area.lat, area.lng, area.radius_km);

        let candidates = self.item_repo.find_in_bounding_box(&bbox, category).await?;

        tracing::debug!(
            candidates = candidates.len(),
            radius_km = area.radius_km,
            "radius search prefilter"
        );

        Ok(filter_by_distance(candidates, area))
    }
}

/// Exact circle membership pass, preserving candidate order.
fn filter_by_distance(candidates: Vec<Item>, area: SearchArea) -> Vec<Item> {
    candidates
        .into_iter()
        .filter(|item| within_radius(area.lat, area.lng, item.lat, item.lng, area.radius_km))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn item_at(lat: f64, lng: f64) -> Item {
        Item {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            title: "Garden Hose".to_string(),
            description: "50ft garden hose in excellent condition.".to_string(),
            category: "Garden".to_string(),
            exchange_kind: "GIVE".to_string(),
            trade_for: None,
            photos: vec![],
            lat,
            lng,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_search_area_validation() {
        assert!(SearchArea::new(40.7128, -74.0060, 5.0).is_ok());
        assert!(SearchArea::new(40.7128, -74.0060, 0.1).is_ok());
        assert!(SearchArea::new(40.7128, -74.0060, 10.0).is_ok());

        assert!(SearchArea::new(40.7128, -74.0060, 0.05).is_err());
        assert!(SearchArea::new(40.7128, -74.0060, 10.5).is_err());
        assert!(SearchArea::new(40.7128, -74.0060, f64::NAN).is_err());
        assert!(SearchArea::new(f64::INFINITY, -74.0060, 5.0).is_err());
        assert!(SearchArea::new(95.0, -74.0060, 5.0).is_err());
        assert!(SearchArea::new(40.7128, 200.0, 5.0).is_err());
    }

    #[test]
    fn test_filter_by_distance_drops_far_candidates() {
        let area = SearchArea::new(40.7128, -74.0060, 5.0).unwrap();
        let near = item_at(40.7150, -74.0080); // ~0.3 km
        let far = item_at(40.7589, -73.9851); // ~6.1 km
        let near_id = near.id;

        let kept = filter_by_distance(vec![near, far], area);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, near_id);
    }

    #[test]
    fn test_filter_by_distance_preserves_order() {
        let area = SearchArea::new(40.7128, -74.0060, 5.0).unwrap();
        let first = item_at(40.7150, -74.0080);
        let second = item_at(40.7100, -74.0000);
        let ids = vec![first.id, second.id];

        let kept = filter_by_distance(vec![first, second], area);
        assert_eq!(kept.iter().map(|i| i.id).collect::<Vec<_>>(), ids);
    }
}
