use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateItemRequest {
    #[validate(length(min = 2, max = 255))]
    pub title: String,
    #[validate(length(min = 10))]
    pub description: String,
    #[validate(length(min = 2, max = 100))]
    pub category: String,
    /// BORROW, GIVE or TRADE
    pub exchange_kind: String,
    pub trade_for: Option<String>,
    #[validate(length(max = 6))]
    #[serde(default)]
    pub photos: Vec<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateItemRequest {
        CreateItemRequest {
            title: "Electric Drill".to_string(),
            description: "Cordless drill with battery pack.".to_string(),
            category: "Tools".to_string(),
            exchange_kind: "BORROW".to_string(),
            trade_for: None,
            photos: vec![],
            lat: 40.7128,
            lng: -74.0060,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_rejects_short_description() {
        let mut req = valid_request();
        req.description = "too short".chars().take(5).collect();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_rejects_too_many_photos() {
        let mut req = valid_request();
        req.photos = (0..7).map(|i| format!("https://example.com/{}.jpg", i)).collect();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_coordinates() {
        let mut req = valid_request();
        req.lat = 91.0;
        assert!(req.validate().is_err());

        let mut req = valid_request();
        req.lng = -181.0;
        assert!(req.validate().is_err());
    }
}
