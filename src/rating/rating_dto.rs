use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubmitRatingRequest {
    pub ratee_id: Uuid,
    pub item_id: Option<Uuid>,
    #[validate(range(min = 1, max = 5))]
    pub score: i32,
    #[validate(length(max = 500))]
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(score: i32, comment: Option<String>) -> SubmitRatingRequest {
        SubmitRatingRequest {
            ratee_id: Uuid::new_v4(),
            item_id: None,
            score,
            comment,
        }
    }

    #[test]
    fn test_accepts_full_score_range() {
        for score in 1..=5 {
            assert!(request(score, None).validate().is_ok());
        }
    }

    #[test]
    fn test_rejects_out_of_range_score() {
        assert!(request(0, None).validate().is_err());
        assert!(request(6, None).validate().is_err());
        assert!(request(-3, None).validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_comment() {
        assert!(request(4, Some("x".repeat(501))).validate().is_err());
        assert!(request(4, Some("x".repeat(500))).validate().is_ok());
    }
}
