use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SendMessageRequest {
    pub conversation_id: Uuid,
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_content() {
        let req = SendMessageRequest {
            conversation_id: Uuid::new_v4(),
            content: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_content() {
        let req = SendMessageRequest {
            conversation_id: Uuid::new_v4(),
            content: "x".repeat(2001),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_accepts_content_at_limit() {
        let req = SendMessageRequest {
            conversation_id: Uuid::new_v4(),
            content: "x".repeat(2000),
        };
        assert!(req.validate().is_ok());
    }
}
