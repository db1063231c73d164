use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Conversation {
    pub id: Uuid,
    /// None for direct chats not tied to a listing.
    pub item_id: Option<Uuid>,
    #[serde(skip_serializing)]
    pub pair_key: String,
    pub created_at: DateTime<Utc>,
    /// Bumped whenever a message lands in the conversation.
    pub updated_at: DateTime<Utc>,
}

/// One participant row joined with its user summary.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ParticipantUser {
    pub conversation_id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub rating_average: f64,
    pub rating_count: i32,
}

/// Normalized participant-pair key: both ids sorted ascending, joined with
/// ':'. The unique index over (pair_key, item scope) rides on this being
/// identical no matter which side initiates.
pub fn pair_key(a: Uuid, b: Uuid) -> String {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    format!("{}:{}", lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_key_is_order_independent() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_eq!(pair_key(a, b), pair_key(b, a));
    }

    #[test]
    fn test_pair_key_sorts_ascending() {
        let lo = Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap();
        let hi = Uuid::parse_str("00000000-0000-0000-0000-000000000002").unwrap();
        assert_eq!(pair_key(hi, lo), format!("{}:{}", lo, hi));
    }

    #[test]
    fn test_pair_key_distinguishes_pairs() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        assert_ne!(pair_key(a, b), pair_key(a, c));
    }
}
