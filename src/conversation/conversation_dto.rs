use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::item::item_models::Item;

/// Either `item_id` (counterparty resolves to the item's owner, overriding
/// `user_id`) or `user_id` for a direct chat.
#[derive(Debug, Deserialize, ToSchema)]
pub struct StartConversationRequest {
    pub user_id: Option<Uuid>,
    pub item_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ParticipantResponse {
    pub user_id: Uuid,
    pub name: String,
    pub rating_average: f64,
    pub rating_count: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConversationResponse {
    pub id: Uuid,
    pub item: Option<Item>,
    pub participants: Vec<ParticipantResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
