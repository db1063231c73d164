use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A directed rater → ratee edge. Immutable; many may exist per pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Rating {
    pub id: Uuid,
    pub rater_id: Uuid,
    pub ratee_id: Uuid,
    pub item_id: Option<Uuid>,
    pub score: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}
