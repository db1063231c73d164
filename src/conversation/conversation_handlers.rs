use axum::{extract::State, response::IntoResponse, Extension, Json};
use uuid::Uuid;

use super::conversation_dto::{ConversationResponse, StartConversationRequest};
use crate::{error::Result, state::AppState};

/// Start a conversation about an item (or with a user), or return the
/// existing one
#[utoipa::path(
    post,
    path = "/api/conversations",
    request_body = StartConversationRequest,
    responses(
        (status = 200, description = "Existing or newly created conversation", body = ConversationResponse),
        (status = 400, description = "Self-pairing or missing target"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Item not found")
    ),
    tag = "conversations",
    security(("bearer_auth" = []))
)]
pub async fn start_or_get_conversation(
    State(state): State<AppState>,
    Extension(user_id): Extension<Uuid>,
    Json(payload): Json<StartConversationRequest>,
) -> Result<impl IntoResponse> {
    let conversation = state
        .conversation_service
        .start_or_get(user_id, payload)
        .await?;

    Ok(Json(conversation))
}

/// List the caller's conversations, most recently active first
#[utoipa::path(
    get,
    path = "/api/conversations",
    responses(
        (status = 200, description = "Conversations with participants and item", body = Vec<ConversationResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "conversations",
    security(("bearer_auth" = []))
)]
pub async fn list_conversations(
    State(state): State<AppState>,
    Extension(user_id): Extension<Uuid>,
) -> Result<Json<Vec<ConversationResponse>>> {
    let conversations = state.conversation_service.list_for_user(user_id).await?;
    Ok(Json(conversations))
}
