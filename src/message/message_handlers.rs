use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use super::{message_dto::SendMessageRequest, message_models::Message};
use crate::{error::Result, state::AppState};

#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    conversation_id: Uuid,
}

/// List the messages of a conversation, oldest first
#[utoipa::path(
    get,
    path = "/api/messages",
    params(("conversation_id" = Uuid, Query, description = "Conversation id")),
    responses(
        (status = 200, description = "Messages in order", body = Vec<Message>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not a conversation participant")
    ),
    tag = "messages",
    security(("bearer_auth" = []))
)]
pub async fn list_messages(
    State(state): State<AppState>,
    Extension(user_id): Extension<Uuid>,
    Query(query): Query<MessageQuery>,
) -> Result<Json<Vec<Message>>> {
    let messages = state
        .message_service
        .list_messages(user_id, query.conversation_id)
        .await?;

    Ok(Json(messages))
}

/// Post a message to a conversation
#[utoipa::path(
    post,
    path = "/api/messages",
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "Message created", body = Message),
        (status = 400, description = "Invalid content"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not a conversation participant")
    ),
    tag = "messages",
    security(("bearer_auth" = []))
)]
pub async fn post_message(
    State(state): State<AppState>,
    Extension(user_id): Extension<Uuid>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<Json<Message>> {
    payload.validate()?;

    let message = state
        .message_service
        .post_message(user_id, payload.conversation_id, &payload.content)
        .await?;

    Ok(Json(message))
}
