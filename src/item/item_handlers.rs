use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use super::{item_dto::CreateItemRequest, item_models::Item};
use crate::{error::Result, middleware::AuthUser, state::AppState};

/// Create a new listing
#[utoipa::path(
    post,
    path = "/api/items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Listing created", body = Item),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "items",
    security(("bearer_auth" = []))
)]
pub async fn create_item(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateItemRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let item = state.item_service.create_item(user_id, payload).await?;

    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>> {
    let items = state.item_service.list_recent().await?;
    Ok(Json(items))
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
) -> Result<Json<Item>> {
    let item = state.item_service.get_item(item_id).await?;
    Ok(Json(item))
}

/// Soft-delete a listing (owner only)
#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    params(("id" = Uuid, Path, description = "Listing id")),
    responses(
        (status = 204, description = "Listing deactivated"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the item owner"),
        (status = 404, description = "Item not found")
    ),
    tag = "items",
    security(("bearer_auth" = []))
)]
pub async fn delete_item(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(item_id): Path<Uuid>,
) -> Result<StatusCode> {
    state.item_service.delete_item(user_id, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
