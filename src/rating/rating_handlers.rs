use axum::{extract::State, Extension, Json};
use uuid::Uuid;
use validator::Validate;

use super::{rating_dto::SubmitRatingRequest, rating_models::Rating};
use crate::{error::Result, state::AppState};

/// Rate a counterparty after an exchange
#[utoipa::path(
    post,
    path = "/api/ratings",
    request_body = SubmitRatingRequest,
    responses(
        (status = 200, description = "Rating recorded, aggregate updated", body = Rating),
        (status = 400, description = "Score out of range or oversized comment"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Ratee not found")
    ),
    tag = "ratings",
    security(("bearer_auth" = []))
)]
pub async fn submit_rating(
    State(state): State<AppState>,
    Extension(user_id): Extension<Uuid>,
    Json(payload): Json<SubmitRatingRequest>,
) -> Result<Json<Rating>> {
    payload.validate()?;

    let rating = state.rating_service.submit(user_id, payload).await?;

    Ok(Json(rating))
}
