use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use super::search_service::SearchArea;
use crate::{error::Result, item::item_models::Item, state::AppState};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    lat: f64,
    lng: f64,
    radius_km: f64,
    category: Option<String>,
}

/// Radius search over active listings
#[utoipa::path(
    get,
    path = "/api/search",
    params(
        ("lat" = f64, Query, description = "Center latitude (WGS84 degrees)"),
        ("lng" = f64, Query, description = "Center longitude (WGS84 degrees)"),
        ("radius_km" = f64, Query, description = "Search radius, 0.1 to 10 km"),
        ("category" = Option<String>, Query, description = "Exact category filter")
    ),
    responses(
        (status = 200, description = "Listings within the radius", body = Vec<Item>),
        (status = 400, description = "Invalid parameters")
    ),
    tag = "search"
)]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Item>>> {
    let area = SearchArea::new(query.lat, query.lng, query.radius_km)?;

    let items = state
        .search_service
        .search(area, query.category.as_deref())
        .await?;

    Ok(Json(items))
}
