use super::item_models::Item;
use crate::error::Result;
use crate::search::geo::BoundingBox;
use sqlx::PgPool;
use uuid::Uuid;

/// Bounding-box prefilter cap. Candidates beyond this are dropped oldest-first
/// (creation order is the documented tie-break).
pub const MAX_SEARCH_CANDIDATES: i64 = 200;

#[derive(Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        owner_id: Uuid,
        title: &str,
        description: &str,
        category: &str,
        exchange_kind: &str,
        trade_for: Option<&str>,
        photos: &[String],
        lat: f64,
        lng: f64,
    ) -> Result<Item> {
        let item = sqlx::query_as::<_, Item>(
            "INSERT INTO items (owner_id, title, description, category, exchange_kind, trade_for, photos, lat, lng)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING *",
        )
        .bind(owner_id)
        .bind(title)
        .bind(description)
        .bind(category)
        .bind(exchange_kind)
        .bind(trade_for)
        .bind(photos)
        .bind(lat)
        .bind(lng)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>> {
        let item = sqlx::query_as::<_, Item>("SELECT * FROM items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    pub async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>("SELECT * FROM items WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }

    pub async fn list_active(&self, limit: i64) -> Result<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            "SELECT * FROM items WHERE is_active = TRUE ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Active listings inside the rectangle, ordered `created_at ASC, id ASC`
    /// before the candidate cap so truncation is deterministic.
    pub async fn find_in_bounding_box(
        &self,
        bbox: &BoundingBox,
        category: Option<&str>,
    ) -> Result<Vec<Item>> {
        let mut query = String::from(
            "SELECT * FROM items
             WHERE is_active = TRUE
               AND lat BETWEEN $1 AND $2
               AND lng BETWEEN $3 AND $4",
        );
        let mut params_count = 4;

        if category.is_some() {
            params_count += 1;
            query.push_str(&format!(" AND category = ${}", params_count));
        }

        query.push_str(&format!(
            " ORDER BY created_at ASC, id ASC LIMIT ${}",
            params_count + 1
        ));

        let mut db_query = sqlx::query_as::<_, Item>(&query)
            .bind(bbox.min_lat)
            .bind(bbox.max_lat)
            .bind(bbox.min_lng)
            .bind(bbox.max_lng);

        if let Some(category) = category {
            db_query = db_query.bind(category);
        }

        let items = db_query
            .bind(MAX_SEARCH_CANDIDATES)
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<u64> {
        let result = sqlx::query("UPDATE items SET is_active = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
