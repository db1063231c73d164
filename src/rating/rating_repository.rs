use super::rating_models::Rating;
use crate::error::{AppError, Result};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct RatingRepository {
    pool: PgPool,
}

impl RatingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Row-lock the ratee for the duration of the transaction so concurrent
    /// submissions for the same user serialize. Returns false when the user
    /// does not exist.
    pub async fn lock_ratee_with_tx(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        ratee_id: Uuid,
    ) -> Result<bool> {
        let row: Option<Uuid> = sqlx::query_scalar("SELECT id FROM users WHERE id = $1 FOR UPDATE")
            .bind(ratee_id)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(row.is_some())
    }

    pub async fn create_with_tx(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        rater_id: Uuid,
        ratee_id: Uuid,
        item_id: Option<Uuid>,
        score: i32,
        comment: Option<&str>,
    ) -> Result<Rating> {
        let rating = sqlx::query_as::<_, Rating>(
            "INSERT INTO ratings (rater_id, ratee_id, item_id, score, comment)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(rater_id)
        .bind(ratee_id)
        .bind(item_id)
        .bind(score)
        .bind(comment)
        .fetch_one(&mut **tx)
        .await?;

        Ok(rating)
    }

    /// Sum and count over the ratee's full rating history.
    pub async fn aggregate_with_tx(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        ratee_id: Uuid,
    ) -> Result<(i64, i64)> {
        let (sum, count): (i64, i64) = sqlx::query_as(
            "SELECT COALESCE(SUM(score), 0), COUNT(*) FROM ratings WHERE ratee_id = $1",
        )
        .bind(ratee_id)
        .fetch_one(&mut **tx)
        .await?;

        Ok((sum, count))
    }

    pub async fn update_user_aggregate_with_tx(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        ratee_id: Uuid,
        average: f64,
        count: i64,
    ) -> Result<()> {
        let count = i32::try_from(count).map_err(|_| AppError::InternalError)?;

        sqlx::query(
            "UPDATE users SET rating_average = $1, rating_count = $2, updated_at = NOW()
             WHERE id = $3",
        )
        .bind(average)
        .bind(count)
        .bind(ratee_id)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }
}
