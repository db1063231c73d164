use super::rating_dto::SubmitRatingRequest;
use super::rating_models::Rating;
use super::rating_repository::RatingRepository;
use crate::error::{AppError, Result};
use uuid::Uuid;

#[derive(Clone)]
pub struct RatingService {
    repo: RatingRepository,
}

impl RatingService {
    pub fn new(repo: RatingRepository) -> Self {
        Self { repo }
    }

    /// One transaction: lock the ratee's user row, insert the rating, then
    /// recompute the aggregate from the full history and write it back.
    ///
    /// Full recomputation is O(n) per submission but cannot drift the way an
    /// incremental counter can; the row lock keeps concurrent submissions
    /// for the same ratee from overwriting each other's update.
    pub async fn submit(&self, rater_id: Uuid, payload: SubmitRatingRequest) -> Result<Rating> {
        let mut tx = self.repo.pool().begin().await?;

        if !self.repo.lock_ratee_with_tx(&mut tx, payload.ratee_id).await? {
            return Err(AppError::NotFound("Ratee not found".into()));
        }

        let rating = self
            .repo
            .create_with_tx(
                &mut tx,
                rater_id,
                payload.ratee_id,
                payload.item_id,
                payload.score,
                payload.comment.as_deref(),
            )
            .await?;

        let (sum, count) = self.repo.aggregate_with_tx(&mut tx, payload.ratee_id).await?;
        self.repo
            .update_user_aggregate_with_tx(&mut tx, payload.ratee_id, average(sum, count), count)
            .await?;

        tx.commit().await?;

        Ok(rating)
    }
}

/// Aggregate average; 0 when there are no ratings.
fn average(sum: i64, count: i64) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_of_empty_history_is_zero() {
        assert_eq!(average(0, 0), 0.0);
    }

    #[test]
    fn test_average_two_ratings() {
        // scores [4, 5] → 4.5
        assert_eq!(average(9, 2), 4.5);
    }

    #[test]
    fn test_average_exact_for_any_order() {
        // scores [1, 3, 5, 5] in any interleaving sum to the same aggregate
        assert_eq!(average(14, 4), 3.5);
    }

    #[test]
    fn test_average_single_rating() {
        assert_eq!(average(5, 1), 5.0);
    }
}
