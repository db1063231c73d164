use std::str::FromStr;

use crate::error::{AppError, Result};
use crate::item::item_dto::CreateItemRequest;
use crate::item::item_models::{ExchangeKind, Item};
use crate::item::item_repository::ItemRepository;
use uuid::Uuid;

const RECENT_LISTINGS_LIMIT: i64 = 50;

#[derive(Clone)]
pub struct ItemService {
    repo: ItemRepository,
}

impl ItemService {
    pub fn new(repo: ItemRepository) -> Self {
        Self { repo }
    }

    pub async fn create_item(&self, owner_id: Uuid, payload: CreateItemRequest) -> Result<Item> {
        let kind = ExchangeKind::from_str(&payload.exchange_kind)
            .map_err(AppError::Validation)?;

        self.repo
            .create(
                owner_id,
                &payload.title,
                &payload.description,
                &payload.category,
                &kind.to_string(),
                payload.trade_for.as_deref(),
                &payload.photos,
                payload.lat,
                payload.lng,
            )
            .await
    }

    pub async fn get_item(&self, item_id: Uuid) -> Result<Item> {
        self.repo
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".into()))
    }

    pub async fn list_recent(&self) -> Result<Vec<Item>> {
        self.repo.list_active(RECENT_LISTINGS_LIMIT).await
    }

    /// Owner-only soft delete. The row survives; it just drops out of search
    /// and listings.
    pub async fn delete_item(&self, owner_id: Uuid, item_id: Uuid) -> Result<()> {
        let item = self
            .repo
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Item not found".into()))?;

        if item.owner_id != owner_id {
            return Err(AppError::Forbidden("Not the item owner".into()));
        }

        self.repo.soft_delete(item_id).await?;
        Ok(())
    }
}
