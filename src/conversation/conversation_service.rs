use std::collections::HashMap;

use super::conversation_dto::{ConversationResponse, ParticipantResponse, StartConversationRequest};
use super::conversation_models::{pair_key, Conversation, ParticipantUser};
use super::conversation_repository::ConversationRepository;
use crate::db::DbPool;
use crate::error::{is_unique_violation, AppError, Result};
use crate::item::item_models::Item;
use crate::item::item_repository::ItemRepository;
use uuid::Uuid;

#[derive(Clone)]
pub struct ConversationService {
    db: DbPool,
    repo: ConversationRepository,
    item_repo: ItemRepository,
}

impl ConversationService {
    pub fn new(db: DbPool, repo: ConversationRepository, item_repo: ItemRepository) -> Self {
        Self { db, repo, item_repo }
    }

    /// Idempotent pairing: returns the existing conversation for this
    /// (item scope, requester) or creates one with exactly two participants.
    ///
    /// Two concurrent first requests can both miss the lookup; the unique
    /// index on (pair_key, item scope) lets only one insert commit, and the
    /// loser re-reads the winner's row.
    pub async fn start_or_get(
        &self,
        requester_id: Uuid,
        payload: StartConversationRequest,
    ) -> Result<ConversationResponse> {
        let counterparty_id = match payload.item_id {
            Some(item_id) => {
                let item = self
                    .item_repo
                    .find_by_id(item_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Item not found".into()))?;
                item.owner_id
            }
            None => payload
                .user_id
                .ok_or_else(|| AppError::BadRequest("user_id or item_id required".into()))?,
        };

        if counterparty_id == requester_id {
            return Err(AppError::BadRequest(
                "Cannot start a conversation with yourself".into(),
            ));
        }

        if let Some(existing) = self
            .repo
            .find_for_participant(requester_id, payload.item_id)
            .await?
        {
            return self.assemble(existing).await;
        }

        match self
            .create_conversation(payload.item_id, requester_id, counterparty_id)
            .await
        {
            Ok(conversation) => self.assemble(conversation).await,
            Err(ref e) if is_unique_violation(e) => {
                tracing::debug!("lost conversation create race, returning existing");
                let existing = self
                    .repo
                    .find_for_participant(requester_id, payload.item_id)
                    .await?
                    .ok_or(AppError::InternalError)?;
                self.assemble(existing).await
            }
            Err(e) => Err(e),
        }
    }

    /// Conversation row plus both participant rows in one transaction; either
    /// everything lands or nothing does.
    async fn create_conversation(
        &self,
        item_id: Option<Uuid>,
        requester_id: Uuid,
        counterparty_id: Uuid,
    ) -> Result<Conversation> {
        let key = pair_key(requester_id, counterparty_id);

        let mut tx = self.db.begin().await?;

        let conversation = self.repo.create_with_tx(&mut tx, item_id, &key).await?;
        self.repo
            .add_participant_with_tx(&mut tx, conversation.id, requester_id)
            .await?;
        self.repo
            .add_participant_with_tx(&mut tx, conversation.id, counterparty_id)
            .await?;

        tx.commit().await?;

        Ok(conversation)
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<ConversationResponse>> {
        let conversations = self.repo.find_for_user(user_id).await?;
        if conversations.is_empty() {
            return Ok(vec![]);
        }

        let ids: Vec<Uuid> = conversations.iter().map(|c| c.id).collect();
        let item_ids: Vec<Uuid> = conversations.iter().filter_map(|c| c.item_id).collect();

        let participants = self.repo.find_participants(&ids).await?;
        let items = self.item_repo.find_by_ids(&item_ids).await?;

        Ok(build_responses(conversations, participants, items))
    }

    async fn assemble(&self, conversation: Conversation) -> Result<ConversationResponse> {
        let participants = self.repo.find_participants(&[conversation.id]).await?;

        let items = match conversation.item_id {
            Some(item_id) => self.item_repo.find_by_ids(&[item_id]).await?,
            None => vec![],
        };

        build_responses(vec![conversation], participants, items)
            .pop()
            .ok_or(AppError::InternalError)
    }
}

/// Join conversations with their participants and items. Several
/// conversations may reference the same listing (two neighbors asking about
/// one item), so items are looked up by reference, never consumed.
fn build_responses(
    conversations: Vec<Conversation>,
    participants: Vec<ParticipantUser>,
    items: Vec<Item>,
) -> Vec<ConversationResponse> {
    let mut participants_by_conversation: HashMap<Uuid, Vec<ParticipantResponse>> = HashMap::new();
    for row in participants {
        participants_by_conversation
            .entry(row.conversation_id)
            .or_default()
            .push(ParticipantResponse {
                user_id: row.user_id,
                name: row.name,
                rating_average: row.rating_average,
                rating_count: row.rating_count,
            });
    }

    let items_by_id: HashMap<Uuid, Item> = items.into_iter().map(|i| (i.id, i)).collect();

    conversations
        .into_iter()
        .map(|c| ConversationResponse {
            id: c.id,
            item: c.item_id.and_then(|id| items_by_id.get(&id).cloned()),
            participants: participants_by_conversation.remove(&c.id).unwrap_or_default(),
            created_at: c.created_at,
            updated_at: c.updated_at,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn conversation_about(item_id: Option<Uuid>, owner: Uuid, other: Uuid) -> Conversation {
        Conversation {
            id: Uuid::new_v4(),
            item_id,
            pair_key: pair_key(owner, other),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn listing(id: Uuid, owner_id: Uuid) -> Item {
        Item {
            id,
            owner_id,
            title: "Electric Drill".to_string(),
            description: "Cordless drill with battery pack.".to_string(),
            category: "Tools".to_string(),
            exchange_kind: "BORROW".to_string(),
            trade_for: None,
            photos: vec![],
            lat: 40.7128,
            lng: -74.0060,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn participant(conversation_id: Uuid, user_id: Uuid) -> ParticipantUser {
        ParticipantUser {
            conversation_id,
            user_id,
            name: "Demo User".to_string(),
            rating_average: 0.0,
            rating_count: 0,
        }
    }

    #[test]
    fn test_conversations_sharing_an_item_each_carry_it() {
        // Owner O listed item X; neighbors R1 and R2 each opened a
        // conversation about it, so O's inbox shows X twice
        let owner = Uuid::new_v4();
        let item_id = Uuid::new_v4();
        let first = conversation_about(Some(item_id), owner, Uuid::new_v4());
        let second = conversation_about(Some(item_id), owner, Uuid::new_v4());

        let responses = build_responses(
            vec![first, second],
            vec![],
            vec![listing(item_id, owner)],
        );

        assert_eq!(responses.len(), 2);
        for response in &responses {
            let item = response.item.as_ref().expect("item attached");
            assert_eq!(item.id, item_id);
        }
    }

    #[test]
    fn test_direct_conversation_has_no_item() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let conversation = conversation_about(None, a, b);

        let responses = build_responses(vec![conversation], vec![], vec![]);
        assert_eq!(responses.len(), 1);
        assert!(responses[0].item.is_none());
    }

    #[test]
    fn test_participants_grouped_per_conversation() {
        let owner = Uuid::new_v4();
        let neighbor = Uuid::new_v4();
        let conversation = conversation_about(None, owner, neighbor);
        let other = conversation_about(None, Uuid::new_v4(), Uuid::new_v4());

        let participants = vec![
            participant(conversation.id, owner),
            participant(conversation.id, neighbor),
        ];

        let responses = build_responses(vec![conversation, other], participants, vec![]);
        assert_eq!(responses[0].participants.len(), 2);
        assert!(responses[1].participants.is_empty());
    }
}
