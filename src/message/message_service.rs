use super::message_models::Message;
use super::message_repository::MessageRepository;
use crate::conversation::conversation_repository::ConversationRepository;
use crate::db::DbPool;
use crate::error::{AppError, Result};
use uuid::Uuid;

#[derive(Clone)]
pub struct MessageService {
    db: DbPool,
    repo: MessageRepository,
    conversation_repo: ConversationRepository,
}

impl MessageService {
    pub fn new(db: DbPool, repo: MessageRepository, conversation_repo: ConversationRepository) -> Self {
        Self {
            db,
            repo,
            conversation_repo,
        }
    }

    /// Insert the message and bump the conversation's `updated_at` in the
    /// same transaction. Sender must be a participant.
    pub async fn post_message(
        &self,
        sender_id: Uuid,
        conversation_id: Uuid,
        content: &str,
    ) -> Result<Message> {
        self.ensure_participant(conversation_id, sender_id).await?;

        let mut tx = self.db.begin().await?;

        let message = self
            .repo
            .create_with_tx(&mut tx, conversation_id, sender_id, content)
            .await?;
        self.conversation_repo
            .touch_with_tx(&mut tx, conversation_id)
            .await?;

        tx.commit().await?;

        Ok(message)
    }

    /// Messages of a conversation, oldest first. Participant-only.
    pub async fn list_messages(
        &self,
        user_id: Uuid,
        conversation_id: Uuid,
    ) -> Result<Vec<Message>> {
        self.ensure_participant(conversation_id, user_id).await?;
        self.repo.find_by_conversation(conversation_id).await
    }

    async fn ensure_participant(&self, conversation_id: Uuid, user_id: Uuid) -> Result<()> {
        if !self
            .conversation_repo
            .is_participant(conversation_id, user_id)
            .await?
        {
            return Err(AppError::Forbidden("Not a conversation participant".into()));
        }
        Ok(())
    }
}
