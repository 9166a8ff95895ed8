//! Conversation and Message Repository
//!
//! 1:1 messaging. Best-effort: the last-message denormalization and
//! unread counters are read-modify-write, with no delivery guarantees.

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::{Conversation, Message};

#[derive(Clone)]
pub struct ConversationRepository {
    base: BaseRepository,
}

impl ConversationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Conversation between exactly this pair, if one exists
    pub async fn find_between(
        &self,
        a: &RecordId,
        b: &RecordId,
    ) -> RepoResult<Option<Conversation>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM conversation \
                 WHERE participants CONTAINS $a AND participants CONTAINS $b LIMIT 1",
            )
            .bind(("a", a.clone()))
            .bind(("b", b.clone()))
            .await?;
        let conversations: Vec<Conversation> = result.take(0)?;
        Ok(conversations.into_iter().next())
    }

    /// All conversations one employee participates in, most recent first
    pub async fn find_for_employee(&self, employee_id: &str) -> RepoResult<Vec<Conversation>> {
        let employee = parse_record_id("employee", employee_id)?;
        let conversations: Vec<Conversation> = self
            .base
            .db()
            .query(
                "SELECT * FROM conversation WHERE participants CONTAINS $employee \
                 ORDER BY last_message_at DESC",
            )
            .bind(("employee", employee))
            .await?
            .take(0)?;
        Ok(conversations)
    }

    /// Create an empty conversation between a pair
    pub async fn create(&self, a: &RecordId, b: &RecordId, now_millis: i64) -> RepoResult<Conversation> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE conversation SET
                    participants = $participants,
                    last_message_at = $now,
                    last_message_text = NONE,
                    last_message_from = NONE,
                    unread_counts = {}
                RETURN AFTER"#,
            )
            .bind(("participants", vec![a.clone(), b.clone()]))
            .bind(("now", now_millis))
            .await?;

        let created: Option<Conversation> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create conversation".to_string()))
    }

    /// Append a message and bump the conversation denormalization
    pub async fn append_message(
        &self,
        conversation: &Conversation,
        from: &RecordId,
        to: &RecordId,
        text: &str,
        now_millis: i64,
    ) -> RepoResult<Message> {
        let conversation_id = conversation
            .id
            .clone()
            .ok_or_else(|| RepoError::Database("Conversation has no id".to_string()))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE message SET
                    conversation = $conversation,
                    sender = $sender,
                    recipient = $recipient,
                    text = $text,
                    created_at = $now
                RETURN AFTER"#,
            )
            .bind(("conversation", conversation_id.clone()))
            .bind(("sender", from.clone()))
            .bind(("recipient", to.clone()))
            .bind(("text", text.to_string()))
            .bind(("now", now_millis))
            .await?;

        let message: Option<Message> = result.take(0)?;
        let message =
            message.ok_or_else(|| RepoError::Database("Failed to create message".to_string()))?;

        // Read-modify-write on the unread map; acceptable for a
        // best-effort collaborator
        let mut unread = conversation.unread_counts.clone();
        *unread.entry(to.to_string()).or_insert(0) += 1;

        self.base
            .db()
            .query(
                "UPDATE $thing SET \
                    last_message_at = $now, \
                    last_message_text = $text, \
                    last_message_from = $sender, \
                    unread_counts = $unread",
            )
            .bind(("thing", conversation_id))
            .bind(("now", now_millis))
            .bind(("text", text.to_string()))
            .bind(("sender", from.clone()))
            .bind(("unread", unread))
            .await?;

        Ok(message)
    }

    /// Messages of one conversation, oldest first
    pub async fn find_messages(&self, conversation_id: &str) -> RepoResult<Vec<Message>> {
        let conversation = parse_record_id("conversation", conversation_id)?;
        let messages: Vec<Message> = self
            .base
            .db()
            .query(
                "SELECT * FROM message WHERE conversation = $conversation ORDER BY created_at ASC",
            )
            .bind(("conversation", conversation))
            .await?
            .take(0)?;
        Ok(messages)
    }

    /// Reset the unread counter of one participant
    pub async fn mark_read(&self, conversation_id: &str, employee_id: &str) -> RepoResult<()> {
        let thing = parse_record_id("conversation", conversation_id)?;
        let employee = parse_record_id("employee", employee_id)?;

        let conversation: Option<Conversation> = self.base.db().select(thing.clone()).await?;
        let Some(conversation) = conversation else {
            return Err(RepoError::NotFound(format!(
                "Conversation {} not found",
                conversation_id
            )));
        };

        let mut unread = conversation.unread_counts;
        unread.insert(employee.to_string(), 0);

        self.base
            .db()
            .query("UPDATE $thing SET unread_counts = $unread")
            .bind(("thing", thing))
            .bind(("unread", unread))
            .await?;
        Ok(())
    }
}
