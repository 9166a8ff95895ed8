//! Conversation and Message Models
//!
//! 1:1 messaging between two employees. Best-effort collaborator — no
//! delivery guarantees.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Conversation matching the `conversation` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// Exactly two employee references
    #[serde(with = "serde_helpers::vec_record_id")]
    pub participants: Vec<RecordId>,
    #[serde(default)]
    pub last_message_at: i64,
    #[serde(default)]
    pub last_message_text: Option<String>,
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub last_message_from: Option<RecordId>,
    /// Employee id string -> unread message count for that participant
    #[serde(default)]
    pub unread_counts: BTreeMap<String, u32>,
}

/// Message matching the `message` table
///
/// Stored as `sender`/`recipient`; `from` is a SurrealQL keyword.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(with = "serde_helpers::record_id")]
    pub conversation: RecordId,
    #[serde(rename = "sender", with = "serde_helpers::record_id")]
    pub from: RecordId,
    #[serde(rename = "recipient", with = "serde_helpers::record_id")]
    pub to: RecordId,
    pub text: String,
    #[serde(default)]
    pub created_at: i64,
}

/// Send message payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSend {
    #[serde(with = "serde_helpers::record_id")]
    pub from: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub to: RecordId,
    pub text: String,
}
