use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A conversational thread linking a (contact, agent) pair to its remote
/// context. At most one live thread exists per pair; deleted threads are
/// soft-deleted and excluded from lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub contact_id: i64,
    pub agent_id: i64,
    /// Remote context identifier. Assigned once at creation, never changed.
    pub remote_context_id: String,
    pub created_at: DateTime<Utc>,
    pub last_interaction_at: DateTime<Utc>,
    pub last_message_from: Option<Interlocutor>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Which party authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interlocutor {
    Contact,
    Agent,
}

impl Interlocutor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interlocutor::Contact => "contact",
            Interlocutor::Agent => "agent",
        }
    }
}

impl std::fmt::Display for Interlocutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
