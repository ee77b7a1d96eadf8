use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::thread::Interlocutor;

/// A message as recorded by channel ingestion. Created elsewhere; this crate
/// only attaches context metadata (`context_id`, `context_from`) after an
/// outbound template send.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelMessage {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// External identifier assigned by the messaging channel
    /// (e.g. a delivery receipt id).
    pub message_id: String,
    pub context_id: Option<ObjectId>,
    pub context_from: Option<Interlocutor>,
    pub sender: String,
    pub recipient: String,
    pub body: Option<String>,
    pub timestamp: DateTime<Utc>,
}
