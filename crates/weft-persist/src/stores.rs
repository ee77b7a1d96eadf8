use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::Result;
use crate::models::{ChannelMessage, Interlocutor, Thread};

/// CRUD surface over thread records.
///
/// All reads exclude soft-deleted threads.
#[async_trait]
pub trait ThreadStore: Send + Sync {
    /// Find the live thread for a (contact, agent) pair.
    async fn find_by_contact_and_agent(
        &self,
        contact_id: i64,
        agent_id: i64,
    ) -> Result<Option<Thread>>;

    /// Persist a new thread bound to an already-created remote context.
    /// Fails with [`PersistError::DuplicateThread`] if a live thread for the
    /// pair already exists.
    ///
    /// [`PersistError::DuplicateThread`]: crate::error::PersistError::DuplicateThread
    async fn create(
        &self,
        contact_id: i64,
        agent_id: i64,
        remote_context_id: &str,
    ) -> Result<Thread>;

    /// Record who spoke last and when.
    async fn update_last_interaction(
        &self,
        thread_id: ObjectId,
        last_message_from: Interlocutor,
    ) -> Result<()>;

    async fn find_by_id(&self, thread_id: ObjectId) -> Result<Option<Thread>>;
}

/// Update surface over channel message records.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Attach context metadata to a message identified by its external id.
    async fn update_with_context(
        &self,
        message_id: &str,
        context_id: ObjectId,
        context_from: Interlocutor,
    ) -> Result<()>;

    async fn find_by_message_id(&self, message_id: &str) -> Result<Option<ChannelMessage>>;
}
