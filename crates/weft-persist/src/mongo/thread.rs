use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::IndexOptions;
use mongodb::{bson::doc, Client, Collection, IndexModel};
use tracing::{debug, info};

use crate::error::{PersistError, Result};
use crate::models::{Interlocutor, Thread};
use crate::stores::ThreadStore;

use super::is_duplicate_key;

#[derive(Clone)]
pub struct MongoThreadStore {
    collection: Collection<Thread>,
}

impl MongoThreadStore {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("threads");
        Self { collection }
    }

    /// Create the unique partial index over live (contact_id, agent_id)
    /// pairs. Deleted threads keep their history without blocking a new
    /// thread for the same pair.
    pub async fn ensure_indexes(&self) -> Result<()> {
        let index = IndexModel::builder()
            .keys(doc! { "contact_id": 1, "agent_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .partial_filter_expression(doc! { "deleted_at": { "$type": "null" } })
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        Ok(())
    }
}

#[async_trait]
impl ThreadStore for MongoThreadStore {
    async fn find_by_contact_and_agent(
        &self,
        contact_id: i64,
        agent_id: i64,
    ) -> Result<Option<Thread>> {
        let filter = doc! {
            "contact_id": contact_id,
            "agent_id": agent_id,
            "deleted_at": null,
        };
        let thread = self.collection.find_one(filter).await?;

        if let Some(ref thread) = thread {
            debug!(thread_id = %thread.id, contact_id, agent_id, "found existing thread");
        }
        Ok(thread)
    }

    async fn create(
        &self,
        contact_id: i64,
        agent_id: i64,
        remote_context_id: &str,
    ) -> Result<Thread> {
        let now = Utc::now();
        let thread = Thread {
            id: ObjectId::new(),
            contact_id,
            agent_id,
            remote_context_id: remote_context_id.to_string(),
            created_at: now,
            last_interaction_at: now,
            last_message_from: None,
            deleted_at: None,
        };

        match self.collection.insert_one(&thread).await {
            Ok(_) => {
                info!(thread_id = %thread.id, contact_id, agent_id, "created thread");
                Ok(thread)
            }
            Err(e) if is_duplicate_key(&e) => Err(PersistError::DuplicateThread {
                contact_id,
                agent_id,
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn update_last_interaction(
        &self,
        thread_id: ObjectId,
        last_message_from: Interlocutor,
    ) -> Result<()> {
        let filter = doc! { "_id": thread_id, "deleted_at": null };
        let update = doc! {
            "$set": {
                "last_interaction_at": bson::DateTime::now(),
                "last_message_from": last_message_from.as_str(),
            }
        };

        let result = self.collection.update_one(filter, update).await?;
        if result.matched_count == 0 {
            return Err(PersistError::ThreadNotFound(thread_id.to_string()));
        }
        Ok(())
    }

    async fn find_by_id(&self, thread_id: ObjectId) -> Result<Option<Thread>> {
        let filter = doc! { "_id": thread_id, "deleted_at": null };
        Ok(self.collection.find_one(filter).await?)
    }
}
