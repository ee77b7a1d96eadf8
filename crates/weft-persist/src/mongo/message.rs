use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::options::IndexOptions;
use mongodb::{bson::doc, Client, Collection, IndexModel};
use tracing::info;

use crate::error::{PersistError, Result};
use crate::models::{ChannelMessage, Interlocutor};
use crate::stores::MessageStore;

#[derive(Clone)]
pub struct MongoMessageStore {
    collection: Collection<ChannelMessage>,
}

impl MongoMessageStore {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("messages");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> Result<()> {
        let index = IndexModel::builder()
            .keys(doc! { "message_id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection.create_index(index).await?;
        Ok(())
    }
}

#[async_trait]
impl MessageStore for MongoMessageStore {
    async fn update_with_context(
        &self,
        message_id: &str,
        context_id: ObjectId,
        context_from: Interlocutor,
    ) -> Result<()> {
        let filter = doc! { "message_id": message_id };
        let update = doc! {
            "$set": {
                "context_id": context_id,
                "context_from": context_from.as_str(),
            }
        };

        let result = self.collection.update_one(filter, update).await?;
        if result.matched_count == 0 {
            return Err(PersistError::MessageNotFound(message_id.to_string()));
        }

        info!(message_id, context_id = %context_id, context_from = %context_from, "attached context to message");
        Ok(())
    }

    async fn find_by_message_id(&self, message_id: &str) -> Result<Option<ChannelMessage>> {
        let filter = doc! { "message_id": message_id };
        Ok(self.collection.find_one(filter).await?)
    }
}
