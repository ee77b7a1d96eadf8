use mongodb::Client;

use crate::error::{PersistError, Result};
use crate::mongo::{MongoMessageStore, MongoThreadStore};

/// Entry point for the MongoDB persistence layer.
pub struct PersistClient {
    thread_store: MongoThreadStore,
    message_store: MongoMessageStore,
}

impl PersistClient {
    pub async fn connect(mongodb_uri: &str, db_name: &str) -> Result<Self> {
        let client = Client::with_uri_str(mongodb_uri)
            .await
            .map_err(|e| PersistError::Connection(e.to_string()))?;

        Ok(Self {
            thread_store: MongoThreadStore::new(&client, db_name),
            message_store: MongoMessageStore::new(&client, db_name),
        })
    }

    /// Create the unique indexes both stores rely on. Run once at startup;
    /// the thread-pair index is what turns a creation race into a
    /// recoverable duplicate-key error.
    pub async fn ensure_indexes(&self) -> Result<()> {
        self.thread_store.ensure_indexes().await?;
        self.message_store.ensure_indexes().await?;
        Ok(())
    }

    pub fn threads(&self) -> &MongoThreadStore {
        &self.thread_store
    }

    pub fn messages(&self) -> &MongoMessageStore {
        &self.message_store
    }
}
