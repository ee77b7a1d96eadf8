pub mod client;
pub mod error;
pub mod models;
pub mod mongo;
pub mod stores;

pub use client::PersistClient;
pub use error::PersistError;
pub use models::{ChannelMessage, Interlocutor, Thread};
pub use mongo::{MongoMessageStore, MongoThreadStore};
pub use stores::{MessageStore, ThreadStore};
