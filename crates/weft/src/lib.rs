//! # Weft
//!
//! Keeps messaging threads in sync with a remote AI assistant context store
//! after outbound template sends.
//!
//! ## Overview
//!
//! When a template message goes out to a contact, the assistant serving that
//! contact should see it as part of the conversation. Weft handles that:
//!
//! - **Resolves the thread** for a (contact, agent) pair, creating one (and
//!   its remote context) on first touch
//! - **Renders the template** into plain text, caching bodies per name
//! - **Appends the rendered turn** to the remote context as the assistant
//! - **Updates bookkeeping** — which message carries which context, who
//!   spoke last, when
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use weft::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let persist = PersistClient::connect(
//!         &std::env::var("MONGODB_URI")?,
//!         "messaging",
//!     )
//!     .await?;
//!     persist.ensure_indexes().await?;
//!
//!     let remote = Arc::new(AssistantClient::new(std::env::var("OPENAI_API_KEY")?)?);
//!
//!     let templates = StaticTemplateSource::new().with_template(Template::new(
//!         "welcome",
//!         vec![TemplateComponent::new(
//!             ComponentType::Body,
//!             "Hello {{1}}, your account number is {{2}}.",
//!         )],
//!     ));
//!     let renderer = TemplateRenderer::new(Arc::new(templates));
//!
//!     let service = ThreadContextService::new(
//!         Arc::new(persist.threads().clone()),
//!         Arc::new(persist.messages().clone()),
//!         remote,
//!         renderer,
//!     );
//!
//!     let result = service
//!         .update_context_after_template(ContextSyncRequest::new(
//!             123,
//!             456,
//!             "welcome",
//!             vec!["Ana", "555"],
//!             "wamid.123456789",
//!         ))
//!         .await?;
//!
//!     println!("synced thread {} -> {}", result.thread_id, result.remote_context_id);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! Weft is organized into focused crates:
//!
//! - **`weft-sync`**: the synchronization orchestrator
//! - **`weft-template`**: template model, body cache, renderer
//! - **`weft-persist`**: MongoDB-backed thread and message stores
//! - **`weft-assistant`**: remote context client (OpenAI Assistants v2)
//!
//! ## License
//!
//! MIT

pub mod prelude;

pub use weft_sync::{ContextSync, ContextSyncRequest, SyncError, ThreadContextService};

pub use weft_template::{
    ComponentType, StaticTemplateSource, Template, TemplateCache, TemplateComponent,
    TemplateError, TemplateParams, TemplateRenderer, TemplateSource,
};

pub use weft_persist::{
    ChannelMessage, Interlocutor, MessageStore, MongoMessageStore, MongoThreadStore,
    PersistClient, PersistError, Thread, ThreadStore,
};

pub use weft_assistant::{
    AssistantClient, AssistantError, ListMessagesParams, RemoteContextClient, RemoteMessage,
    RemoteRole, RunHandle,
};
