//! Convenience re-exports for the common path.

pub use weft_sync::{ContextSync, ContextSyncRequest, SyncError, ThreadContextService};

pub use weft_template::{
    ComponentType, StaticTemplateSource, Template, TemplateComponent, TemplateParams,
    TemplateRenderer, TemplateSource,
};

pub use weft_persist::{Interlocutor, MessageStore, PersistClient, Thread, ThreadStore};

pub use weft_assistant::{AssistantClient, RemoteContextClient, RemoteRole};
