use mongodb::bson::oid::ObjectId;
use thiserror::Error;

use weft_assistant::AssistantError;
use weft_persist::PersistError;
use weft_template::TemplateError;

/// What failed during a context synchronization, with the identifiers that
/// were in play. Each sync surfaces at most one of these; later stages are
/// not attempted once a stage fails.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Failed to load template '{template}': {source}")]
    TemplateLoad {
        template: String,
        #[source]
        source: TemplateError,
    },

    #[error("Failed to render template '{template}': {source}")]
    TemplateRender {
        template: String,
        #[source]
        source: TemplateError,
    },

    #[error("Thread lookup failed for contact {contact_id} / agent {agent_id}: {source}")]
    ThreadLookup {
        contact_id: i64,
        agent_id: i64,
        #[source]
        source: PersistError,
    },

    #[error("Thread creation failed for contact {contact_id} / agent {agent_id}: {source}")]
    ThreadCreate {
        contact_id: i64,
        agent_id: i64,
        #[source]
        source: PersistError,
    },

    #[error("Remote context creation failed for contact {contact_id} / agent {agent_id}: {source}")]
    RemoteContextCreate {
        contact_id: i64,
        agent_id: i64,
        #[source]
        source: AssistantError,
    },

    #[error("Remote context append failed for '{remote_context_id}': {source}")]
    RemoteContextAppend {
        remote_context_id: String,
        #[source]
        source: AssistantError,
    },

    #[error("Failed to attach context to message '{message_id}': {source}")]
    MessageUpdate {
        message_id: String,
        #[source]
        source: PersistError,
    },

    #[error("Failed to update thread {thread_id}: {source}")]
    ThreadUpdate {
        thread_id: ObjectId,
        #[source]
        source: PersistError,
    },
}

pub type Result<T> = std::result::Result<T, SyncError>;
