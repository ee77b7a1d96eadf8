use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use tracing::{debug, info, warn};

use weft_assistant::{RemoteContextClient, RemoteRole};
use weft_persist::{Interlocutor, MessageStore, PersistError, Thread, ThreadStore};
use weft_template::{TemplateError, TemplateParams, TemplateRenderer};

use crate::error::{Result, SyncError};
use crate::locks::CreationLocks;

/// Keeps a thread's remote context in sync after an outbound template send.
///
/// The service owns no persistent state; it coordinates the thread store,
/// message store, remote context client, and template renderer. Each call is
/// an independent task; only thread creation is serialized per
/// (contact, agent) pair.
pub struct ThreadContextService {
    threads: Arc<dyn ThreadStore>,
    messages: Arc<dyn MessageStore>,
    remote: Arc<dyn RemoteContextClient>,
    renderer: TemplateRenderer,
    attribution: Interlocutor,
    creation_locks: CreationLocks,
}

/// Input for one synchronization: the pair, the template that was just sent,
/// and the channel id of the sent message. The caller must have durably
/// recorded the send before invoking the service.
#[derive(Debug, Clone)]
pub struct ContextSyncRequest {
    pub contact_id: i64,
    pub agent_id: i64,
    pub template_name: String,
    pub template_params: TemplateParams,
    pub message_id: String,
}

impl ContextSyncRequest {
    pub fn new(
        contact_id: i64,
        agent_id: i64,
        template_name: impl Into<String>,
        template_params: impl Into<TemplateParams>,
        message_id: impl Into<String>,
    ) -> Self {
        Self {
            contact_id,
            agent_id,
            template_name: template_name.into(),
            template_params: template_params.into(),
            message_id: message_id.into(),
        }
    }
}

/// Successful synchronization: which thread carries the context now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextSync {
    pub thread_id: ObjectId,
    pub remote_context_id: String,
}

impl ThreadContextService {
    pub fn new(
        threads: Arc<dyn ThreadStore>,
        messages: Arc<dyn MessageStore>,
        remote: Arc<dyn RemoteContextClient>,
        renderer: TemplateRenderer,
    ) -> Self {
        Self {
            threads,
            messages,
            remote,
            renderer,
            attribution: Interlocutor::Agent,
            creation_locks: CreationLocks::new(),
        }
    }

    /// Attribute synchronized turns to a different party. Template sends are
    /// agent turns, hence the default.
    pub fn with_attribution(mut self, attribution: Interlocutor) -> Self {
        self.attribution = attribution;
        self
    }

    /// Synchronize thread context after a template message was sent.
    ///
    /// Steps run strictly in order: resolve (or create) the thread, render
    /// the template, append the rendered text to the remote context, attach
    /// context metadata to the sent message, touch the thread. A failure at
    /// any step aborts the remaining ones; nothing already done is rolled
    /// back (a thread created here is found and reused by the next call).
    pub async fn update_context_after_template(
        &self,
        request: ContextSyncRequest,
    ) -> Result<ContextSync> {
        info!(
            contact_id = request.contact_id,
            agent_id = request.agent_id,
            template = %request.template_name,
            message_id = %request.message_id,
            "updating thread context after template send"
        );

        let thread = self
            .get_or_create_thread(request.contact_id, request.agent_id)
            .await?;

        let content = self
            .renderer
            .render(&request.template_name, &request.template_params)
            .await
            .map_err(|source| match source {
                TemplateError::Load { .. } => SyncError::TemplateLoad {
                    template: request.template_name.clone(),
                    source,
                },
                TemplateError::Render { .. } => SyncError::TemplateRender {
                    template: request.template_name.clone(),
                    source,
                },
            })?;

        // Remote first: local bookkeeping must never claim context the
        // remote store does not have.
        self.remote
            .add_message(&thread.remote_context_id, &content, self.remote_role())
            .await
            .map_err(|source| SyncError::RemoteContextAppend {
                remote_context_id: thread.remote_context_id.clone(),
                source,
            })?;

        self.messages
            .update_with_context(&request.message_id, thread.id, self.attribution)
            .await
            .map_err(|source| SyncError::MessageUpdate {
                message_id: request.message_id.clone(),
                source,
            })?;

        self.threads
            .update_last_interaction(thread.id, self.attribution)
            .await
            .map_err(|source| SyncError::ThreadUpdate {
                thread_id: thread.id,
                source,
            })?;

        info!(thread_id = %thread.id, "thread context updated");

        Ok(ContextSync {
            thread_id: thread.id,
            remote_context_id: thread.remote_context_id,
        })
    }

    async fn get_or_create_thread(&self, contact_id: i64, agent_id: i64) -> Result<Thread> {
        if let Some(thread) = self.find_thread(contact_id, agent_id).await? {
            debug!(thread_id = %thread.id, "found existing thread");
            return Ok(thread);
        }

        let key = (contact_id, agent_id);
        let guard = self.creation_locks.acquire(key).await;
        let created = self.create_thread_locked(contact_id, agent_id).await;
        drop(guard);
        self.creation_locks.release(key).await;
        created
    }

    /// Runs with the pair's creation lock held.
    async fn create_thread_locked(&self, contact_id: i64, agent_id: i64) -> Result<Thread> {
        // Another task may have created the thread while we waited.
        if let Some(thread) = self.find_thread(contact_id, agent_id).await? {
            debug!(thread_id = %thread.id, "thread appeared while waiting for creation lock");
            return Ok(thread);
        }

        let remote_context_id = self.remote.create_thread().await.map_err(|source| {
            SyncError::RemoteContextCreate {
                contact_id,
                agent_id,
                source,
            }
        })?;

        match self
            .threads
            .create(contact_id, agent_id, &remote_context_id)
            .await
        {
            Ok(thread) => {
                info!(
                    thread_id = %thread.id,
                    remote_context_id = %thread.remote_context_id,
                    "created thread"
                );
                Ok(thread)
            }
            // Another process won the insert (unique index backstop); use
            // its thread. The remote context created above is orphaned but
            // harmless.
            Err(PersistError::DuplicateThread { .. }) => {
                warn!(contact_id, agent_id, "lost thread creation race, re-reading winner");
                self.find_thread(contact_id, agent_id)
                    .await?
                    .ok_or(SyncError::ThreadCreate {
                        contact_id,
                        agent_id,
                        source: PersistError::DuplicateThread {
                            contact_id,
                            agent_id,
                        },
                    })
            }
            Err(source) => Err(SyncError::ThreadCreate {
                contact_id,
                agent_id,
                source,
            }),
        }
    }

    async fn find_thread(&self, contact_id: i64, agent_id: i64) -> Result<Option<Thread>> {
        self.threads
            .find_by_contact_and_agent(contact_id, agent_id)
            .await
            .map_err(|source| SyncError::ThreadLookup {
                contact_id,
                agent_id,
                source,
            })
    }

    fn remote_role(&self) -> RemoteRole {
        match self.attribution {
            Interlocutor::Agent => RemoteRole::Assistant,
            Interlocutor::Contact => RemoteRole::User,
        }
    }
}
