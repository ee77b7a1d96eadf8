#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mongodb::bson::oid::ObjectId;
use tokio::sync::Mutex;

use weft_assistant::{
    AssistantError, ListMessagesParams, RemoteContextClient, RemoteMessage, RemoteRole, RunHandle,
};
use weft_persist::{ChannelMessage, Interlocutor, MessageStore, PersistError, Thread, ThreadStore};
use weft_template::{
    ComponentType, StaticTemplateSource, Template, TemplateComponent, TemplateRenderer,
};

pub fn make_thread(contact_id: i64, agent_id: i64, remote_context_id: &str) -> Thread {
    let now = Utc::now();
    Thread {
        id: ObjectId::new(),
        contact_id,
        agent_id,
        remote_context_id: remote_context_id.to_string(),
        created_at: now,
        last_interaction_at: now,
        last_message_from: None,
        deleted_at: None,
    }
}

/// Thread store over a plain Vec, with the unique-pair constraint the real
/// Mongo index enforces. Yields around lock acquisition so concurrent tests
/// actually interleave.
#[derive(Default)]
pub struct InMemoryThreadStore {
    pub threads: Mutex<Vec<Thread>>,
    pub create_calls: AtomicUsize,
    pub touches: Mutex<Vec<(ObjectId, Interlocutor)>>,
}

impl InMemoryThreadStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seeded(thread: Thread) -> Self {
        let store = Self::new();
        store.threads.lock().await.push(thread);
        store
    }

    pub async fn len(&self) -> usize {
        self.threads.lock().await.len()
    }
}

#[async_trait]
impl ThreadStore for InMemoryThreadStore {
    async fn find_by_contact_and_agent(
        &self,
        contact_id: i64,
        agent_id: i64,
    ) -> Result<Option<Thread>, PersistError> {
        let found = self
            .threads
            .lock()
            .await
            .iter()
            .find(|t| {
                t.contact_id == contact_id && t.agent_id == agent_id && t.deleted_at.is_none()
            })
            .cloned();
        tokio::task::yield_now().await;
        Ok(found)
    }

    async fn create(
        &self,
        contact_id: i64,
        agent_id: i64,
        remote_context_id: &str,
    ) -> Result<Thread, PersistError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;

        let mut threads = self.threads.lock().await;
        let duplicate = threads.iter().any(|t| {
            t.contact_id == contact_id && t.agent_id == agent_id && t.deleted_at.is_none()
        });
        if duplicate {
            return Err(PersistError::DuplicateThread {
                contact_id,
                agent_id,
            });
        }

        let thread = make_thread(contact_id, agent_id, remote_context_id);
        threads.push(thread.clone());
        Ok(thread)
    }

    async fn update_last_interaction(
        &self,
        thread_id: ObjectId,
        last_message_from: Interlocutor,
    ) -> Result<(), PersistError> {
        let mut threads = self.threads.lock().await;
        let thread = threads
            .iter_mut()
            .find(|t| t.id == thread_id)
            .ok_or_else(|| PersistError::ThreadNotFound(thread_id.to_string()))?;
        thread.last_interaction_at = Utc::now();
        thread.last_message_from = Some(last_message_from);

        self.touches.lock().await.push((thread_id, last_message_from));
        Ok(())
    }

    async fn find_by_id(&self, thread_id: ObjectId) -> Result<Option<Thread>, PersistError> {
        Ok(self
            .threads
            .lock()
            .await
            .iter()
            .find(|t| t.id == thread_id && t.deleted_at.is_none())
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryMessageStore {
    pub updates: Mutex<Vec<(String, ObjectId, Interlocutor)>>,
    pub fail: AtomicBool,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn update_with_context(
        &self,
        message_id: &str,
        context_id: ObjectId,
        context_from: Interlocutor,
    ) -> Result<(), PersistError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(PersistError::MessageNotFound(message_id.to_string()));
        }
        self.updates
            .lock()
            .await
            .push((message_id.to_string(), context_id, context_from));
        Ok(())
    }

    async fn find_by_message_id(
        &self,
        _message_id: &str,
    ) -> Result<Option<ChannelMessage>, PersistError> {
        Ok(None)
    }
}

#[derive(Default)]
pub struct MockRemoteContext {
    pub created: AtomicUsize,
    pub appends: Mutex<Vec<(String, String, RemoteRole)>>,
    pub fail_create: AtomicBool,
    pub fail_append: AtomicBool,
}

impl MockRemoteContext {
    pub fn new() -> Self {
        Self::default()
    }

    fn unavailable() -> AssistantError {
        AssistantError::Api {
            status: 503,
            message: "remote context store unavailable".to_string(),
        }
    }
}

#[async_trait]
impl RemoteContextClient for MockRemoteContext {
    async fn create_thread(&self) -> Result<String, AssistantError> {
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        let n = self.created.fetch_add(1, Ordering::SeqCst);
        Ok(format!("ctx_{}", n + 1))
    }

    async fn add_message(
        &self,
        remote_context_id: &str,
        content: &str,
        role: RemoteRole,
    ) -> Result<String, AssistantError> {
        if self.fail_append.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        let mut appends = self.appends.lock().await;
        appends.push((
            remote_context_id.to_string(),
            content.to_string(),
            role,
        ));
        Ok(format!("rmsg_{}", appends.len()))
    }

    async fn list_messages(
        &self,
        _remote_context_id: &str,
        _params: ListMessagesParams,
    ) -> Result<Vec<RemoteMessage>, AssistantError> {
        Ok(Vec::new())
    }

    async fn run_assistant(
        &self,
        _remote_context_id: &str,
        _assistant_id: &str,
    ) -> Result<RunHandle, AssistantError> {
        Err(Self::unavailable())
    }
}

pub fn welcome_template() -> Template {
    Template::new(
        "welcome",
        vec![TemplateComponent::new(
            ComponentType::Body,
            "Hello {{1}}, your account number is {{2}}.",
        )],
    )
}

pub fn renderer_for(template: Template) -> TemplateRenderer {
    TemplateRenderer::new(Arc::new(StaticTemplateSource::new().with_template(template)))
}
