use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ListMessagesParams, RemoteMessage, RemoteRole, RunHandle};

/// Operations against the remote conversational context store.
///
/// `create_thread` and `add_message` are what context synchronization needs;
/// `list_messages` and `run_assistant` are exposed for callers that drive an
/// assistant over the synchronized context.
#[async_trait]
pub trait RemoteContextClient: Send + Sync {
    /// Create a remote context and return its identifier.
    async fn create_thread(&self) -> Result<String>;

    /// Append a turn to a remote context; returns the remote message id.
    async fn add_message(
        &self,
        remote_context_id: &str,
        content: &str,
        role: RemoteRole,
    ) -> Result<String>;

    async fn list_messages(
        &self,
        remote_context_id: &str,
        params: ListMessagesParams,
    ) -> Result<Vec<RemoteMessage>>;

    async fn run_assistant(&self, remote_context_id: &str, assistant_id: &str)
        -> Result<RunHandle>;
}
