// OpenAI Assistants v2 client (HTTP direct, no SDK)

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{AssistantError, Result};
use crate::traits::RemoteContextClient;
use crate::types::{ListMessagesParams, RemoteMessage, RemoteRole, RunHandle};

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

pub struct AssistantClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl AssistantClient {
    /// Create new client with API key
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("OpenAI-Beta", HeaderValue::from_static("assistants=v2"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|_| AssistantError::InvalidApiKey)?,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http_client,
            base_url: OPENAI_API_BASE.to_string(),
        })
    }

    /// Point the client at a different endpoint (gateways, test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
            .map(|envelope| envelope.error.message)
            .unwrap_or(body);

        Err(AssistantError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl RemoteContextClient for AssistantClient {
    async fn create_thread(&self) -> Result<String> {
        let response = self
            .http_client
            .post(format!("{}/threads", self.base_url))
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let thread: ThreadResponse = Self::check(response).await?.json().await?;
        info!(remote_context_id = %thread.id, "created remote context");
        Ok(thread.id)
    }

    async fn add_message(
        &self,
        remote_context_id: &str,
        content: &str,
        role: RemoteRole,
    ) -> Result<String> {
        let response = self
            .http_client
            .post(format!(
                "{}/threads/{}/messages",
                self.base_url, remote_context_id
            ))
            .json(&serde_json::json!({
                "role": role.as_str(),
                "content": content,
            }))
            .send()
            .await?;

        let message: MessageResponse = Self::check(response).await?.json().await?;
        debug!(
            remote_context_id,
            remote_message_id = %message.id,
            role = role.as_str(),
            "appended message to remote context"
        );
        Ok(message.id)
    }

    async fn list_messages(
        &self,
        remote_context_id: &str,
        params: ListMessagesParams,
    ) -> Result<Vec<RemoteMessage>> {
        let response = self
            .http_client
            .get(format!(
                "{}/threads/{}/messages",
                self.base_url, remote_context_id
            ))
            .query(&params.to_query())
            .send()
            .await?;

        let list: ListMessagesResponse = Self::check(response).await?.json().await?;
        Ok(list.data)
    }

    async fn run_assistant(
        &self,
        remote_context_id: &str,
        assistant_id: &str,
    ) -> Result<RunHandle> {
        let response = self
            .http_client
            .post(format!("{}/threads/{}/runs", self.base_url, remote_context_id))
            .json(&serde_json::json!({ "assistant_id": assistant_id }))
            .send()
            .await?;

        let run: RunHandle = Self::check(response).await?.json().await?;
        info!(remote_context_id, assistant_id, run_id = %run.id, "started assistant run");
        Ok(run)
    }
}

#[derive(Deserialize)]
struct ThreadResponse {
    id: String,
}

#[derive(Deserialize)]
struct MessageResponse {
    id: String,
}

#[derive(Deserialize)]
struct ListMessagesResponse {
    data: Vec<RemoteMessage>,
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}
